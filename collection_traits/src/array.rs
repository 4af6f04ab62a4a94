use crate::{AsSlice, Contains, HasLength};

impl<const N: usize, T> AsSlice for [T; N] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<const N: usize, T> HasLength for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize, T: PartialEq> Contains<T> for [T; N] {
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}
