use crate::{AsSlice, Contains, HasLength};
use smallvec::SmallVec;

impl<const N: usize, T> AsSlice for SmallVec<[T; N]> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<const N: usize, T> HasLength for SmallVec<[T; N]> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize, T: PartialEq> Contains<T> for SmallVec<[T; N]> {
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}
