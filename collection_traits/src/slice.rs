use crate::{AsSlice, Contains, HasLength};

impl<T> HasLength for [T] {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> AsSlice for [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: PartialEq> Contains<T> for [T] {
    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }
}
