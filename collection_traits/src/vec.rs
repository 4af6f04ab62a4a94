use crate::{AsSlice, Contains, HasLength};

impl<T> AsSlice for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> HasLength for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}
