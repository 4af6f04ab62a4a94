use crate::{Contains, HasLength};
use std::collections::VecDeque;

impl<T> HasLength for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> Contains<T> for VecDeque<T> {
    fn contains(&self, item: &T) -> bool {
        self.contains(item)
    }
}
