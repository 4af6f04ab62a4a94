/// Last-in first-out view over an ordered container.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Stack<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the last item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The last item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
