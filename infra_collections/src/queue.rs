/// First-in first-out view over an ordered container.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Queue<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Queue<T> {
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the first item, or `None` when empty.
    ///
    /// `O(n)`
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    /// The first item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
