use crate::container::remove_where;
use tracing::trace;

/// Ordered collection that permits duplicates.
///
/// Items are compared with `PartialEq` and are never cloned by the
/// sequence itself, except where a single replacement value has to fill
/// several positions.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Adds `item` to the end.
    ///
    /// `O(1)` amortized
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Adds `item` to the start.
    ///
    /// `O(n)`
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Appends every item of `iter` in its order.
    pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
        for item in iter {
            self.append(item);
        }
    }

    /// Inserts `item` before `index`.
    ///
    /// Indices past the end append instead of panicking.
    pub fn insert(&mut self, index: usize, item: T) {
        if index == 0 {
            self.prepend(item);
        } else if index >= self.items.len() {
            self.append(item);
        } else {
            self.items.insert(index, item);
        }
    }

    /// Removes every item matching `predicate`.
    ///
    /// Items are visited from the back.
    pub fn remove_if(&mut self, predicate: impl FnMut(&T) -> bool) {
        let removed = remove_where(&mut self.items, predicate);
        trace!(removed, "removed items from sequence");
    }

    /// Removes every occurrence of `item`.
    pub fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        self.remove_if(|x| x == item);
    }

    /// Overwrites every item matching `predicate` with a clone of `new_item`.
    ///
    /// Length and the positions of other items are unchanged.
    pub fn replace_if(&mut self, mut predicate: impl FnMut(&T) -> bool, new_item: T)
    where
        T: Clone,
    {
        for item in self.items.iter_mut() {
            if predicate(item) {
                *item = new_item.clone();
            }
        }
    }

    /// Overwrites every occurrence of `old_item` with `new_item`.
    pub fn replace(&mut self, old_item: &T, new_item: T)
    where
        T: PartialEq + Clone,
    {
        self.replace_if(|x| x == old_item, new_item);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
