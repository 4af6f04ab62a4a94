use crate::container::{merge_sort_by, Order};
use crate::sequence::Sequence;
use crate::unique::UniqueSequence;
use collection_traits::{Contains, HasLength};
use std::hash::Hash;
use utils::map::{order_map_with_capacity, OrderMap};

/// Key/value entries in insertion order, with no key appearing twice.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: OrderMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: order_map_with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> ordermap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Updates the value of an existing entry in place, or appends a new entry.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Removes the entry for `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in entry order.
    pub fn keys(&self) -> UniqueSequence<K>
    where
        K: Clone,
    {
        UniqueSequence::from_unique_vec(self.entries.keys().cloned().collect())
    }

    /// Values in entry order.
    pub fn values(&self) -> Sequence<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// Returns a copy with entries stably sorted by `less`, leaving `self` untouched.
    pub fn sort(&self, order: Order, mut less: impl FnMut((&K, &V), (&K, &V)) -> bool) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let entries: Vec<(&K, &V)> = self.entries.iter().collect();
        let entries = merge_sort_by(entries, &mut |earlier, later| {
            let (a, b) = order.ahead(earlier, later);
            less(*a, *b)
        });

        let mut sorted = Self::with_capacity(entries.len());
        for (key, value) in entries {
            sorted.set(key.clone(), value.clone());
        }
        sorted
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl<K, V> HasLength for OrderedMap<K, V> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

/// Membership over the map's keys.
impl<K: Hash + Eq, V> Contains<K> for OrderedMap<K, V> {
    fn contains(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ordermap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = ordermap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
