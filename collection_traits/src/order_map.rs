use crate::{Contains, HasLength};
use std::hash::{BuildHasher, Hash};

#[allow(clippy::disallowed_types)]
impl<K, V, H> HasLength for ordermap::OrderMap<K, V, H> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

/// Membership over the map's keys.
#[allow(clippy::disallowed_types)]
impl<K: Hash + Eq, V, H: BuildHasher> Contains<K> for ordermap::OrderMap<K, V, H> {
    fn contains(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

#[allow(clippy::disallowed_types)]
impl<V, H> HasLength for ordermap::OrderSet<V, H> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

#[allow(clippy::disallowed_types)]
impl<V: Hash + Eq, H: BuildHasher> Contains<V> for ordermap::OrderSet<V, H> {
    fn contains(&self, item: &V) -> bool {
        self.contains(item)
    }
}
