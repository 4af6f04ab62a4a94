use crate::container::remove_where;
use collection_traits::{AsSlice, Contains};
use tracing::trace;

/// Ordered collection in which no two positions hold equal items.
///
/// Every mutation that would introduce an item already present is
/// suppressed, and replacement collapses duplicates instead of writing
/// the new item more than once.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UniqueSequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> UniqueSequence<T> {
    /// Wraps items the caller already knows to be distinct.
    pub(crate) fn from_unique_vec(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: PartialEq> UniqueSequence<T> {
    /// Adds `item` to the end unless it is already present.
    ///
    /// Returns whether the item was added. `O(n)`
    pub fn append(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Adds `item` to the start unless it is already present.
    ///
    /// Returns whether the item was added. `O(n)`
    pub fn prepend(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.insert(0, item);
        true
    }

    /// Appends each item of `iter` that isn't present yet.
    pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
        for item in iter {
            self.append(item);
        }
    }

    /// Inserts `item` before `index` unless it is already present.
    ///
    /// Indices past the end append.
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        if index == 0 {
            self.prepend(item)
        } else if index >= self.items.len() {
            self.append(item)
        } else if self.contains(&item) {
            false
        } else {
            self.items.insert(index, item);
            true
        }
    }

    /// Removes every item matching `predicate`, visiting from the back.
    pub fn remove_if(&mut self, predicate: impl FnMut(&T) -> bool) {
        let removed = remove_where(&mut self.items, predicate);
        trace!(removed, "removed items from unique sequence");
    }

    pub fn remove(&mut self, item: &T) {
        self.remove_if(|x| x == item);
    }

    /// Collapsing replace driven by `predicate`.
    ///
    /// A position is relevant when `predicate` holds for it or it already
    /// holds `new_item`. The first relevant position is overwritten with
    /// `new_item` and every later relevant position is removed. Nothing
    /// changes when no position is relevant.
    pub fn replace_if(&mut self, mut predicate: impl FnMut(&T) -> bool, new_item: T) {
        let Some(first) = self
            .items
            .iter()
            .position(|item| predicate(item) || *item == new_item)
        else {
            return;
        };

        let tail = self.items.split_off(first + 1);
        let tail_len = tail.len();
        self.items.extend(
            tail.into_iter()
                .filter(|item| !(predicate(item) || *item == new_item)),
        );
        trace!(
            position = first,
            collapsed = tail_len - (self.items.len() - first - 1),
            "replaced item in unique sequence"
        );

        self.items[first] = new_item;
    }

    /// Collapsing replace of `old_item` with `new_item`.
    ///
    /// ```text
    /// [1, 2, 3].replace(2, 4) => [1, 4, 3]
    /// [1, 2, 3].replace(1, 2) => [2, 3]
    /// ```
    pub fn replace(&mut self, old_item: &T, new_item: T) {
        self.replace_if(|x| x == old_item, new_item);
    }

    /// Whether every item of `self` is contained in `other`.
    pub fn is_subset_of<C: Contains<T> + ?Sized>(&self, other: &C) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }

    /// Whether every item of `other` is contained in `self`.
    pub fn is_superset_of<C: AsSlice<Item = T> + ?Sized>(&self, other: &C) -> bool {
        other.as_slice().iter().all(|item| self.contains(item))
    }

    /// Items of `self`, in order, that are also contained in `other`.
    pub fn intersection<C: Contains<T> + ?Sized>(&self, other: &C) -> Self
    where
        T: Clone,
    {
        Self::from_unique_vec(
            self.items
                .iter()
                .filter(|item| other.contains(item))
                .cloned()
                .collect(),
        )
    }

    /// Items of `self` followed by the items of `other` not yet present.
    pub fn union<C: AsSlice<Item = T> + ?Sized>(&self, other: &C) -> Self
    where
        T: Clone,
    {
        let mut union = self.clone();
        union.extend(other.as_slice().iter().cloned());
        union
    }
}

impl<T: PartialEq> From<Vec<T>> for UniqueSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

/// Keeps the first occurrence of every item.
impl<T: PartialEq> FromIterator<T> for UniqueSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for UniqueSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueSequence;
    use crate::{Container, Order, Sequence};
    use rstest::rstest;

    fn set<T: PartialEq>(items: impl IntoIterator<Item = T>) -> UniqueSequence<T> {
        items.into_iter().collect()
    }

    #[test]
    fn construction_drops_later_duplicates() {
        let s = set([3, 1, 3, 2, 1]);
        assert_eq!(s.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn append_twice_keeps_size() {
        let mut s = UniqueSequence::new();
        assert!(s.append("a"));
        assert!(s.contains(&"a"));
        assert!(!s.append("a"));
        assert!(s.contains(&"a"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn prepend_duplicate_is_noop() {
        let mut s = set([1, 2]);
        assert!(!s.prepend(2));
        assert!(s.prepend(0));
        assert_eq!(s.as_slice(), &[0, 1, 2]);
    }

    #[rstest]
    #[case(1, 9, vec![0, 9, 1, 2], true)]
    #[case(1, 2, vec![0, 1, 2], false)]
    #[case(0, 2, vec![0, 1, 2], false)]
    #[case(10, 2, vec![0, 1, 2], false)]
    #[case(10, 9, vec![0, 1, 2, 9], true)]
    fn insert_respects_uniqueness(
        #[case] index: usize,
        #[case] item: i32,
        #[case] expected: Vec<i32>,
        #[case] added: bool,
    ) {
        let mut s = set([0, 1, 2]);
        assert_eq!(s.insert(index, item), added);
        assert_eq!(s.into_vec(), expected);
    }

    #[rstest]
    #[case(2, 4, vec![1, 4, 3])]
    #[case(1, 2, vec![2, 3])]
    #[case(3, 1, vec![1, 2])]
    #[case(5, 6, vec![1, 2, 3])]
    #[case(2, 2, vec![1, 2, 3])]
    #[case(5, 3, vec![1, 2, 3])]
    fn collapsing_replace(#[case] old: i32, #[case] new: i32, #[case] expected: Vec<i32>) {
        let mut s = set([1, 2, 3]);
        s.replace(&old, new);
        assert_eq!(s.into_vec(), expected);
    }

    #[test]
    fn replace_collapses_new_item_before_old() {
        // `new_item` already occurs before `old_item`: its position wins.
        let mut s = set(["x", "a", "y", "b"]);
        s.replace(&"b", "a");
        assert_eq!(s.as_slice(), &["x", "a", "y"]);
    }

    #[test]
    fn replace_if_collapses_all_matches() {
        let mut s = set([1, 2, 3, 4, 5]);
        s.replace_if(|x| x % 2 == 0, 5);
        assert_eq!(s.as_slice(), &[1, 5, 3]);
    }

    #[test]
    fn replace_if_without_match_is_noop() {
        let mut s = set([1, 3]);
        s.replace_if(|x| *x > 10, 0);
        assert_eq!(s.as_slice(), &[1, 3]);
    }

    #[test]
    fn remove_present_and_absent() {
        let mut s = set([1, 2, 3]);
        s.remove(&2);
        s.remove(&7);
        assert_eq!(s.as_slice(), &[1, 3]);

        s.remove_if(|_| true);
        assert!(s.is_empty());
    }

    #[rstest]
    #[case(vec![], vec![1, 2], true)]
    #[case(vec![], vec![], true)]
    #[case(vec![1], vec![1, 2], true)]
    #[case(vec![2, 1], vec![1, 2], true)]
    #[case(vec![1, 3], vec![1, 2], false)]
    #[case(vec![1], vec![], false)]
    fn subset(#[case] items: Vec<i32>, #[case] other: Vec<i32>, #[case] expected: bool) {
        assert_eq!(set(items).is_subset_of(&set(other)), expected);
    }

    #[rstest]
    #[case(vec![1, 2], vec![], true)]
    #[case(vec![], vec![], true)]
    #[case(vec![1, 2], vec![2], true)]
    #[case(vec![1], vec![1, 2], false)]
    #[case(vec![], vec![1], false)]
    fn superset(#[case] items: Vec<i32>, #[case] other: Vec<i32>, #[case] expected: bool) {
        assert_eq!(set(items).is_superset_of(&set(other)), expected);
    }

    #[test]
    fn subset_and_superset_only_when_equal() {
        let a = set([1, 2, 3]);
        let b = set([3, 1, 2]);
        assert!(a.is_subset_of(&b) && a.is_superset_of(&b));

        let c = set([1, 2]);
        assert!(!(a.is_subset_of(&c) && a.is_superset_of(&c)));
    }

    #[test]
    fn set_algebra_accepts_other_collections() {
        let s = set([1, 2]);
        assert!(s.is_subset_of(&[2, 1, 0]));
        assert!(s.is_subset_of(&vec![1, 2]));
        assert!(s.is_superset_of(&[1][..]));

        let values: Sequence<_> = [2, 2, 1].into_iter().collect();
        assert!(s.is_superset_of(&values));
    }

    #[test]
    fn intersection_keeps_receiver_order() {
        let a = set([4, 3, 2, 1]);
        let b = set([1, 2, 5]);
        assert_eq!(a.intersection(&b).as_slice(), &[2, 1]);
        assert!(a.intersection(&UniqueSequence::<i32>::new()).is_empty());
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn union_appends_new_items() {
        let a = set([0, 1]);
        let b = set([-1, 3]);
        assert_eq!(a.union(&b).as_slice(), &[0, 1, -1, 3]);

        let c = set([1, 2, 0]);
        assert_eq!(a.union(&c).as_slice(), &[0, 1, 2]);
        assert_eq!(a.as_slice(), &[0, 1]);
    }

    #[test]
    fn clone_keeps_kind_and_order() {
        let a = set(["b", "a"]);
        let mut cloned: UniqueSequence<&str> = a.clone();
        assert!(!cloned.append("a"));
        assert_eq!(cloned.as_slice(), a.as_slice());
    }

    #[test]
    fn sorted_set_stays_unique() {
        let a = set([3, 1, 2]);
        let mut sorted = a.sort(Order::Descending);
        assert_eq!(sorted.as_slice(), &[3, 2, 1]);
        assert!(!sorted.append(2));
    }

    #[test]
    fn indices_of_empty() {
        assert!(UniqueSequence::<u8>::new().indices().is_empty());
    }
}
