#![forbid(clippy::unconditional_recursion)]

pub mod array;
pub mod slice;
pub mod vec;
pub mod vec_deque;

#[cfg(feature = "ordermap")]
pub mod order_map;
#[cfg(feature = "smallvec")]
pub mod smallvec;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Read-only view of contiguous storage.
///
/// There is deliberately no mutable counterpart: containers that enforce
/// invariants over their items only hand out shared slices.
pub trait AsSlice {
    type Item;

    fn as_slice(&self) -> &[Self::Item];
}

/// Membership test by `PartialEq` or by hash, depending on the collection.
pub trait Contains<T: ?Sized> {
    fn contains(&self, item: &T) -> bool;
}

#[cfg(test)]
mod tests {
    use crate::{AsSlice, Contains, HasLength};
    use std::collections::VecDeque;

    fn count_present<C: Contains<i32> + ?Sized>(collection: &C, items: &[i32]) -> usize {
        items.iter().filter(|item| collection.contains(item)).count()
    }

    fn total_len<C: HasLength + ?Sized>(collections: &[&C]) -> usize {
        collections.iter().map(|c| c.len()).sum()
    }

    #[test]
    fn contains_across_collections() {
        let probe = [1, 2, 3];
        assert_eq!(count_present(&[1, 3], &probe), 2);
        assert_eq!(count_present(&vec![2], &probe), 1);
        assert_eq!(count_present(&VecDeque::from([3, 4]), &probe), 1);
        assert_eq!(count_present(&[0i32; 0][..], &probe), 0);
    }

    #[test]
    fn length_and_slice_views() {
        let vec = vec![1, 2];
        assert_eq!(total_len::<Vec<i32>>(&[&vec, &vec![]]), 2);
        assert!(HasLength::is_empty(&[0u8; 0]));
        assert_eq!(AsSlice::as_slice(&[5, 6]), &[5, 6]);
    }

    #[cfg(feature = "smallvec")]
    #[test]
    fn smallvec_views() {
        let small: smallvec::SmallVec<[i32; 2]> = smallvec::smallvec![1, 2, 3];
        assert_eq!(HasLength::len(&small), 3);
        assert_eq!(count_present(&small, &[3, 4]), 1);
    }

    #[cfg(feature = "ordermap")]
    #[test]
    fn ordermap_membership_is_by_key() {
        let map: ordermap::OrderMap<i32, &str> = [(1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(count_present(&map, &[1, 2, 3]), 2);

        let set: ordermap::OrderSet<i32> = [5, 6].into_iter().collect();
        assert_eq!(count_present(&set, &[6, 7]), 1);
        assert!(!HasLength::is_empty(&set));
    }
}
