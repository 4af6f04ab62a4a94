use crate::queue::Queue;
use crate::sequence::Sequence;
use crate::stack::Stack;
use crate::unique::UniqueSequence;
use collection_traits::{AsSlice, Contains, HasLength};
use strum::{Display, EnumString};

/// Direction of [`Container::sort`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString)]
pub enum Order {
    #[default]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl Order {
    /// Arguments for `less` that decide whether `later` moves ahead of
    /// `earlier` in this direction.
    pub(crate) fn ahead<'a, T: ?Sized>(self, earlier: &'a T, later: &'a T) -> (&'a T, &'a T) {
        match self {
            Order::Ascending => (later, earlier),
            Order::Descending => (earlier, later),
        }
    }
}

mod sealed {
    /// Write access to the backing storage, kept out of reach of downstream
    /// code so it can't break invariants of [`crate::UniqueSequence`].
    pub trait Storage: collection_traits::AsSlice {
        fn storage_mut(&mut self) -> &mut Vec<Self::Item>;
    }
}

/// Contract shared by every ordered container in this crate.
///
/// Iteration order is positional and is part of the contract. Iterators
/// borrow the container, so it can't be mutated while one is alive.
/// Read access goes through [`AsSlice`], membership through [`Contains`].
pub trait Container: sealed::Storage + HasLength + Sized {
    /// A new, empty container of the same concrete kind.
    fn empty_like(&self) -> Self;

    /// Returns a sorted copy using the natural ordering, leaving `self` untouched.
    ///
    /// Incomparable items such as `NaN` never cause a failure, they just end
    /// up in some stable position.
    fn sort(&self, order: Order) -> Self
    where
        Self::Item: PartialOrd + Clone,
    {
        self.sort_by(order, |a, b| a < b)
    }

    /// Returns a copy stably sorted by `less`, leaving `self` untouched.
    ///
    /// Any predicate is accepted. When `less` is not a strict weak ordering
    /// the result is still a permutation of the input.
    fn sort_by(&self, order: Order, mut less: impl FnMut(&Self::Item, &Self::Item) -> bool) -> Self
    where
        Self::Item: Clone,
    {
        let items = merge_sort_by(self.as_slice().to_vec(), &mut |earlier, later| {
            let (a, b) = order.ahead(earlier, later);
            less(a, b)
        });

        let mut sorted = self.empty_like();
        *sorted.storage_mut() = items;
        sorted
    }

    /// Positions `0..len` in increasing order.
    fn indices(&self) -> UniqueSequence<usize> {
        UniqueSequence::from_unique_vec((0..self.len()).collect())
    }
}

/// Stable top-down merge sort.
///
/// An item from the right half is taken first only when `moves_ahead(left,
/// right)` holds, so ties keep input order. Each comparison is a single
/// predicate call, which keeps the sort total for any predicate.
pub(crate) fn merge_sort_by<T>(
    mut items: Vec<T>,
    moves_ahead: &mut impl FnMut(&T, &T) -> bool,
) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, &mut *moves_ahead);
    let right = merge_sort_by(right, &mut *moves_ahead);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => moves_ahead(l, r),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Removes every item matching `predicate`.
///
/// The predicate sees items from the back to the front. Matches are
/// recorded first and compacted in a single pass.
///
/// Returns the number of removed items.
pub(crate) fn remove_where<T>(items: &mut Vec<T>, mut predicate: impl FnMut(&T) -> bool) -> usize {
    let mut matched = vec![false; items.len()];
    for index in (0..items.len()).rev() {
        matched[index] = predicate(&items[index]);
    }

    let before = items.len();
    let mut matched = matched.into_iter();
    items.retain(|_| !matched.next().unwrap_or(false));
    before - items.len()
}

// Every container owns a `Vec` named `items` and shares this surface.
duplicate::duplicate! {
    [
        ty;
        [ Sequence ];
        [ UniqueSequence ];
        [ Stack ];
        [ Queue ];
    ]
    impl<T> ty<T> {
        pub fn new() -> Self {
            Self { items: Vec::new() }
        }

        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                items: Vec::with_capacity(capacity),
            }
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }

        pub fn contains(&self, item: &T) -> bool
        where
            T: PartialEq,
        {
            self.items.contains(item)
        }

        pub fn iter(&self) -> std::slice::Iter<'_, T> {
            self.items.iter()
        }

        /// Item at `index`, or `None` past the end.
        pub fn get(&self, index: usize) -> Option<&T> {
            self.items.get(index)
        }

        pub fn first(&self) -> Option<&T> {
            self.items.first()
        }

        pub fn last(&self) -> Option<&T> {
            self.items.last()
        }

        pub fn as_slice(&self) -> &[T] {
            &self.items
        }

        /// Removes all items.
        pub fn empty(&mut self) {
            self.items.clear();
        }

        pub fn into_vec(self) -> Vec<T> {
            self.items
        }
    }

    impl<T> Default for ty<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T> HasLength for ty<T> {
        fn len(&self) -> usize {
            self.len()
        }

        fn is_empty(&self) -> bool {
            self.is_empty()
        }
    }

    impl<T> AsSlice for ty<T> {
        type Item = T;

        fn as_slice(&self) -> &[T] {
            self.as_slice()
        }
    }

    impl<T: PartialEq> Contains<T> for ty<T> {
        fn contains(&self, item: &T) -> bool {
            self.contains(item)
        }
    }

    impl<T> sealed::Storage for ty<T> {
        fn storage_mut(&mut self) -> &mut Vec<T> {
            &mut self.items
        }
    }

    impl<T> Container for ty<T> {
        fn empty_like(&self) -> Self {
            Self::new()
        }
    }

    impl<T> IntoIterator for ty<T> {
        type Item = T;
        type IntoIter = std::vec::IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            self.items.into_iter()
        }
    }

    impl<'a, T> IntoIterator for &'a ty<T> {
        type Item = &'a T;
        type IntoIter = std::slice::Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.items.iter()
        }
    }
}
