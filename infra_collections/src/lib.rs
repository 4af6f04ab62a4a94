//! Ordered containers with precise multiplicity, ordering and equality rules.
//!
//! [`Sequence`] is a plain ordered collection, [`UniqueSequence`] adds a
//! no-duplicates invariant and set algebra, [`Stack`] and [`Queue`] are
//! ordering views, and [`range`] builds integer sequences. All of them share
//! the [`Container`] contract. [`OrderedMap`] exposes its keys as a
//! [`UniqueSequence`] and its values as a [`Sequence`].

pub mod container;
pub mod error;
pub mod map;
pub mod queue;
pub mod range;
pub mod sequence;
pub mod stack;
pub mod unique;

pub use container::{Container, Order};
pub use error::Error;
pub use map::OrderedMap;
pub use queue::Queue;
pub use range::{range, RangeMode};
pub use sequence::Sequence;
pub use stack::Stack;
pub use unique::UniqueSequence;

pub use collection_traits::{AsSlice, Contains, HasLength};
