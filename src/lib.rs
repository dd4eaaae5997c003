//! # mapset
//!
//! A generic set and map algebra library for Rust.
//!
//! ## Overview
//!
//! This library provides a small toolkit of collection algebra built on top
//! of the standard `HashMap`:
//!
//! - **Map algebra**: [`union`](map_algebra::union),
//!   [`intersection`](map_algebra::intersection),
//!   [`pair_intersection`](map_algebra::pair_intersection),
//!   [`difference`](map_algebra::difference) and
//!   [`symmetric_difference`](map_algebra::symmetric_difference) as pure
//!   functions combining two maps into a freshly allocated third.
//! - **Sorted projections**: deterministic [`KeyValue`] sequences of a
//!   map's entries, ordered by value or by key, with either a
//!   [`SortOrder`] flag or a caller-supplied predicate.
//! - **[`Set`]**: a hash-map-backed set with in-place mutation and
//!   non-destructive algebraic operations.
//! - **Slice helpers**: checked and unchecked index-based removal for
//!   vectors.
//!
//! ## Feature Flags
//!
//! - `fxhash`: back sets with `rustc-hash`'s `FxBuildHasher`
//! - `ahash`: back sets with `ahash`'s `RandomState`
//!
//! With neither enabled, the standard `RandomState` is used.
//!
//! ## Example
//!
//! ```rust
//! use mapset::Set;
//!
//! let a = Set::from_slices(&[&[1, 3, 5, 42]]);
//! let b = Set::from_slices(&[&[2, 3, 6, 42]]);
//!
//! let common = a.intersection(&b);
//! assert_eq!(common.len(), 2);
//! assert!(common.contains(&3));
//! assert!(common.contains(&42));
//!
//! // Operands are never mutated
//! assert_eq!(a.len(), 4);
//! assert_eq!(b.len(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod key_value;
pub mod map_algebra;
pub mod order;
pub mod pair;
pub mod projection;
pub mod set;
pub mod slice;

pub use key_value::KeyValue;
pub use order::SortOrder;
pub use pair::Pair;
pub use set::DefaultHashBuilder;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;
pub use slice::IndexOutOfBounds;

/// Prelude module for convenient imports.
///
/// Re-exports the public types, the projection and slice functions, and the
/// [`map_algebra`] module itself (its function names are too generic to
/// import bare).
///
/// # Usage
///
/// ```rust
/// use mapset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::key_value::{KeyValue, just_keys, just_values};
    pub use crate::map_algebra;
    pub use crate::order::SortOrder;
    pub use crate::pair::Pair;
    pub use crate::projection::{
        sorted_by_keys, sorted_by_keys_by, sorted_by_value, sorted_by_value_by,
    };
    pub use crate::set::{DefaultHashBuilder, Set};
    pub use crate::slice::{
        IndexOutOfBounds, remove_at, swap_remove_at, try_remove_at, try_swap_remove_at,
    };
}
