//! Sorted key-value projections of a map.
//!
//! # Overview
//!
//! Each function in this module converts a map into a concrete, finite
//! `Vec<KeyValue>` ordered by value or by key. The built-in variants take a
//! [`SortOrder`] flag; the `_by` variants take a caller-supplied `less`
//! predicate instead, with the direction encoded in the predicate.
//!
//! The sort is **unstable**: entries whose compared field is equal may end
//! up in any relative order. An empty map always yields an empty vector.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use mapset::projection::sorted_by_value;
//! use mapset::{KeyValue, SortOrder};
//!
//! let scores = HashMap::from([("b", 2), ("a", 1), ("c", 3)]);
//!
//! let ranked = sorted_by_value(&scores, SortOrder::Ascending);
//! assert_eq!(
//!     ranked,
//!     vec![
//!         KeyValue::new("a", 1),
//!         KeyValue::new("b", 2),
//!         KeyValue::new("c", 3),
//!     ]
//! );
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::key_value::KeyValue;
use crate::order::SortOrder;

/// Copies a map's entries into an unsorted pair vector.
fn collect_pairs<K, V, S>(map: &HashMap<K, V, S>) -> Vec<KeyValue<K, V>>
where
    K: Clone,
    V: Clone,
    S: BuildHasher,
{
    map.iter()
        .map(|(key, value)| KeyValue {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Derives a total ordering from a strict `less` predicate.
fn ordering_by_less<T, F>(less: &mut F, lhs: &T, rhs: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if less(lhs, rhs) {
        Ordering::Less
    } else if less(rhs, lhs) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns the map's entries as pairs sorted by value.
///
/// `Ascending` produces non-decreasing values, `Descending` non-increasing.
/// The sort is unstable: the relative order of pairs with equal values is
/// unspecified.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::projection::sorted_by_value;
/// use mapset::{KeyValue, SortOrder};
///
/// let map = HashMap::from([("b", 2), ("a", 1)]);
///
/// let descending = sorted_by_value(&map, SortOrder::Descending);
/// assert_eq!(
///     descending,
///     vec![KeyValue::new("b", 2), KeyValue::new("a", 1)]
/// );
/// ```
#[must_use]
pub fn sorted_by_value<K, V, S>(map: &HashMap<K, V, S>, order: SortOrder) -> Vec<KeyValue<K, V>>
where
    K: Clone,
    V: Clone + Ord,
    S: BuildHasher,
{
    let mut pairs = collect_pairs(map);
    match order {
        SortOrder::Ascending => pairs.sort_unstable_by(|lhs, rhs| lhs.value.cmp(&rhs.value)),
        SortOrder::Descending => pairs.sort_unstable_by(|lhs, rhs| rhs.value.cmp(&lhs.value)),
    }
    pairs
}

/// Returns the map's entries as pairs sorted by value using the `less`
/// predicate provided.
///
/// `less(lhs, rhs)` must return `true` exactly when `lhs` should sort
/// before `rhs`; the caller encodes the direction in the predicate. The
/// sort is unstable.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::projection::sorted_by_value_by;
/// use mapset::KeyValue;
///
/// let map = HashMap::from([("a", 1), ("b", 2)]);
///
/// let descending = sorted_by_value_by(&map, |lhs, rhs| lhs > rhs);
/// assert_eq!(
///     descending,
///     vec![KeyValue::new("b", 2), KeyValue::new("a", 1)]
/// );
/// ```
#[must_use]
pub fn sorted_by_value_by<K, V, S, F>(map: &HashMap<K, V, S>, mut less: F) -> Vec<KeyValue<K, V>>
where
    K: Clone,
    V: Clone,
    S: BuildHasher,
    F: FnMut(&V, &V) -> bool,
{
    let mut pairs = collect_pairs(map);
    pairs.sort_unstable_by(|lhs, rhs| ordering_by_less(&mut less, &lhs.value, &rhs.value));
    pairs
}

/// Returns the map's entries as pairs sorted by key.
///
/// `Ascending` produces non-decreasing keys, `Descending` non-increasing.
/// Map keys are unique, so the result order is fully determined.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::projection::sorted_by_keys;
/// use mapset::{KeyValue, SortOrder};
///
/// let map = HashMap::from([("b", 2), ("a", 12)]);
///
/// let ascending = sorted_by_keys(&map, SortOrder::Ascending);
/// assert_eq!(
///     ascending,
///     vec![KeyValue::new("a", 12), KeyValue::new("b", 2)]
/// );
/// ```
#[must_use]
pub fn sorted_by_keys<K, V, S>(map: &HashMap<K, V, S>, order: SortOrder) -> Vec<KeyValue<K, V>>
where
    K: Clone + Ord,
    V: Clone,
    S: BuildHasher,
{
    let mut pairs = collect_pairs(map);
    match order {
        SortOrder::Ascending => pairs.sort_unstable_by(|lhs, rhs| lhs.key.cmp(&rhs.key)),
        SortOrder::Descending => pairs.sort_unstable_by(|lhs, rhs| rhs.key.cmp(&lhs.key)),
    }
    pairs
}

/// Returns the map's entries as pairs sorted by key using the `less`
/// predicate provided.
///
/// `less(lhs, rhs)` must return `true` exactly when `lhs` should sort
/// before `rhs`; the caller encodes the direction in the predicate.
///
/// # Complexity
///
/// O(n log n)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::projection::sorted_by_keys_by;
/// use mapset::KeyValue;
///
/// let map = HashMap::from([("a", 1), ("b", 2)]);
///
/// let descending = sorted_by_keys_by(&map, |lhs, rhs| lhs > rhs);
/// assert_eq!(
///     descending,
///     vec![KeyValue::new("b", 2), KeyValue::new("a", 1)]
/// );
/// ```
#[must_use]
pub fn sorted_by_keys_by<K, V, S, F>(map: &HashMap<K, V, S>, mut less: F) -> Vec<KeyValue<K, V>>
where
    K: Clone,
    V: Clone,
    S: BuildHasher,
    F: FnMut(&K, &K) -> bool,
{
    let mut pairs = collect_pairs(map);
    pairs.sort_unstable_by(|lhs, rhs| ordering_by_less(&mut less, &lhs.key, &rhs.key));
    pairs
}

// =============================================================================
// Tests
// =============================================================================
