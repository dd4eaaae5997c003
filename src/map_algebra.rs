//! Map algebra: set-theoretic operations over hash maps.
//!
//! # Overview
//!
//! Free functions that combine two maps into a freshly allocated third:
//!
//! - [`union`]: keys from either map; on collision the left value is kept
//! - [`intersection`]: keys present in both maps, left values
//! - [`pair_intersection`]: keys present in both maps with equal values
//! - [`difference`]: keys present only in the left map
//! - [`symmetric_difference`]: keys present in exactly one map
//!
//! No function mutates its inputs, and none can fail. All run in
//! O(|a| + |b|) worst case using key-presence lookups only; nothing at this
//! layer sorts. The functions are generic over the map's hasher, so they
//! apply equally to maps built with the standard `RandomState` or with the
//! hashers behind the `fxhash`/`ahash` feature flags.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use mapset::map_algebra;
//!
//! let a = HashMap::from([("a", 1), ("b", 2)]);
//! let b = HashMap::from([("b", 20), ("c", 3)]);
//!
//! let union = map_algebra::union(&a, &b);
//! assert_eq!(union.len(), 3);
//! assert_eq!(union.get("b"), Some(&2)); // left value wins
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a new map that is the union of `a` and `b`.
///
/// The result contains every key present in either map. When a key exists
/// in both, the value from `a` is kept. The result is pre-sized to
/// `a.len() + b.len()`, an over-estimate when keys collide.
///
/// # Complexity
///
/// O(|a| + |b|)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::map_algebra::union;
///
/// let a = HashMap::from([("a", 1), ("b", 2)]);
/// let b = HashMap::from([("a", 10), ("c", 3)]);
///
/// let combined = union(&a, &b);
/// assert_eq!(combined.get("a"), Some(&1));
/// assert_eq!(combined.get("b"), Some(&2));
/// assert_eq!(combined.get("c"), Some(&3));
/// ```
#[must_use]
pub fn union<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut result = HashMap::with_capacity_and_hasher(a.len() + b.len(), S::default());

    for (key, value) in a {
        result.insert(key.clone(), value.clone());
    }

    for (key, value) in b {
        if !result.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Returns a new map containing only the keys present in both `a` and `b`.
///
/// Values are taken from `a`.
///
/// # Complexity
///
/// O(|a|)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::map_algebra::intersection;
///
/// let a = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// let b = HashMap::from([("a", 10), ("c", 30), ("e", 5)]);
///
/// let common = intersection(&a, &b);
/// assert_eq!(common, HashMap::from([("a", 1), ("c", 3)]));
/// ```
#[must_use]
pub fn intersection<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut result = HashMap::with_hasher(S::default());

    for (key, value) in a {
        if b.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Returns a new map containing only the key-value pairs present in both
/// `a` and `b`.
///
/// A key qualifies only when both maps hold it with equal values. The value
/// is taken from `a` (the values being equal, the source is immaterial).
///
/// # Complexity
///
/// O(|a|)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::map_algebra::pair_intersection;
///
/// let a = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// let b = HashMap::from([("a", 10), ("b", 2), ("c", 3)]);
///
/// let matching = pair_intersection(&a, &b);
/// assert_eq!(matching, HashMap::from([("b", 2), ("c", 3)]));
/// ```
#[must_use]
pub fn pair_intersection<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
    S: BuildHasher + Default,
{
    let mut result = HashMap::with_hasher(S::default());

    for (key, value) in a {
        if b.get(key).is_some_and(|other| other == value) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Returns a new map containing only the entries present in `a` but not in
/// `b`.
///
/// The operation is asymmetric: `difference(a, b)` and `difference(b, a)`
/// differ in general.
///
/// # Complexity
///
/// O(|a|)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::map_algebra::difference;
///
/// let a = HashMap::from([("a", 1), ("b", 2), ("d", 4)]);
/// let b = HashMap::from([("a", 10), ("e", 5)]);
///
/// assert_eq!(difference(&a, &b), HashMap::from([("b", 2), ("d", 4)]));
/// assert_eq!(difference(&b, &a), HashMap::from([("e", 5)]));
/// ```
#[must_use]
pub fn difference<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut result = HashMap::with_hasher(S::default());

    for (key, value) in a {
        if !b.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Returns a new map containing only the entries present in one of the two
/// maps but not in both.
///
/// Equivalent to the union of `difference(a, b)` and `difference(b, a)`,
/// and commutative as a key set.
///
/// # Complexity
///
/// O(|a| + |b|)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use mapset::map_algebra::symmetric_difference;
///
/// let a = HashMap::from([("a", 1), ("b", 2)]);
/// let b = HashMap::from([("a", 10), ("e", 5)]);
///
/// let exclusive = symmetric_difference(&a, &b);
/// assert_eq!(exclusive, HashMap::from([("b", 2), ("e", 5)]));
/// ```
#[must_use]
pub fn symmetric_difference<K, V, S>(
    a: &HashMap<K, V, S>,
    b: &HashMap<K, V, S>,
) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut result = HashMap::with_hasher(S::default());

    for (key, value) in a {
        if !b.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    for (key, value) in b {
        if !a.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

// =============================================================================
// Tests
// =============================================================================
