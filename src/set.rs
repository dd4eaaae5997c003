//! Hash-backed set with in-place mutation and non-destructive algebra.
//!
//! # Overview
//!
//! [`Set`] is a thin wrapper around a `HashMap<T, ()>`: an element is a
//! member exactly when the backing map contains it as a key, so duplicates
//! are impossible by construction. Insertion and removal mutate the set in
//! place; the algebraic operations (union, intersection, difference,
//! symmetric difference) never touch their operands and return a new set,
//! delegating to [`map_algebra`](crate::map_algebra) on the backing maps.
//!
//! Iteration order is undefined and may differ between runs. The set is
//! not internally synchronized; callers requiring concurrent access must
//! provide their own locking.
//!
//! # Examples
//!
//! ```rust
//! use mapset::Set;
//!
//! let mut set = Set::new();
//! assert!(set.insert(5));
//! assert!(set.insert(3));
//! assert!(!set.insert(5)); // already a member
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&3));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use mapset::Set;
//!
//! let a = Set::from_slices(&[&[1, 3, 5, 42]]);
//! let b = Set::from_slices(&[&[2, 3, 6, 42]]);
//!
//! assert_eq!(a.union(&b).len(), 6);
//! assert_eq!(a.intersection(&b).len(), 2);
//! assert_eq!(a.difference(&b).len(), 2);
//! assert_eq!(a.symmetric_difference(&b).len(), 4);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use crate::map_algebra;

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hasher used by [`Set`]'s backing map.
///
/// With the `fxhash` feature enabled, this is `rustc_hash::FxBuildHasher`,
/// a fast non-randomized hasher.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher used by [`Set`]'s backing map.
///
/// With the `ahash` feature enabled (and `fxhash` disabled), this is
/// `ahash::RandomState`.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hasher used by [`Set`]'s backing map.
///
/// Without the `fxhash`/`ahash` features, this is the standard library's
/// `RandomState`.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// Set Definition
// =============================================================================

/// A collection of unique items backed by a hash map.
///
/// # Time Complexity
///
/// | Operation              | Complexity   |
/// |------------------------|--------------|
/// | `new`                  | O(1)         |
/// | `contains`             | O(1)         |
/// | `insert`               | O(1)         |
/// | `remove`               | O(1)         |
/// | `len`                  | O(1)         |
/// | `union`                | O(n + m)     |
/// | `intersection`         | O(n)         |
/// | `difference`           | O(n)         |
/// | `symmetric_difference` | O(n + m)     |
///
/// # Examples
///
/// ```rust
/// use mapset::Set;
///
/// let set = Set::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    items: HashMap<T, (), DefaultHashBuilder>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashMap::default(),
        }
    }

    /// Creates a new empty set with at least the specified capacity
    /// pre-allocated.
    ///
    /// The capacity is a pure performance hint; a set never fails to grow.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of items stored in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items of the set, in no defined order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let set = Set::from_slices(&[&[1, 2, 3]]);
    /// assert_eq!(set.iter().count(), 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.items.keys(),
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set containing a single item.
    #[inline]
    #[must_use]
    pub fn singleton(item: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(item);
        set
    }

    /// Inserts a new item into the set.
    ///
    /// Returns `true` if the item was newly inserted and `false` if it was
    /// already a member (in which case the set is unchanged).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(5));
    /// assert!(!set.insert(5));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item, ()).is_none()
    }

    /// Removes an item from the set.
    ///
    /// Returns `true` if the item was a member before removing.
    ///
    /// The item may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let mut set = Set::singleton("pear".to_string());
    /// assert!(set.remove("pear"));
    /// assert!(!set.remove("kiwi"));
    /// ```
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.remove(item).is_some()
    }

    /// Removes every item in the slice from the set.
    ///
    /// Items that are not members are silently ignored.
    pub fn remove_slice(&mut self, items: &[T]) {
        for item in items {
            self.items.remove(item);
        }
    }

    /// Returns `true` if the item is a member of the set.
    ///
    /// The item may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let set = Set::singleton("apple".to_string());
    /// assert!(set.contains("apple"));
    /// assert!(!set.contains("pear"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains_key(item)
    }

    /// Returns `true` if every item in the slice is a member of the set.
    ///
    /// Short-circuits on the first miss. An empty slice is vacuously
    /// contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let set = Set::from_slices(&[&[1, 2, 3]]);
    /// assert!(set.contains_slice(&[1, 3]));
    /// assert!(!set.contains_slice(&[1, 4]));
    /// assert!(set.contains_slice(&[]));
    /// ```
    #[must_use]
    pub fn contains_slice(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.items.contains_key(item))
    }

    /// Returns `true` if every member of `self` is also a member of
    /// `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns `true` if every member of `other` is also a member of
    /// `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no members in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Probe with the smaller operand
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.iter().all(|item| !larger.contains(item))
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Creates a set containing the unique items from a number of slices.
    ///
    /// Duplicates within and across the input slices collapse to a single
    /// member. The pre-allocated capacity is the sum of the slice lengths,
    /// an over-estimate when duplicates exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let set = Set::from_slices(&[&[5, 9, 3, 42, 3, 42, 5], &[2, 4, 12, 42, 5]]);
    /// assert_eq!(set.len(), 7);
    /// ```
    #[must_use]
    pub fn from_slices(slices: &[&[T]]) -> Self {
        let capacity = slices.iter().map(|slice| slice.len()).sum();
        let mut set = Self::with_capacity(capacity);
        for slice in slices {
            set.insert_slice(slice);
        }
        set
    }

    /// Inserts every item in the slice into the set.
    ///
    /// Duplicates silently collapse.
    pub fn insert_slice(&mut self, items: &[T]) {
        for item in items {
            self.items.insert(item.clone(), ());
        }
    }

    /// Returns the items stored in the set, in no defined order.
    ///
    /// The vector is freshly materialized on each call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let set = Set::from_slices(&[&[3, 5, 9]]);
    /// let mut items = set.items();
    /// items.sort_unstable();
    /// assert_eq!(items, vec![3, 5, 9]);
    /// ```
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.items.keys().cloned().collect()
    }

    /// Returns a new set that is the union of this set and another.
    ///
    /// Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let a = Set::from_slices(&[&[1, 3, 5]]);
    /// let b = Set::from_slices(&[&[2, 4, 6]]);
    /// assert_eq!(a.union(&b).len(), 6);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            items: map_algebra::union(&self.items, &other.items),
        }
    }

    /// Returns a new set containing only the items present in both sets.
    ///
    /// Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let a = Set::from_slices(&[&[1, 3, 5, 42]]);
    /// let b = Set::from_slices(&[&[2, 3, 6, 42]]);
    ///
    /// let common = a.intersection(&b);
    /// assert!(common.contains(&3));
    /// assert!(common.contains(&42));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            items: map_algebra::intersection(&self.items, &other.items),
        }
    }

    /// Returns a new set containing only the items present in this set but
    /// not in `other`.
    ///
    /// Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let a = Set::from_slices(&[&[1, 3, 5, 42]]);
    /// let b = Set::from_slices(&[&[2, 3, 6, 42]]);
    ///
    /// let only_a = a.difference(&b);
    /// assert!(only_a.contains(&1));
    /// assert!(only_a.contains(&5));
    /// assert_eq!(only_a.len(), 2);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            items: map_algebra::difference(&self.items, &other.items),
        }
    }

    /// Returns a new set containing only the items present in one of the
    /// two sets but not in both.
    ///
    /// Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapset::Set;
    ///
    /// let a = Set::from_slices(&[&[1, 3, 5, 42]]);
    /// let b = Set::from_slices(&[&[2, 3, 6, 42]]);
    ///
    /// let exclusive = a.symmetric_difference(&b);
    /// assert_eq!(exclusive.len(), 4);
    /// assert!(exclusive.contains(&1));
    /// assert!(exclusive.contains(&6));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self {
            items: map_algebra::symmetric_difference(&self.items, &other.items),
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A borrowing iterator over the items of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the items of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.items.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iterator = iter.into_iter();
        let (lower_bound, _) = iterator.size_hint();
        let mut set = Self::with_capacity(lower_bound);
        for item in iterator {
            set.items.insert(item, ());
        }
        set
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.items.insert(item, ());
        }
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for item in self.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{item}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
