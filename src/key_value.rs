//! Key-value pair record produced by the sorted projections.

/// A mapping key paired with its value.
///
/// This is the element type returned by the functions in
/// [`projection`](crate::projection). Equality is structural; a `KeyValue`
/// has no identity beyond its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyValue<K, V> {
    /// The mapping key.
    pub key: K,
    /// The value mapped to `key`.
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a pair from a key and its value.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Returns just the keys from a slice of pairs, in input order.
///
/// # Examples
///
/// ```rust
/// use mapset::key_value::{KeyValue, just_keys};
///
/// let pairs = [KeyValue::new("a", 1), KeyValue::new("b", 2)];
/// assert_eq!(just_keys(&pairs), vec!["a", "b"]);
/// ```
#[must_use]
pub fn just_keys<K: Clone, V>(pairs: &[KeyValue<K, V>]) -> Vec<K> {
    pairs.iter().map(|pair| pair.key.clone()).collect()
}

/// Returns just the values from a slice of pairs, in input order.
///
/// # Examples
///
/// ```rust
/// use mapset::key_value::{KeyValue, just_values};
///
/// let pairs = [KeyValue::new("a", 1), KeyValue::new("b", 2)];
/// assert_eq!(just_values(&pairs), vec![1, 2]);
/// ```
#[must_use]
pub fn just_values<K, V: Clone>(pairs: &[KeyValue<K, V>]) -> Vec<V> {
    pairs.iter().map(|pair| pair.value.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_just_values() {
        let pairs = [
            KeyValue::new("a", 1),
            KeyValue::new("b", 2),
            KeyValue::new("c", 3),
        ];
        assert_eq!(just_values(&pairs), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_just_keys() {
        let pairs = [
            KeyValue::new("a", 1),
            KeyValue::new("b", 2),
            KeyValue::new("c", 3),
        ];
        assert_eq!(just_keys(&pairs), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_empty_input() {
        let pairs: [KeyValue<&str, i32>; 0] = [];
        assert!(just_keys(&pairs).is_empty());
        assert!(just_values(&pairs).is_empty());
    }

    #[rstest]
    fn test_from_tuple() {
        let pair: KeyValue<&str, i32> = ("answer", 42).into();
        assert_eq!(pair, KeyValue::new("answer", 42));
    }
}
