//! Sort direction for the built-in sorted projections.

/// Direction in which a sorted projection orders its result.
///
/// Consumed by [`sorted_by_value`](crate::projection::sorted_by_value) and
/// [`sorted_by_keys`](crate::projection::sorted_by_keys). The predicate
/// variants take no direction flag; callers encode the direction in the
/// predicate instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Sort from the smallest to the biggest element.
    Ascending,
    /// Sort from the biggest to the smallest element.
    Descending,
}
