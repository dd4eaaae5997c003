//! Property-based tests for `Set`.
//!
//! Verifies the membership laws and checks the algebraic operations
//! against the standard library's `HashSet` as a reference model.

use mapset::Set;
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100i32, 0..60)
}

fn model(items: &[i32]) -> HashSet<i32> {
    items.iter().copied().collect()
}

// =============================================================================
// Insert Law: true exactly once per distinct value
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_returns_true_once(items in arbitrary_items()) {
        let mut set = Set::new();
        let mut seen = HashSet::new();

        for item in &items {
            let newly_inserted = set.insert(*item);
            prop_assert_eq!(newly_inserted, seen.insert(*item));
            prop_assert_eq!(set.len(), seen.len());
        }
    }
}

// =============================================================================
// Remove Law: returns prior presence, membership gone afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_returns_prior_presence(items in arbitrary_items(), needle in -100..100i32) {
        let mut set = Set::from_slices(&[&items]);
        let was_present = set.contains(&needle);

        prop_assert_eq!(set.remove(&needle), was_present);
        prop_assert!(!set.contains(&needle));
    }
}

// =============================================================================
// Round Trip: items() -> from_slices preserves size and membership
// =============================================================================

proptest! {
    #[test]
    fn prop_items_round_trip(items in arbitrary_items()) {
        let set = Set::from_slices(&[&items]);
        let rebuilt = Set::from_slices(&[&set.items()]);

        prop_assert_eq!(rebuilt.len(), set.len());
        prop_assert_eq!(rebuilt, set);
    }
}

// =============================================================================
// Contains-Slice Law: true iff every queried item is a member
// =============================================================================

proptest! {
    #[test]
    fn prop_contains_slice(items in arbitrary_items(), query in arbitrary_items()) {
        let set = Set::from_slices(&[&items]);
        let reference = model(&items);

        let expected = query.iter().all(|item| reference.contains(item));
        prop_assert_eq!(set.contains_slice(&query), expected);
        prop_assert!(set.contains_slice(&[]));
    }
}

// =============================================================================
// Algebra matches the standard HashSet model
// =============================================================================

proptest! {
    #[test]
    fn prop_algebra_matches_model(items_a in arbitrary_items(), items_b in arbitrary_items()) {
        let a = Set::from_slices(&[&items_a]);
        let b = Set::from_slices(&[&items_b]);
        let model_a = model(&items_a);
        let model_b = model(&items_b);

        let union: HashSet<i32> = a.union(&b).into_iter().collect();
        let expected: HashSet<i32> = model_a.union(&model_b).copied().collect();
        prop_assert_eq!(union, expected);

        let intersection: HashSet<i32> = a.intersection(&b).into_iter().collect();
        let expected: HashSet<i32> = model_a.intersection(&model_b).copied().collect();
        prop_assert_eq!(intersection, expected);

        let difference: HashSet<i32> = a.difference(&b).into_iter().collect();
        let expected: HashSet<i32> = model_a.difference(&model_b).copied().collect();
        prop_assert_eq!(difference, expected);

        let symmetric: HashSet<i32> = a.symmetric_difference(&b).into_iter().collect();
        let expected: HashSet<i32> =
            model_a.symmetric_difference(&model_b).copied().collect();
        prop_assert_eq!(symmetric, expected);

        // Operands survive every operation untouched
        prop_assert_eq!(a.len(), model_a.len());
        prop_assert_eq!(b.len(), model_b.len());
    }
}

// =============================================================================
// Relation laws
// =============================================================================

proptest! {
    #[test]
    fn prop_relations_match_model(items_a in arbitrary_items(), items_b in arbitrary_items()) {
        let a = Set::from_slices(&[&items_a]);
        let b = Set::from_slices(&[&items_b]);
        let model_a = model(&items_a);
        let model_b = model(&items_b);

        prop_assert_eq!(a.is_subset(&b), model_a.is_subset(&model_b));
        prop_assert_eq!(a.is_superset(&b), model_a.is_superset(&model_b));
        prop_assert_eq!(a.is_disjoint(&b), model_a.is_disjoint(&model_b));
    }
}
