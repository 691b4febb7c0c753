//! Cross-checks between the partitioning algorithms.
//!
//! These tests treat:
//! - a bitmask enumeration of every split as the **reference** for optimal
//!   differences (it shares no code with the search), and
//! - the recursive and tabulated forms as two oracles that must agree.
//!
//! Duplicate-heavy inputs are generated on purpose so the forced-placement
//! rule of the equal-cardinality search is checked where ties abound.

use partition_core::{
    equal_sum, greedy, min_diff, subset_sum, sum::sum_u32, Method, Partition, PartitionError,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// Minimum `|sum(A) - sum(B)|` over all splits, optionally with `|A| == |B|`.
#[track_caller]
fn reference_min_diff(values: &[u32], equal_sizes: bool) -> Option<u64> {
    let n = values.len();
    let total = sum_u32(values);
    (0u32..1 << n)
        .filter(|mask| !equal_sizes || mask.count_ones() as usize * 2 == n)
        .map(|mask| {
            let picked: u64 = values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &v)| u64::from(v))
                .sum();
            picked.abs_diff(total - picked)
        })
        .min()
}

#[track_caller]
fn assert_equal_sum_split(values: &[u32], p: &Partition<u32>) {
    assert!(p.is_repartition_of(values), "{p:?} does not re-partition {values:?}");
    assert_eq!(p.first_sum(), p.second_sum(), "{p:?} has unequal sums");
}

/// Small values; the second strategy draws from a tiny alphabet to force duplicates.
fn arb_values() -> impl Strategy<Value = Vec<u32>> {
    prop_oneof![
        prop::collection::vec(0u32..60, 0..=10),
        prop::collection::vec(prop::sample::select(vec![1u32, 2, 2, 3, 5]), 0..=10),
    ]
}

fn arb_even_values() -> impl Strategy<Value = Vec<u32>> {
    arb_values().prop_map(|mut v| {
        if v.len() % 2 == 1 {
            v.pop();
        }
        v
    })
}

#[test]
fn documented_scenarios() {
    let p = equal_sum::find_sets_recursive(&[1, 5, 11, 5]).unwrap();
    assert_equal_sum_split(&[1, 5, 11, 5], &p);
    assert_eq!(p.first_sum(), 11);

    assert!(!subset_sum::can_partition_recursive(&[1, 2, 3, 5]));
    assert_eq!(min_diff::min_difference(&[1u32, 2, 3, 5]).diff, 1);

    let r = min_diff::min_difference_equal_cardinality(&[3u32, 1, 4, 2]).unwrap();
    assert_eq!(r.diff, 0);
    assert!(r.partition.is_balanced_in_size());

    assert_eq!(
        min_diff::min_difference_equal_cardinality(&[1u32, 2, 3]).unwrap_err(),
        PartitionError::OddCardinality { len: 3 }
    );
}

/// Exact split exists ⇒ the greedy split stays within 7/6 of the average.
#[test]
fn greedy_ratio_on_seeded_arrays() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut checked = 0;
    for _ in 0..400 {
        let values: Vec<u32> = (0..12).map(|_| rng.random_range(0..100)).collect();
        if !subset_sum::can_partition_dp(&values).unwrap() {
            continue;
        }
        checked += 1;
        let p = greedy::balance(&values);
        assert!(p.is_repartition_of(&values));
        assert!(
            p.imbalance_ratio() <= greedy::LPT_RATIO_BOUND + 1e-12,
            "greedy split {p:?} of {values:?} exceeds 7/6"
        );
    }
    assert!(checked > 0, "no partitionable arrays generated");
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    #[test]
    fn oracles_agree_around_half_total(values in arb_values(), extra in 0u64..4) {
        let target = sum_u32(&values) / 2 + extra;
        prop_assert_eq!(
            subset_sum::is_subset_sum_recursive(&values, target),
            subset_sum::is_subset_sum_dp(&values, target).unwrap()
        );
        prop_assert_eq!(
            subset_sum::can_partition_recursive(&values),
            subset_sum::can_partition_dp(&values).unwrap()
        );
    }

    #[test]
    fn targets_beyond_the_total_are_unreachable(values in arb_values(), excess in 1u64..(1 << 48)) {
        let target = sum_u32(&values) + excess;
        prop_assert!(!subset_sum::is_subset_sum_recursive(&values, target));
        prop_assert_eq!(subset_sum::is_subset_sum_dp(&values, target), Ok(false));
    }

    #[test]
    fn equal_sum_constructions_match_feasibility(values in arb_values()) {
        let feasible = subset_sum::can_partition(&values, Method::Dynamic).unwrap();
        for method in [Method::Recursive, Method::Dynamic] {
            let found = equal_sum::find_sets(&values, method).unwrap();
            prop_assert_eq!(found.is_some(), feasible);
            if let Some(p) = found {
                assert_equal_sum_split(&values, &p);
            }
        }
    }

    #[test]
    fn min_difference_matches_reference(values in arb_values()) {
        let r = min_diff::min_difference(&values);
        prop_assert!(r.partition.is_repartition_of(&values));
        prop_assert_eq!(r.diff, r.partition.difference());
        prop_assert_eq!(Some(r.diff), reference_min_diff(&values, false));
        // Zero difference exactly when an equal-sum split exists.
        prop_assert_eq!(r.diff == 0, subset_sum::can_partition_recursive(&values));
    }

    #[test]
    fn equal_cardinality_matches_reference(values in arb_even_values()) {
        let r = min_diff::min_difference_equal_cardinality(&values).unwrap();
        prop_assert!(r.partition.is_balanced_in_size());
        prop_assert!(r.partition.is_repartition_of(&values));
        prop_assert_eq!(r.diff, r.partition.difference());
        prop_assert_eq!(Some(r.diff), reference_min_diff(&values, true));
    }

    #[test]
    fn odd_lengths_never_yield_a_split(mut values in arb_values()) {
        if values.len() % 2 == 0 {
            values.push(1);
        }
        let err = min_diff::min_difference_equal_cardinality(&values).unwrap_err();
        prop_assert_eq!(err, PartitionError::OddCardinality { len: values.len() });
    }

    #[test]
    fn real_search_is_a_size_balanced_repartition(
        values in prop::collection::vec(0.0f64..1.0, 0..=5).prop_map(|mut v| {
            v.extend_from_within(..);
            v
        })
    ) {
        let r = min_diff::min_difference_equal_cardinality_f64(&values).unwrap();
        prop_assert!(r.partition.is_balanced_in_size());
        prop_assert!(r.partition.is_repartition_of(&values));
        prop_assert!((r.partition.difference() - r.diff).abs() < 1e-9);
        // Doubling every element always admits a perfectly mirrored split.
        prop_assert!(r.diff < 1e-9);
    }

    #[test]
    fn every_algorithm_is_deterministic(values in arb_values()) {
        prop_assert_eq!(greedy::balance(&values), greedy::balance(&values));
        prop_assert_eq!(
            equal_sum::find_sets_recursive(&values),
            equal_sum::find_sets_recursive(&values)
        );
        prop_assert_eq!(
            equal_sum::find_sets_dp(&values).unwrap(),
            equal_sum::find_sets_dp(&values).unwrap()
        );
        prop_assert_eq!(min_diff::min_difference(&values), min_diff::min_difference(&values));
    }

    #[test]
    fn greedy_is_a_repartition(values in arb_values()) {
        let p = greedy::balance(&values);
        prop_assert!(p.is_repartition_of(&values));
        // Never better than the optimum.
        prop_assert!(p.difference() >= min_diff::min_difference(&values).diff);
    }
}
