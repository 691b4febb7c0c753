// crates/partition-trials/src/runner.rs

//! Run a [`TrialProfile`] and aggregate a [`TrialReport`].
//!
//! Each call's result is checked against the partition invariants:
//! - every returned split re-partitions its input exactly,
//! - equal-sum splits have equal sums,
//! - reported differences equal `|sum(A) - sum(B)|`,
//! - equal-cardinality splits have equal sizes,
//! - greedy splits of exactly partitionable arrays stay within 7/6.
//!
//! A failed check is logged and counted in `violations`; it does not abort
//! the run. Errors from the core (an unallocatable table) do.

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use partition_core::{
    equal_sum, greedy, min_diff, subset_sum, Magnitude, MinDiffPartition, Partition,
};

use crate::generator::{int_arrays, real_arrays};
use crate::profile::{Algorithm, TrialProfile};

/// Tolerance for comparing a reported real difference with its recomputation.
const REAL_DIFF_TOLERANCE: f64 = 1e-9;

/// Aggregate outcome of one algorithm over all arrays.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AlgorithmReport {
    /// Algorithm name.
    pub algorithm: String,
    /// Arrays the algorithm was run on.
    pub arrays: usize,
    /// Feasible / found / exact outcomes.
    pub positive: usize,
    /// The remaining outcomes.
    pub negative: usize,
    /// Count of arrays per integer minimum difference.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub diff_histogram: BTreeMap<u64, usize>,
    /// Smallest real minimum difference seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_real_diff: Option<f64>,
    /// Largest real minimum difference seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_real_diff: Option<f64>,
    /// Worst greedy `max(sum) / average(sum)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_imbalance_ratio: Option<f64>,
    /// Invariant checks that failed.
    pub violations: usize,
    /// Wall time spent in the algorithm and its checks.
    pub elapsed_ms: f64,
}

impl AlgorithmReport {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            ..Self::default()
        }
    }

    fn outcome(&mut self, positive: bool) {
        self.arrays += 1;
        if positive {
            self.positive += 1;
        } else {
            self.negative += 1;
        }
    }

    fn check(&mut self, ok: bool, what: &str, input: &dyn std::fmt::Debug) {
        if !ok {
            self.violations += 1;
            warn!(algorithm = %self.algorithm, ?input, "invariant violated: {what}");
        }
    }

    fn real_diff(&mut self, diff: f64) {
        self.min_real_diff = Some(self.min_real_diff.map_or(diff, |m| m.min(diff)));
        self.max_real_diff = Some(self.max_real_diff.map_or(diff, |m| m.max(diff)));
    }
}

/// Full outcome of a trial run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialReport {
    /// The profile that produced this report.
    pub profile: TrialProfile,
    /// One entry per algorithm, in profile order.
    pub results: Vec<AlgorithmReport>,
}

impl TrialReport {
    /// Total failed checks across all algorithms.
    #[must_use]
    pub fn violations(&self) -> usize {
        self.results.iter().map(|r| r.violations).sum()
    }
}

/// Run every algorithm of `profile` over its generated arrays.
///
/// # Errors
/// An invalid profile, or a core error such as an unallocatable table.
pub fn run(profile: &TrialProfile) -> Result<TrialReport> {
    profile.validate()?;
    let ints = int_arrays(profile.arrays, profile.size, profile.max_value, profile.seed);
    debug!(
        arrays = profile.arrays,
        size = profile.size,
        seed = profile.seed,
        "generated integer arrays"
    );

    let mut results = Vec::with_capacity(profile.algorithms.len());
    for &alg in &profile.algorithms {
        let t0 = Instant::now();
        let mut report = AlgorithmReport::new(alg);
        match alg {
            Algorithm::FeasibleRecursive => {
                for a in &ints {
                    report.outcome(subset_sum::can_partition_recursive(a));
                }
            }
            Algorithm::FeasibleDynamic => {
                for a in &ints {
                    report.outcome(subset_sum::can_partition_dp(a)?);
                }
            }
            Algorithm::SetsRecursive => {
                for a in &ints {
                    record_equal_sum(&mut report, a, equal_sum::find_sets_recursive(a).as_ref());
                }
            }
            Algorithm::SetsDynamic => {
                for a in &ints {
                    let found = equal_sum::find_sets_dp(a)?;
                    record_equal_sum(&mut report, a, found.as_ref());
                }
            }
            Algorithm::Greedy => run_greedy(&mut report, &ints)?,
            Algorithm::MinDiff => {
                for a in &ints {
                    let r = min_diff::min_difference(a);
                    record_int_min_diff(&mut report, a, &r, false);
                }
            }
            Algorithm::MinDiffEqual => {
                for a in &ints {
                    let r = min_diff::min_difference_equal_cardinality(a)
                        .with_context(|| format!("{alg} on {a:?}"))?;
                    record_int_min_diff(&mut report, a, &r, true);
                }
            }
            Algorithm::MinDiffEqualReal => {
                let reals = real_arrays(profile.arrays, profile.size, profile.seed);
                for a in &reals {
                    let r = min_diff::min_difference_equal_cardinality_f64(a)
                        .with_context(|| format!("{alg} on {a:?}"))?;
                    record_real_min_diff(&mut report, a, &r);
                }
            }
        }
        report.elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
        info!(
            algorithm = %alg,
            arrays = report.arrays,
            positive = report.positive,
            negative = report.negative,
            violations = report.violations,
            elapsed_ms = report.elapsed_ms,
            "algorithm finished"
        );
        results.push(report);
    }

    Ok(TrialReport {
        profile: profile.clone(),
        results,
    })
}

fn record_equal_sum(report: &mut AlgorithmReport, input: &[u32], found: Option<&Partition<u32>>) {
    report.outcome(found.is_some());
    if let Some(p) = found {
        report.check(p.is_repartition_of(input), "not a re-partition", &input);
        report.check(p.first_sum() == p.second_sum(), "unequal sums", &input);
    }
}

/// Greedy is only scored on arrays that admit an exact split.
fn run_greedy(report: &mut AlgorithmReport, arrays: &[Vec<u32>]) -> Result<()> {
    let mut worst = 1.0f64;
    for a in arrays {
        if !subset_sum::can_partition_dp(a)? {
            continue;
        }
        let p = greedy::balance(a);
        report.outcome(p.difference() == 0);
        report.check(p.is_repartition_of(a), "not a re-partition", a);
        let ratio = p.imbalance_ratio();
        report.check(
            ratio <= greedy::LPT_RATIO_BOUND + REAL_DIFF_TOLERANCE,
            "imbalance ratio above 7/6",
            a,
        );
        worst = worst.max(ratio);
    }
    report.max_imbalance_ratio = Some(worst);
    Ok(())
}

fn record_common<T: Magnitude>(
    report: &mut AlgorithmReport,
    input: &[T],
    r: &MinDiffPartition<T>,
    equal_sizes: bool,
) {
    report.check(r.partition.is_repartition_of(input), "not a re-partition", &input);
    if equal_sizes {
        report.check(r.partition.is_balanced_in_size(), "unequal sizes", &input);
    }
}

fn record_int_min_diff(
    report: &mut AlgorithmReport,
    input: &[u32],
    r: &MinDiffPartition<u32>,
    equal_sizes: bool,
) {
    report.outcome(r.diff == 0);
    record_common(report, input, r, equal_sizes);
    report.check(r.partition.difference() == r.diff, "diff mismatch", &input);
    *report.diff_histogram.entry(r.diff).or_default() += 1;
}

fn record_real_min_diff(report: &mut AlgorithmReport, input: &[f64], r: &MinDiffPartition<f64>) {
    report.outcome(r.diff <= 0.0);
    record_common(report, input, r, true);
    report.check(
        (r.partition.difference() - r.diff).abs() < REAL_DIFF_TOLERANCE,
        "diff mismatch",
        &input,
    );
    report.real_diff(r.diff);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(algorithms: Vec<Algorithm>) -> TrialProfile {
        TrialProfile {
            arrays: 40,
            size: 8,
            algorithms,
            ..TrialProfile::default()
        }
    }

    #[test]
    fn all_algorithms_pass_their_checks() {
        let report = run(&small(Algorithm::ALL.to_vec())).unwrap();
        assert_eq!(report.results.len(), Algorithm::ALL.len());
        assert_eq!(report.violations(), 0, "{report:#?}");
        for r in &report.results {
            assert_eq!(r.positive + r.negative, r.arrays, "{}", r.algorithm);
        }
    }

    #[test]
    fn feasibility_and_construction_agree() {
        let report = run(&small(vec![
            Algorithm::FeasibleRecursive,
            Algorithm::FeasibleDynamic,
            Algorithm::SetsRecursive,
            Algorithm::SetsDynamic,
            Algorithm::MinDiff,
        ]))
        .unwrap();
        let positives: Vec<usize> = report.results.iter().map(|r| r.positive).collect();
        assert!(positives.windows(2).all(|w| w[0] == w[1]), "{positives:?}");
        assert!(report.results.iter().all(|r| r.arrays == 40));

        let hist = &report.results[4].diff_histogram;
        assert_eq!(hist.values().sum::<usize>(), 40);
        assert_eq!(hist.get(&0).copied().unwrap_or(0), positives[0]);
    }

    #[test]
    fn greedy_is_scored_on_partitionable_arrays_only() {
        let report = run(&small(vec![Algorithm::FeasibleDynamic, Algorithm::Greedy])).unwrap();
        let feasible = &report.results[0];
        let greedy = &report.results[1];
        assert_eq!(greedy.arrays, feasible.positive);
        let worst = greedy.max_imbalance_ratio.unwrap();
        assert!(worst <= greedy::LPT_RATIO_BOUND + REAL_DIFF_TOLERANCE);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = run(&small(vec![Algorithm::MinDiffEqualReal])).unwrap();
        let r = &report.results[0];
        assert!(r.min_real_diff.unwrap() <= r.max_real_diff.unwrap());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["algorithm"], "min-diff-equal-real");
        assert_eq!(json["profile"]["algorithms"][0], "min-diff-equal-real");
        assert!(json["results"][0].get("diff_histogram").is_none());
    }

    #[test]
    fn same_profile_same_outcomes() {
        let p = small(vec![Algorithm::MinDiffEqual, Algorithm::SetsRecursive]);
        let a = run(&p).unwrap();
        let b = run(&p).unwrap();
        for (x, y) in a.results.iter().zip(&b.results) {
            assert_eq!(x.positive, y.positive);
            assert_eq!(x.diff_histogram, y.diff_histogram);
        }
    }

    #[test]
    fn odd_size_is_rejected_before_running() {
        let mut p = small(vec![Algorithm::MinDiffEqual]);
        p.size = 7;
        assert!(run(&p).is_err());
    }
}
