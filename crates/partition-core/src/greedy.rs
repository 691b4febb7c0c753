// crates/partition-core/src/greedy.rs

//! Longest-processing-time greedy balancer.
//!
//! Elements are taken largest first and each goes to whichever side
//! currently has the smaller sum (ties go to A). No backtracking, so the
//! result is produced in `O(n log n)` but is only approximately balanced:
//! when an exactly balanced split exists, `max(sum) / average(sum) ≤ 7/6`.

use crate::sum::Magnitude;
use crate::types::Partition;

/// Worst-case `max(sum) / average(sum)` of [`balance`] on inputs that admit
/// an exactly equal split.
pub const LPT_RATIO_BOUND: f64 = 7.0 / 6.0;

/// Greedy two-way split; always returns a partition.
#[must_use]
pub fn balance<T: Magnitude>(values: &[T]) -> Partition<T> {
    let mut sorted = values.to_vec();
    // Stable sort keeps equal elements in input order, so the output is fixed.
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut first = Vec::with_capacity(sorted.len() / 2 + 1);
    let mut second = Vec::with_capacity(sorted.len() / 2 + 1);
    let mut sum_first = T::Sum::default();
    let mut sum_second = T::Sum::default();

    for v in sorted {
        if sum_first <= sum_second {
            sum_first = sum_first + v.widen();
            first.push(v);
        } else {
            sum_second = sum_second + v.widen();
            second.push(v);
        }
    }

    Partition::new(first, second)
}
