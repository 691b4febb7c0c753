// crates/partition-core/src/equal_sum.rs

//! Construction of exactly-equal-sum splits.
//!
//! - [`find_sets_recursive`] walks the binary placement tree depth first,
//!   placing each element in A before trying B, and returns the first leaf
//!   whose sides have equal sums.
//! - [`find_sets_dp`] builds the [`SubsetSumTable`] for half the total and
//!   walks it backwards from the final cell to recover one subset.
//!
//! Both return `None` straight away when the total is odd.

use crate::error::PartitionError;
use crate::subset_sum::{half_of_even_total, Method, SubsetSumTable};
use crate::types::Partition;

/// Backtracking search for an equal-sum split.
///
/// Returns the first equal-sum partition in A-before-B placement order, or
/// `None` if there is none.
#[must_use]
pub fn find_sets_recursive(values: &[u32]) -> Option<Partition<u32>> {
    let half = half_of_even_total(values)?;
    let mut search = Backtrack {
        values,
        half,
        first: Vec::with_capacity(values.len()),
        second: Vec::with_capacity(values.len()),
    };
    search
        .place(0, 0, 0)
        .then(|| Partition::new(search.first, search.second))
}

/// Mutable search state: one buffer per side, pushed on descent and popped
/// on every failing return.
struct Backtrack<'a> {
    values: &'a [u32],
    half: u64,
    first: Vec<u32>,
    second: Vec<u32>,
}

impl Backtrack<'_> {
    /// Place `values[idx..]`. On success the buffers hold the partition; on
    /// failure they are exactly as they were on entry.
    fn place(&mut self, idx: usize, sum_first: u64, sum_second: u64) -> bool {
        // A side past half the total can never come back to equality.
        if sum_first > self.half || sum_second > self.half {
            return false;
        }
        let Some(&v) = self.values.get(idx) else {
            return sum_first == sum_second;
        };
        let w = u64::from(v);

        self.first.push(v);
        if self.place(idx + 1, sum_first + w, sum_second) {
            return true;
        }
        self.first.pop();

        self.second.push(v);
        if self.place(idx + 1, sum_first, sum_second + w) {
            return true;
        }
        self.second.pop();

        false
    }
}

/// Equal-sum split reconstructed from the subset-sum table.
///
/// Walking back from `(n, total / 2)`: if the target is still reachable
/// without element `i - 1` it goes to B and the target is unchanged,
/// otherwise it goes to A and the target drops by its value. Exclusion wins
/// when both moves are valid.
///
/// # Errors
/// [`PartitionError::TableTooLarge`] if the table cannot be allocated.
pub fn find_sets_dp(values: &[u32]) -> Result<Option<Partition<u32>>, PartitionError> {
    let Some(half) = half_of_even_total(values) else {
        return Ok(None);
    };
    let table = SubsetSumTable::build(values, half)?;
    if !table.is_feasible() {
        return Ok(None);
    }

    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut target = half;
    for i in (1..=values.len()).rev() {
        let v = values[i - 1];
        if table.reachable(i - 1, target) {
            second.push(v);
        } else {
            debug_assert!(u64::from(v) <= target && table.reachable(i - 1, target - u64::from(v)));
            first.push(v);
            target -= u64::from(v);
        }
    }
    debug_assert_eq!(target, 0);

    Ok(Some(Partition::new(first, second)))
}

/// Equal-sum split with the chosen [`Method`].
///
/// # Errors
/// Only [`Method::Dynamic`] can fail, see [`find_sets_dp`].
pub fn find_sets(values: &[u32], method: Method) -> Result<Option<Partition<u32>>, PartitionError> {
    match method {
        Method::Recursive => Ok(find_sets_recursive(values)),
        Method::Dynamic => find_sets_dp(values),
    }
}
