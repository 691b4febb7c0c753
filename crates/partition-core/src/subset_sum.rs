// crates/partition-core/src/subset_sum.rs

//! Subset-sum oracles.
//!
//! Two interchangeable forms answer "does some sub-multiset of `values` sum to
//! exactly `target`?":
//!
//! - [`is_subset_sum_recursive`]: include/exclude recursion on the last
//!   remaining element. Exponential in `values.len()`.
//! - [`is_subset_sum_dp`]: the pseudo-polynomial [`SubsetSumTable`],
//!   `O(n · min(target, total))` time and space, bounded by
//!   [`MAX_TABLE_CELLS`].
//!
//! The equal-partition checks ([`can_partition`] and friends) reject an odd
//! total up front and otherwise ask for a subset reaching half the total.

use serde::{Deserialize, Serialize};

use crate::error::PartitionError;
use crate::sum::sum_u32;

/// Which form of an algorithm to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Exhaustive recursion / backtracking.
    #[default]
    Recursive,
    /// Subset-sum table.
    Dynamic,
}

/// Recursive subset-sum decision.
///
/// Base cases: a zero target is always reachable (empty selection); no
/// elements left with a non-zero target is not. An element larger than the
/// remaining target can only be skipped.
#[must_use]
pub fn is_subset_sum_recursive(values: &[u32], target: u64) -> bool {
    if target == 0 {
        return true;
    }
    let Some((&last, rest)) = values.split_last() else {
        return false;
    };
    let last = u64::from(last);
    if last > target {
        return is_subset_sum_recursive(rest, target);
    }
    is_subset_sum_recursive(rest, target) || is_subset_sum_recursive(rest, target - last)
}

/// Upper bound on the number of cells a [`SubsetSumTable`] may hold (4 GiB).
pub const MAX_TABLE_CELLS: u64 = 1 << 32;

/// Boolean reachability table over (prefix length, sum).
///
/// Cell `(i, s)` is `true` iff some sub-multiset of the first `i` elements sums
/// to exactly `s`. Rows are sums `0..=min(target, total)`, columns are
/// prefixes `0..=n`; storage is row-major in one flat buffer. Sums above the
/// total are never reachable and have no row.
#[derive(Clone, Debug)]
pub struct SubsetSumTable {
    /// Number of columns, `n + 1`.
    cols: usize,
    /// Number of rows actually stored.
    rows: usize,
    target: u64,
    cells: Vec<bool>,
}

impl SubsetSumTable {
    /// Fill the table bottom-up for `values` and sums up to `target`.
    ///
    /// # Errors
    /// [`PartitionError::TableTooLarge`] if `(min(target, total) + 1) · (n + 1)`
    /// exceeds [`MAX_TABLE_CELLS`] or the allocation fails.
    pub fn build(values: &[u32], target: u64) -> Result<Self, PartitionError> {
        let too_large = PartitionError::TableTooLarge {
            elements: values.len(),
            target,
        };
        let covered = target.min(sum_u32(values));
        let cols = values.len().checked_add(1).ok_or(too_large)?;
        let len = u64::try_from(cols)
            .ok()
            .and_then(|c| covered.checked_add(1)?.checked_mul(c))
            .filter(|&len| len <= MAX_TABLE_CELLS)
            .and_then(|len| usize::try_from(len).ok())
            .ok_or(too_large)?;
        let rows = len / cols;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, false);
        // Sum 0 is reachable from every prefix.
        cells[..cols].fill(true);

        for s in 1..rows {
            for i in 1..cols {
                let v = values[i - 1] as usize;
                let without = cells[s * cols + i - 1];
                let with = v <= s && cells[(s - v) * cols + i - 1];
                cells[s * cols + i] = without || with;
            }
        }

        Ok(Self {
            cols,
            rows,
            target,
            cells,
        })
    }

    /// Number of elements the table was built over.
    #[inline]
    #[must_use]
    pub const fn elements(&self) -> usize {
        self.cols - 1
    }

    /// Target the table was built for.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Whether the first `prefix` elements can reach exactly `sum`.
    ///
    /// Out-of-range coordinates are unreachable.
    #[must_use]
    pub fn reachable(&self, prefix: usize, sum: u64) -> bool {
        if prefix >= self.cols || sum > self.target {
            return false;
        }
        usize::try_from(sum)
            .ok()
            .filter(|&s| s < self.rows)
            .and_then(|s| self.cells.get(s * self.cols + prefix))
            .copied()
            .unwrap_or(false)
    }

    /// The final cell: all elements, full target.
    #[inline]
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.reachable(self.elements(), self.target)
    }
}

/// Tabulated subset-sum decision.
///
/// # Errors
/// [`PartitionError::TableTooLarge`] if the table cannot be allocated.
pub fn is_subset_sum_dp(values: &[u32], target: u64) -> Result<bool, PartitionError> {
    Ok(SubsetSumTable::build(values, target)?.is_feasible())
}

/// Half of an even total, or `None` when the total is odd.
#[inline]
pub(crate) fn half_of_even_total(values: &[u32]) -> Option<u64> {
    let total = sum_u32(values);
    (total % 2 == 0).then_some(total / 2)
}

/// Equal-sum split feasibility via the recursive oracle.
#[must_use]
pub fn can_partition_recursive(values: &[u32]) -> bool {
    half_of_even_total(values).is_some_and(|half| is_subset_sum_recursive(values, half))
}

/// Equal-sum split feasibility via the subset-sum table.
///
/// # Errors
/// [`PartitionError::TableTooLarge`] if the table cannot be allocated.
pub fn can_partition_dp(values: &[u32]) -> Result<bool, PartitionError> {
    match half_of_even_total(values) {
        Some(half) => is_subset_sum_dp(values, half),
        None => Ok(false),
    }
}

/// Equal-sum split feasibility with the chosen [`Method`].
///
/// # Errors
/// Only [`Method::Dynamic`] can fail, see [`can_partition_dp`].
pub fn can_partition(values: &[u32], method: Method) -> Result<bool, PartitionError> {
    match method {
        Method::Recursive => Ok(can_partition_recursive(values)),
        Method::Dynamic => can_partition_dp(values),
    }
}

/// Subset-sum feasibility for an explicit target with the chosen [`Method`].
///
/// # Errors
/// Only [`Method::Dynamic`] can fail, see [`is_subset_sum_dp`].
pub fn is_subset_sum(values: &[u32], target: u64, method: Method) -> Result<bool, PartitionError> {
    match method {
        Method::Recursive => Ok(is_subset_sum_recursive(values, target)),
        Method::Dynamic => is_subset_sum_dp(values, target),
    }
}
