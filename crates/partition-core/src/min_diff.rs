// crates/partition-core/src/min_diff.rs

//! Exhaustive minimum-difference search.
//!
//! The search enumerates the binary placement tree of depth `n` (each level
//! sends one element to A or to B, A first) and keeps the leaf with the
//! smallest `|sum(A) - sum(B)|`. A later leaf replaces the incumbent only if
//! it is strictly better, so among equally good splits the first one in
//! A-before-B order wins. `O(2^n)`: intended for `n` up to about 20.
//!
//! With the equal-cardinality constraint, once either side holds `n / 2`
//! elements every remaining element is forced to the other side.
//!
//! Real inputs run through the same generic code; difference values are
//! compared with plain floating-point ordering and no tolerance.

use crate::error::PartitionError;
use crate::sum::Magnitude;
use crate::types::{MinDiffPartition, Partition};

/// Global minimum-difference split, no size constraint.
#[must_use]
pub fn min_difference<T: Magnitude>(values: &[T]) -> MinDiffPartition<T> {
    Search::new(values, None).run()
}

/// Minimum-difference split into two halves of equal size.
///
/// # Errors
/// [`PartitionError::OddCardinality`] if `values.len()` is odd. This is
/// checked once, before any search.
pub fn min_difference_equal_cardinality<T: Magnitude>(
    values: &[T],
) -> Result<MinDiffPartition<T>, PartitionError> {
    if values.len() % 2 != 0 {
        return Err(PartitionError::OddCardinality { len: values.len() });
    }
    Ok(Search::new(values, Some(values.len() / 2)).run())
}

/// Real-valued [`min_difference`].
#[inline]
#[must_use]
pub fn min_difference_f64(values: &[f64]) -> MinDiffPartition<f64> {
    min_difference(values)
}

/// Real-valued [`min_difference_equal_cardinality`].
///
/// # Errors
/// [`PartitionError::OddCardinality`] if `values.len()` is odd.
#[inline]
pub fn min_difference_equal_cardinality_f64(
    values: &[f64],
) -> Result<MinDiffPartition<f64>, PartitionError> {
    min_difference_equal_cardinality(values)
}

struct Search<'a, T: Magnitude> {
    values: &'a [T],
    /// Required size of each side, if constrained.
    quota: Option<usize>,
    first: Vec<T>,
    second: Vec<T>,
    best: Option<MinDiffPartition<T>>,
}

impl<'a, T: Magnitude> Search<'a, T> {
    fn new(values: &'a [T], quota: Option<usize>) -> Self {
        Self {
            values,
            quota,
            first: Vec::with_capacity(values.len()),
            second: Vec::with_capacity(values.len()),
            best: None,
        }
    }

    fn run(mut self) -> MinDiffPartition<T> {
        let zero = T::Sum::default();
        self.descend(0, zero, zero);
        // The tree always has at least one leaf, even for empty input.
        self.best.unwrap_or_else(|| MinDiffPartition {
            partition: Partition::new(Vec::new(), Vec::new()),
            diff: zero,
        })
    }

    /// A zero difference cannot be beaten.
    fn settled(&self) -> bool {
        self.best
            .as_ref()
            .is_some_and(|b| b.diff <= T::Sum::default())
    }

    fn descend(&mut self, idx: usize, sum_first: T::Sum, sum_second: T::Sum) {
        if self.settled() {
            return;
        }
        let Some(&v) = self.values.get(idx) else {
            self.offer(sum_first, sum_second);
            return;
        };

        if let Some(q) = self.quota {
            if self.first.len() == q {
                self.force_rest(idx, sum_first, sum_second, Side::Second);
                return;
            }
            if self.second.len() == q {
                self.force_rest(idx, sum_first, sum_second, Side::First);
                return;
            }
        }

        let w = v.widen();

        self.first.push(v);
        self.descend(idx + 1, sum_first + w, sum_second);
        self.first.pop();

        self.second.push(v);
        self.descend(idx + 1, sum_first, sum_second + w);
        self.second.pop();
    }

    /// Send `values[idx..]` to one side, score the leaf, then restore.
    fn force_rest(
        &mut self,
        idx: usize,
        mut sum_first: T::Sum,
        mut sum_second: T::Sum,
        side: Side,
    ) {
        let values = self.values;
        let rest = &values[idx..];
        let added = rest
            .iter()
            .fold(T::Sum::default(), |acc, &v| acc + v.widen());
        let buf = match side {
            Side::First => {
                sum_first = sum_first + added;
                &mut self.first
            }
            Side::Second => {
                sum_second = sum_second + added;
                &mut self.second
            }
        };
        let mark = buf.len();
        buf.extend_from_slice(rest);
        self.offer(sum_first, sum_second);
        match side {
            Side::First => self.first.truncate(mark),
            Side::Second => self.second.truncate(mark),
        }
    }

    /// Record the current leaf if it strictly improves on the incumbent.
    fn offer(&mut self, sum_first: T::Sum, sum_second: T::Sum) {
        let diff = T::abs_diff(sum_first, sum_second);
        if self.best.as_ref().is_some_and(|b| diff >= b.diff) {
            return;
        }
        self.best = Some(MinDiffPartition {
            partition: Partition::new(self.first.clone(), self.second.clone()),
            diff,
        });
    }
}

#[derive(Clone, Copy)]
enum Side {
    First,
    Second,
}
