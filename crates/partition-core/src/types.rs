//! Partition result types.
//!
//! A [`Partition`] is a pair of sequences such that every input element lands
//! in exactly one of them, multiplicities preserved. Order inside a side is
//! not significant.

use serde::Serialize;

use crate::sum::{sum, Magnitude};

/// Two-way split of an input sequence into set A (`first`) and set B (`second`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Partition<T> {
    /// Set A.
    pub first: Vec<T>,
    /// Set B.
    pub second: Vec<T>,
}

impl<T: Magnitude> Partition<T> {
    /// Build a partition from its two sides.
    #[inline]
    #[must_use]
    pub const fn new(first: Vec<T>, second: Vec<T>) -> Self {
        Self { first, second }
    }

    /// Sum of set A.
    #[inline]
    #[must_use]
    pub fn first_sum(&self) -> T::Sum {
        sum(&self.first)
    }

    /// Sum of set B.
    #[inline]
    #[must_use]
    pub fn second_sum(&self) -> T::Sum {
        sum(&self.second)
    }

    /// `|sum(A) - sum(B)|`.
    #[inline]
    #[must_use]
    pub fn difference(&self) -> T::Sum {
        T::abs_diff(self.first_sum(), self.second_sum())
    }

    /// Total number of elements across both sides.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Whether both sides are empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    /// Whether both sides hold the same number of elements.
    #[inline]
    #[must_use]
    pub fn is_balanced_in_size(&self) -> bool {
        self.first.len() == self.second.len()
    }

    /// Returns `true` iff `first ∪ second` equals `input` as a multiset.
    #[must_use]
    pub fn is_repartition_of(&self, input: &[T]) -> bool {
        if self.len() != input.len() {
            return false;
        }
        let mut expected = input.to_vec();
        let mut got: Vec<T> = self.first.iter().chain(&self.second).copied().collect();
        expected.sort_by(T::total_cmp);
        got.sort_by(T::total_cmp);
        expected
            .iter()
            .zip(&got)
            .all(|(a, b)| a.total_cmp(b).is_eq())
    }

    /// `max(sum A, sum B) / average(sum A, sum B)`; `1.0` when the total is zero.
    #[must_use]
    pub fn imbalance_ratio(&self) -> f64 {
        let a = T::as_f64(self.first_sum());
        let b = T::as_f64(self.second_sum());
        let avg = (a + b) / 2.0;
        if avg <= 0.0 {
            return 1.0;
        }
        a.max(b) / avg
    }
}

/// Result of a minimum-difference search: the split and its sum difference.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize, T::Sum: Serialize"))]
pub struct MinDiffPartition<T: Magnitude> {
    /// The best split found.
    pub partition: Partition<T>,
    /// `|sum(A) - sum(B)|` of `partition`.
    pub diff: T::Sum,
}
