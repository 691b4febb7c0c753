// crates/partition-core/src/sum.rs

//! Summation and absolute-difference helpers.
//!
//! Integer elements are summed in a wider type (`u32` → `u64`, `u64` → `u128`)
//! so an accumulator cannot overflow for any slice shorter than 2^32 elements.
//! Reals are summed in `f64` in slice order.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::Add;

use serde::Serialize;

/// A non-negative element type that can be partitioned.
///
/// `Sum` is the accumulator type used for subset sums and differences.
pub trait Magnitude: Copy + PartialOrd + Debug + Serialize {
    /// Widened accumulator for sums of `Self`.
    type Sum: Copy + PartialOrd + Add<Output = Self::Sum> + Default + Debug + Serialize;

    /// Lift one element into the accumulator type.
    fn widen(self) -> Self::Sum;

    /// `|a - b|` in the accumulator type.
    fn abs_diff(a: Self::Sum, b: Self::Sum) -> Self::Sum;

    /// Total order on elements (used for sorting and multiset comparison).
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Lossy view of a sum, for ratios and reporting.
    fn as_f64(sum: Self::Sum) -> f64;
}

impl Magnitude for u32 {
    type Sum = u64;

    #[inline]
    fn widen(self) -> u64 {
        u64::from(self)
    }

    #[inline]
    fn abs_diff(a: u64, b: u64) -> u64 {
        a.abs_diff(b)
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(sum: u64) -> f64 {
        sum as f64
    }
}

impl Magnitude for u64 {
    type Sum = u128;

    #[inline]
    fn widen(self) -> u128 {
        u128::from(self)
    }

    #[inline]
    fn abs_diff(a: u128, b: u128) -> u128 {
        a.abs_diff(b)
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(sum: u128) -> f64 {
        sum as f64
    }
}

impl Magnitude for f64 {
    type Sum = f64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn abs_diff(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    #[inline]
    fn as_f64(sum: f64) -> f64 {
        sum
    }
}

/// Sum of all elements in the widened accumulator type.
#[inline]
#[must_use]
pub fn sum<T: Magnitude>(values: &[T]) -> T::Sum {
    values
        .iter()
        .fold(T::Sum::default(), |acc, &v| acc + v.widen())
}

/// Sum of a `u32` slice as `u64`.
#[inline]
#[must_use]
pub fn sum_u32(values: &[u32]) -> u64 {
    sum(values)
}

/// Sum of an `f64` slice, accumulated left to right.
#[inline]
#[must_use]
pub fn sum_f64(values: &[f64]) -> f64 {
    sum(values)
}

/// `|sum(a) - sum(b)|`.
#[inline]
#[must_use]
pub fn abs_diff<T: Magnitude>(a: &[T], b: &[T]) -> T::Sum {
    T::abs_diff(sum(a), sum(b))
}
