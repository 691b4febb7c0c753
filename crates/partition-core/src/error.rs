// crates/partition-core/src/error.rs

//! Errors surfaced by partitioning operations.
//!
//! An odd total sum is *not* an error: equal-sum queries answer `false` or
//! `None` for it. Only requests that cannot be posed at all are reported here.

/// Failure conditions of the partitioning API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// Equal-cardinality split requested for an odd number of elements.
    #[error("cannot split {len} elements into two halves of equal size (odd cardinality)")]
    OddCardinality {
        /// Number of input elements.
        len: usize,
    },
    /// The subset-sum table for this input exceeds the cell budget or cannot be
    /// allocated.
    #[error("subset-sum table for {elements} elements and target {target} exceeds addressable size")]
    TableTooLarge {
        /// Number of input elements.
        elements: usize,
        /// Target sum the table would have to cover.
        target: u64,
    },
}
