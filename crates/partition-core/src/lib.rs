//! partition-core — two-way partitioning of a multiset of non-negative numbers.
//!
//! This crate holds the search and decision algorithms, and nothing else:
//! - summation helpers and the [`Magnitude`] numeric abstraction (`sum`),
//! - subset-sum feasibility, recursive and tabulated (`subset_sum`),
//! - exactly-equal-sum splits by backtracking or table reconstruction (`equal_sum`),
//! - the longest-processing-time greedy balancer (`greedy`),
//! - exhaustive minimum-difference search, optionally with equal-size halves (`min_diff`).
//!
//! Every call is a pure function of its input slice. Nothing is cached or
//! shared between calls, so independent inputs may be processed from many
//! threads without synchronization.
//!
//! ```
//! use partition_core::{equal_sum, min_diff};
//!
//! let split = equal_sum::find_sets_recursive(&[1, 5, 11, 5]).unwrap();
//! assert_eq!(split.first_sum(), split.second_sum());
//!
//! let best = min_diff::min_difference(&[1u32, 2, 3, 5]);
//! assert_eq!(best.diff, 1);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

/// Equal-sum partition construction (backtracking and DP reconstruction).
pub mod equal_sum;
/// Error type for the operations that can fail.
pub mod error;
/// Longest-processing-time greedy balancer.
pub mod greedy;
/// Exhaustive minimum-difference search.
pub mod min_diff;
/// Subset-sum oracles and the boolean reachability table.
pub mod subset_sum;
/// Summation helpers and the `Magnitude` numeric abstraction.
pub mod sum;
/// Partition result types.
pub mod types;

pub use error::PartitionError;
pub use subset_sum::{Method, SubsetSumTable};
pub use sum::Magnitude;
pub use types::{MinDiffPartition, Partition};

/// Commonly-used items for quick imports.
///
/// ```rust
/// use partition_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        error::PartitionError,
        subset_sum::Method,
        sum::Magnitude,
        types::{MinDiffPartition, Partition},
    };
}
