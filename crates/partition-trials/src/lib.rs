//! Repeated-trial harness for `partition-core`.
//!
//! Three small building blocks, kept outside the core so the algorithms stay
//! free of randomness and I/O:
//!
//! - `generator`: seeded random arrays (integers and reals).
//! - `profile`: a TOML trial profile (array count/size, value range, seed,
//!   algorithms to run).
//! - `runner`: runs each algorithm over the generated arrays, checks the
//!   result invariants on every call, and aggregates a `TrialReport`.
//!
//! Callers use module paths such as `partition_trials::runner::run`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

/// Seeded random array generation.
pub mod generator;
/// TOML trial profiles.
pub mod profile;
/// Trial execution and aggregate reports.
pub mod runner;
