// crates/partition-trials/src/generator.rs

//! Seeded array generators.
//!
//! The same `(count, size, seed)` always yields the same arrays, so trial
//! outcomes are reproducible run to run.

use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// `count` arrays of `size` integers drawn uniformly from `0..max_value`.
///
/// A `max_value` of zero yields all-zero arrays.
#[must_use]
pub fn int_arrays(count: usize, size: usize, max_value: u32, seed: u64) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (0..size)
                .map(|_| {
                    if max_value == 0 {
                        0
                    } else {
                        rng.random_range(0..max_value)
                    }
                })
                .collect()
        })
        .collect()
}

/// `count` arrays of `size` reals drawn uniformly from `[0, 1)`.
#[must_use]
pub fn real_arrays(count: usize, size: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..size).map(|_| rng.random::<f64>()).collect())
        .collect()
}
