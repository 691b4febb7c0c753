// crates/partition-trials/src/profile.rs

//! Trial profile: which arrays to generate and which algorithms to run.
//!
//! ```toml
//! arrays = 1000
//! size = 12
//! max_value = 100
//! seed = 42
//! algorithms = ["feasible-dynamic", "sets-recursive", "greedy"]
//! ```
//!
//! Every key is optional; missing keys take the defaults above (and all
//! algorithms).

use std::fmt;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// An algorithm the runner can exercise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Equal-split feasibility, recursive oracle.
    FeasibleRecursive,
    /// Equal-split feasibility, subset-sum table.
    FeasibleDynamic,
    /// Equal-sum split by backtracking.
    SetsRecursive,
    /// Equal-sum split by table reconstruction.
    SetsDynamic,
    /// Greedy balancer (scored on exactly partitionable arrays).
    Greedy,
    /// Unconstrained minimum-difference search.
    MinDiff,
    /// Equal-cardinality minimum-difference search over integers.
    MinDiffEqual,
    /// Equal-cardinality minimum-difference search over reals.
    MinDiffEqualReal,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Self; 8] = [
        Self::FeasibleRecursive,
        Self::FeasibleDynamic,
        Self::SetsRecursive,
        Self::SetsDynamic,
        Self::Greedy,
        Self::MinDiff,
        Self::MinDiffEqual,
        Self::MinDiffEqualReal,
    ];

    /// Whether the algorithm needs an even array size.
    #[must_use]
    pub const fn needs_even_size(self) -> bool {
        matches!(self, Self::MinDiffEqual | Self::MinDiffEqualReal)
    }

    /// Stable kebab-case name (same spelling as in TOML).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FeasibleRecursive => "feasible-recursive",
            Self::FeasibleDynamic => "feasible-dynamic",
            Self::SetsRecursive => "sets-recursive",
            Self::SetsDynamic => "sets-dynamic",
            Self::Greedy => "greedy",
            Self::MinDiff => "min-diff",
            Self::MinDiffEqual => "min-diff-equal",
            Self::MinDiffEqualReal => "min-diff-equal-real",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of one trial run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrialProfile {
    /// Number of arrays to generate.
    pub arrays: usize,
    /// Elements per array.
    pub size: usize,
    /// Exclusive upper bound on integer values.
    pub max_value: u32,
    /// RNG seed shared by the integer and real generators.
    pub seed: u64,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
}

impl Default for TrialProfile {
    fn default() -> Self {
        Self {
            arrays: 1000,
            size: 12,
            max_value: 100,
            seed: 42,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl TrialProfile {
    /// Parse a profile from TOML text and validate it.
    ///
    /// # Errors
    /// Malformed TOML, unknown keys or algorithms, or a failed [`validate`](Self::validate).
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let profile: Self = toml::from_str(src).context("parse trial profile toml")?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read a profile from a TOML file.
    ///
    /// # Errors
    /// I/O failure or any error from [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("read profile {}", path.display()))?;
        Self::from_toml_str(&src).with_context(|| format!("load profile {}", path.display()))
    }

    /// Check the profile can be run.
    ///
    /// # Errors
    /// Zero counts, an empty algorithm list, or an odd `size` with an
    /// equal-cardinality algorithm selected.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.arrays > 0, "arrays must be > 0");
        ensure!(self.size > 0, "size must be > 0");
        ensure!(self.max_value > 0, "max_value must be > 0");
        ensure!(!self.algorithms.is_empty(), "algorithms must not be empty");
        if let Some(alg) = self.algorithms.iter().find(|a| a.needs_even_size()) {
            ensure!(
                self.size % 2 == 0,
                "{alg} needs an even array size, got size = {}",
                self.size
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_takes_defaults() {
        let p = TrialProfile::from_toml_str("").unwrap();
        assert_eq!(p, TrialProfile::default());
        assert_eq!(p.arrays, 1000);
        assert_eq!(p.size, 12);
        assert_eq!(p.algorithms.len(), Algorithm::ALL.len());
    }

    #[test]
    fn parses_kebab_case_algorithms() {
        let p = TrialProfile::from_toml_str(
            r#"
            arrays = 10
            seed = 7
            algorithms = ["sets-dynamic", "min-diff-equal-real"]
            "#,
        )
        .unwrap();
        assert_eq!(p.arrays, 10);
        assert_eq!(p.seed, 7);
        assert_eq!(p.max_value, 100);
        assert_eq!(
            p.algorithms,
            vec![Algorithm::SetsDynamic, Algorithm::MinDiffEqualReal]
        );
    }

    #[test]
    fn rejects_bad_profiles() {
        assert!(TrialProfile::from_toml_str("arrays = 0").is_err());
        assert!(TrialProfile::from_toml_str("bogus = 1").is_err());
        assert!(TrialProfile::from_toml_str(r#"algorithms = ["quantum"]"#).is_err());

        let err = TrialProfile::from_toml_str(
            r#"
            size = 7
            algorithms = ["min-diff-equal"]
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("even array size"));

        // Odd sizes are fine for unconstrained algorithms.
        assert!(TrialProfile::from_toml_str("size = 7\nalgorithms = [\"min-diff\"]").is_ok());
    }
}
