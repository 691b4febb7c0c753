// crates/partition-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use partition_core::{equal_sum, greedy, min_diff, subset_sum, sum::sum_u32, Method, Partition};
use partition_trials::{profile::TrialProfile, runner};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "partition-cli",
    about = "Two-way number partitioning",
    long_about = "Two-way number partitioning.\n\nDecide and construct equal-sum splits, greedy and minimum-difference partitions, and run seeded trials over random arrays. Results are printed as JSON on stdout.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decide whether a subset reaches a target (default: half the total).
    Feasible {
        /// Comma-separated non-negative integers
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        values: Vec<u32>,

        /// Target sum; omit to ask for an equal-sum split
        #[arg(long)]
        target: Option<u64>,

        /// Recursive oracle or subset-sum table
        #[arg(long, value_enum, default_value_t = MethodOpt::Dynamic)]
        method: MethodOpt,
    },

    /// Construct an equal-sum split, if one exists.
    Split {
        /// Comma-separated non-negative integers
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        values: Vec<u32>,

        /// Backtracking or table reconstruction
        #[arg(long, value_enum, default_value_t = MethodOpt::Recursive)]
        method: MethodOpt,
    },

    /// Greedy (largest first, lighter side) balanced split.
    Greedy {
        /// Comma-separated non-negative integers
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        values: Vec<u32>,
    },

    /// Exhaustive minimum-difference split over integers.
    MinDiff {
        /// Comma-separated non-negative integers
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        values: Vec<u32>,

        /// Require both sides to hold the same number of elements
        #[arg(long, default_value_t = false)]
        equal_cardinality: bool,
    },

    /// Exhaustive minimum-difference split over reals.
    MinDiffReal {
        /// Comma-separated non-negative reals
        #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
        values: Vec<f64>,

        /// Require both sides to hold the same number of elements
        #[arg(long, default_value_t = false)]
        equal_cardinality: bool,
    },

    /// Print seeded random arrays as JSON lines.
    Generate {
        /// Number of arrays
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Elements per array
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,

        /// Exclusive upper bound on integer values
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        max_value: u32,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Generate reals in [0, 1) instead of integers
        #[arg(long, default_value_t = false)]
        real: bool,
    },

    /// Run a trial profile and write the aggregate report.
    Trials {
        /// TOML trial profile; defaults apply when omitted
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum MethodOpt {
    /// Exhaustive recursion / backtracking
    Recursive,
    /// Subset-sum table
    Dynamic,
}

impl From<MethodOpt> for Method {
    fn from(m: MethodOpt) -> Self {
        match m {
            MethodOpt::Recursive => Self::Recursive,
            MethodOpt::Dynamic => Self::Dynamic,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct FeasibleOut {
    /// Absent when an equal-sum split was asked for and the total is odd.
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<u64>,
    total: u64,
    method: Method,
    feasible: bool,
}

#[derive(Serialize)]
struct SplitOut {
    method: Method,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    partition: Option<Partition<u32>>,
}

#[derive(Serialize)]
struct GreedyOut {
    partition: Partition<u32>,
    diff: u64,
    imbalance_ratio: f64,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Feasible {
            values,
            target,
            method,
        } => feasible(&values, target, method.into()),

        Cmd::Split { values, method } => split(&values, method.into()),

        Cmd::Greedy { values } => {
            let partition = greedy::balance(&values);
            let out = GreedyOut {
                diff: partition.difference(),
                imbalance_ratio: partition.imbalance_ratio(),
                partition,
            };
            print_json(&out)
        }

        Cmd::MinDiff {
            values,
            equal_cardinality,
        } => {
            info!(n = values.len(), equal_cardinality, "searching minimum difference");
            if equal_cardinality {
                let r = min_diff::min_difference_equal_cardinality(&values)
                    .context("equal-cardinality search")?;
                print_json(&r)
            } else {
                print_json(&min_diff::min_difference(&values))
            }
        }

        Cmd::MinDiffReal {
            values,
            equal_cardinality,
        } => {
            ensure!(
                values.iter().all(|v| v.is_finite() && *v >= 0.0),
                "values must be finite and non-negative"
            );
            info!(n = values.len(), equal_cardinality, "searching minimum difference (real)");
            if equal_cardinality {
                let r = min_diff::min_difference_equal_cardinality_f64(&values)
                    .context("equal-cardinality search")?;
                print_json(&r)
            } else {
                print_json(&min_diff::min_difference_f64(&values))
            }
        }

        Cmd::Generate {
            count,
            size,
            max_value,
            seed,
            real,
        } => generate(count, size, max_value, seed, real),

        Cmd::Trials { profile, out } => trials(profile.as_deref(), out.as_deref()),
    }
}

/// Initialize tracing with an env-driven filter (default INFO), logging to stderr.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    serde_json::to_writer_pretty(&mut w, value).context("serialize result to JSON")?;
    w.write_all(b"\n")?;
    Ok(())
}

fn feasible(values: &[u32], target: Option<u64>, method: Method) -> Result<()> {
    info!(n = values.len(), ?target, ?method, "deciding subset sum");
    print_json(&feasibility(values, target, method)?)
}

fn feasibility(values: &[u32], target: Option<u64>, method: Method) -> Result<FeasibleOut> {
    let total = sum_u32(values);
    let out = match target {
        Some(target) => FeasibleOut {
            target: Some(target),
            total,
            method,
            feasible: subset_sum::is_subset_sum(values, target, method)?,
        },
        None => FeasibleOut {
            target: (total % 2 == 0).then_some(total / 2),
            total,
            method,
            feasible: subset_sum::can_partition(values, method)?,
        },
    };
    Ok(out)
}

fn split(values: &[u32], method: Method) -> Result<()> {
    info!(n = values.len(), ?method, "constructing equal-sum split");
    let partition = equal_sum::find_sets(values, method)?;
    print_json(&SplitOut {
        method,
        found: partition.is_some(),
        partition,
    })
}

fn generate(count: u32, size: u32, max_value: u32, seed: u64, real: bool) -> Result<()> {
    use partition_trials::generator::{int_arrays, real_arrays};

    info!(count, size, max_value, seed, real, "generating arrays");
    let (count, size) = (count as usize, size as usize);

    let stdout = io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    if real {
        for a in real_arrays(count, size, seed) {
            serde_json::to_writer(&mut w, &a).context("serialize array")?;
            w.write_all(b"\n")?;
        }
    } else {
        for a in int_arrays(count, size, max_value, seed) {
            serde_json::to_writer(&mut w, &a).context("serialize array")?;
            w.write_all(b"\n")?;
        }
    }
    w.flush()?;
    Ok(())
}

fn trials(profile: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let profile = match profile {
        Some(path) => TrialProfile::load(path)?,
        None => TrialProfile::default(),
    };
    info!(
        arrays = profile.arrays,
        size = profile.size,
        seed = profile.seed,
        algorithms = profile.algorithms.len(),
        "running trials"
    );
    let report = runner::run(&profile).context("trial run failed")?;

    match out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &report).context("serialize report")?;
            w.write_all(b"\n")?;
            w.flush()?;
            println!("Wrote report → {}", path.display());
        }
        None => print_json(&report)?,
    }

    ensure!(
        report.violations() == 0,
        "{} invariant violations (see log)",
        report.violations()
    );
    Ok(())
}
