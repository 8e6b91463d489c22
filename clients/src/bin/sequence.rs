//! `qtcat-sequence` — iterate a NU/ND map from a partition or QDV and print
//! the trajectory.
//!
//! **Usage:**
//! ```text
//! qtcat-sequence --input "5,4,4,1" --map nd
//! qtcat-sequence --input "0,1,2,2,-1" --qdv --map nu2 --json
//! ```
//!
//! The input is a comma-separated integer list (optionally parenthesized);
//! with `--qdv` it is read as a quasi-Dyck vector and decoded first. Output
//! is a per-step table of partition, dinv, deficit, and class, plus the
//! termination reason — or the same data as JSON with `--json`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use qtcat::parse::{parse_partition, parse_qdv};
use qtcat::{generate_sequence, MapKind, Partition, DEFAULT_SEQUENCE_CEILING};

/// Which map to iterate.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MapArg {
    /// Elementary raise NU₁.
    Nu1,
    /// Elementary lower ND₁.
    Nd1,
    /// Bridge raise NU₂.
    Nu2,
    /// Bridge lower ND₂.
    Nd2,
    /// Unified raise.
    Nu,
    /// Unified lower.
    Nd,
}

impl From<MapArg> for MapKind {
    fn from(arg: MapArg) -> Self {
        match arg {
            MapArg::Nu1 => MapKind::Nu1,
            MapArg::Nd1 => MapKind::Nd1,
            MapArg::Nu2 => MapKind::Nu2,
            MapArg::Nd2 => MapKind::Nd2,
            MapArg::Nu => MapKind::Nu,
            MapArg::Nd => MapKind::Nd,
        }
    }
}

/// Iterate a partition map and print the trajectory.
#[derive(Parser)]
#[command(
    name = "qtcat-sequence",
    about = "Iterate a NU/ND map from a partition and record statistics per step"
)]
struct Args {
    /// Comma-separated integers: a partition, or a QDV with --qdv.
    #[arg(long)]
    input: String,

    /// The map to iterate.
    #[arg(long, value_enum)]
    map: MapArg,

    /// Read the input as a quasi-Dyck vector (must start with 0).
    #[arg(long)]
    qdv: bool,

    /// Iteration ceiling.
    #[arg(long, default_value_t = DEFAULT_SEQUENCE_CEILING)]
    max_iterations: usize,

    /// Emit the trajectory as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_input(args: &Args) -> Result<Partition> {
    if args.qdv {
        let qdv = parse_qdv(&args.input).context("invalid QDV input")?;
        Ok(qdv.to_partition())
    } else {
        parse_partition(&args.input).context("invalid partition input")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let initial = parse_input(&args)?;
    let trajectory = generate_sequence(&initial, args.map.into(), args.max_iterations);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trajectory)?);
        return Ok(());
    }

    println!("{} trajectory from {}", trajectory.map, initial);
    println!();
    println!("{:>4}  {:<24} {:>6} {:>8}  {}", "step", "partition", "dinv", "deficit", "class");
    for (i, step) in trajectory.steps.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:>6} {:>8}  {}",
            i,
            step.partition.to_string(),
            step.dinv,
            step.deficit,
            step.class,
        );
    }
    println!();
    println!(
        "{} iteration(s) — {}",
        trajectory.iterations, trajectory.termination
    );
    Ok(())
}
