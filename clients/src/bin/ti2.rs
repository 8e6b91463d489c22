//! `qtcat-ti2` — run the tail reduction on a partition and classify the
//! fixed point.
//!
//! **Usage:**
//! ```text
//! qtcat-ti2 --input "3,2,2,1"
//! qtcat-ti2 --input "3,2,2,1" --steps --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use qtcat::parse::parse_partition;
use qtcat::compute_ti2;

/// Compute TI₂(μ) and its flagpole classification.
#[derive(Parser)]
#[command(
    name = "qtcat-ti2",
    about = "Reduce a partition to its TI₂ fixed point and classify it"
)]
struct Args {
    /// The partition μ, comma-separated.
    #[arg(long)]
    input: String,

    /// Also print the full step log.
    #[arg(long)]
    steps: bool,

    /// Emit the reduction as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mu = parse_partition(&args.input).context("invalid partition input")?;
    let reduction = compute_ti2(&mu);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reduction)?);
        return Ok(());
    }

    println!("TI₂({}) = {}", mu, reduction.vector);
    let kind = reduction
        .flagpole()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "Non-flagpole".into());
    println!("classification: {kind}");
    if reduction.hit_ceiling {
        println!("note: step ceiling reached before a fixed point");
    }

    if args.steps {
        println!();
        for (i, step) in reduction.steps.iter().enumerate() {
            println!("  {:>3}. {:<8} {}", i, format!("{:?}", step.rule), step.vector);
        }
    }

    Ok(())
}
