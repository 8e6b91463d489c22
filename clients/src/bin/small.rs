//! `qtcat-small` — exhaustively verify the SMALL counting identity.
//!
//! **Usage:**
//! ```text
//! qtcat-small 2 8
//! qtcat-small 2 8 --json
//! ```
//!
//! Enumerates all partitions of `k`, reduces each with TI₂, and checks that
//! exactly `2·p(r)` of those with fixed-point length `k + 2 − r` are
//! flagpoles. Exits non-zero on inadmissible input; a violated identity is
//! reported, not signalled through the exit code.

use anyhow::Result;
use clap::Parser;
use qtcat::verify_small;
use std::process;

/// Verify SMALL(r, k) by exhaustive enumeration.
#[derive(Parser)]
#[command(
    name = "qtcat-small",
    about = "Verify the SMALL flagpole-counting identity for a pair (r, k)"
)]
struct Args {
    /// The r of SMALL(r, k); needs r ≤ ⌊k/2⌋ − 2.
    r: u32,

    /// The k of SMALL(r, k): size of the enumerated partitions.
    k: u32,

    /// Emit the full report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = match verify_small(args.r, args.k) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("SMALL({}, {}) verification", report.r, report.k);
    println!("  target length : k + 2 − r = {}", report.target_length);
    println!("  expected      : 2·p({}) = {}", report.r, report.expected);
    println!("  flagpoles     : {}", report.actual());
    println!(
        "  verdict       : {}",
        if report.holds() { "SATISFIED" } else { "NOT SATISFIED" }
    );
    println!();

    println!("Flagpole partitions:");
    for (i, w) in report.flagpoles.iter().enumerate() {
        let kind = w
            .flagpole
            .map(|f| f.to_string())
            .unwrap_or_else(|| "—".into());
        println!("  {:>3}. {:<20} {:<8} {}", i + 1, w.mu.to_string(), kind, w.vector);
    }

    if !report.non_flagpoles.is_empty() {
        println!();
        println!(
            "Other partitions at length {} (not counted):",
            report.target_length
        );
        for (i, w) in report.non_flagpoles.iter().enumerate() {
            println!("  {:>3}. {:<20} {}", i + 1, w.mu.to_string(), w.vector);
        }
    }

    Ok(())
}
