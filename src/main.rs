use std::error::Error;
use std::process;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use balanza::{CountSession, QuotaState};

mod cli;
use cli::{Cli, Commands};

/// One row of `sweep --json` output. Counts are decimal strings; they stop
/// fitting in a u64 around n=10.
#[derive(Serialize)]
struct SweepRow {
    n: usize,
    count: String,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Count { n, stats } => run_count(n, stats),
        Commands::Sweep { max, json, stats } => run_sweep(max, json, stats),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run_count(n: usize, stats: bool) -> Result<(), Box<dyn Error>> {
    let started = Instant::now();
    let initial = QuotaState::initial(n)?;
    let mut session = CountSession::new();
    let count = session.completions(&initial);
    println!("{}", count);
    if stats {
        eprintln!(
            "n={}: {} states memoized in {:.2?}",
            n,
            session.memo_len(),
            started.elapsed()
        );
    }
    Ok(())
}

fn run_sweep(max: usize, json: bool, stats: bool) -> Result<(), Box<dyn Error>> {
    let mut rows = Vec::new();
    for n in (0..=max).step_by(2) {
        let started = Instant::now();
        let initial = QuotaState::initial(n)?;
        let mut session = CountSession::new();
        let count = session.completions(&initial);
        if json {
            rows.push(SweepRow {
                n,
                count: count.to_string(),
            });
        } else {
            println!("ret for {} is {}", n, count);
        }
        if stats {
            eprintln!(
                "n={}: {} states memoized in {:.2?}",
                n,
                session.memo_len(),
                started.elapsed()
            );
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }
    Ok(())
}
