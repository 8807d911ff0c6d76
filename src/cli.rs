// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the balanza command-line interface.
//!
//! Two subcommands: `count` computes the exact count for a single even
//! matrix size, and `sweep` walks every even size from 0 up to a bound,
//! printing one result line per size. Sweep output can be switched to JSON
//! for machine consumption.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "balanza",
    about = "Exact counts of n×n 0/1 matrices with balanced rows and columns",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the balanced matrices of one size
    Count {
        /// Matrix size n (must be even)
        n: usize,

        /// Report memo-table size and elapsed time to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Count every even size from 0 up to a bound
    Sweep {
        /// Largest matrix size to include (an odd bound rounds down)
        #[arg(short, long)]
        max: usize,

        /// Emit a JSON array instead of one text line per size
        #[arg(long)]
        json: bool,

        /// Report memo-table size and elapsed time per size to stderr
        #[arg(long)]
        stats: bool,
    },
}
