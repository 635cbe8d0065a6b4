//! Command-line interface for strictly_qubic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Qubic - 4x4x4 tic-tac-toe with a greedy self-playing engine
#[derive(Parser, Debug)]
#[command(name = "strictly_qubic")]
#[command(about = "4x4x4 tic-tac-toe self-play and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game with the heuristic on both sides
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the random fallback move (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Pause between moves in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Write the finished game as JSON to this file
        #[arg(long)]
        record: Option<PathBuf>,

        /// Only print the result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Replay a recorded game and verify its result
    Replay {
        /// Path to a JSON game record
        record: PathBuf,
    },
}
