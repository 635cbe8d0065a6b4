//! Strictly Qubic - self-play driver
//!
//! Plays the greedy heuristic against itself or replays a stored game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_qubic::{GameRecord, GameStatus, PlayConfig, SelfPlay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            record,
            quiet,
        } => run_play(config, seed, delay_ms, record, quiet),
        Command::Replay { record } => run_replay(&record),
    }
}

/// Plays one self-play game.
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    record: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(seed, delay_ms, quiet);

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    info!(?config, "Starting self-play");

    let delay = Duration::from_millis(*config.move_delay_ms());
    let mut game = SelfPlay::new(rng);
    while let Some(turn) = game.step()? {
        if *config.show_board() {
            println!("Player {} -> {} [{}]", turn.player, turn.mv, turn.mv.pack());
            println!("{}", game.board().display());
        }
        if !delay.is_zero() && !turn.status.is_over() {
            std::thread::sleep(delay);
        }
    }

    let board = *game.board();
    let game_record = game.into_record();
    println!("{}", describe(*game_record.status()));
    println!("Board:");
    print!("{}", board.display());

    if let Some(path) = record {
        let json = serde_json::to_string_pretty(&game_record)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write record to {}", path.display()))?;
        info!(path = %path.display(), "Record written");
    }

    Ok(())
}

/// Replays a stored game.
#[instrument(skip_all, fields(path = %path.display()))]
fn run_replay(path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record {}", path.display()))?;
    let game_record: GameRecord = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse record {}", path.display()))?;

    let board = game_record.replay()?;
    println!(
        "Replayed {} moves: {}",
        game_record.moves().len(),
        describe(*game_record.status())
    );
    print!("{}", board.display());
    Ok(())
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::Won(player) => format!("Player {} wins!", player),
        GameStatus::Draw => "It's a tie!".to_string(),
        GameStatus::InProgress => "Game still in progress".to_string(),
    }
}
