//! Noughts - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, SessionConfig, play_session};
use noughts_engine::{Board, Mark, MatchController, Position, search};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            moves,
            seed,
        } => run_play(config, moves, seed),
        Command::BestMove {
            board,
            mark,
            scores,
        } => run_best_move(&board, mark, scores),
    }
}

/// Play a session and stream its events to stdout
#[instrument]
fn run_play(config: Option<PathBuf>, moves: Vec<Position>, seed: Option<u64>) -> Result<()> {
    let config = match config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    }
    .with_seed(seed);

    let rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut controller = MatchController::with_rng(rng);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let numbers: Vec<u8> = moves.iter().map(|pos| pos.number()).collect();
    let summary = play_session(&mut controller, config.to_setup(), &numbers, &mut out)?;

    info!(
        matches = summary.matches_finished,
        wins_x = summary.stats.wins_x,
        wins_o = summary.stats.wins_o,
        ties = summary.stats.ties,
        "Done"
    );
    Ok(())
}

/// Print the engine's choice for a board
#[instrument]
fn run_best_move(board: &str, mark: Mark, scores: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    println!("{}\n", board.display());

    if scores {
        for (pos, score) in search::score_moves(&board, mark) {
            println!("{:>2} {:<13} {:>3}", pos.number(), pos.label(), score);
        }
    }

    match search::best_move(&board, mark) {
        Some(pos) => println!("{} plays {}", mark, pos),
        None => println!("Board is full"),
    }
    Ok(())
}
