//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::{Mark, Position};

/// Noughts - headless tic-tac-toe sessions against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe sessions and query the minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session, printing match events as JSON lines
    Play {
        /// Path to a session config file (defaults: human X against the computer)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Positions the human players submit, in order, as numbers (1-9)
        /// or labels such as "center"
        #[arg(short, long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// Seed for the opening coin, overriding the config
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the move the engine picks for a board
    BestMove {
        /// Nine cells in row-major order, e.g. "XX__O____"
        #[arg(short, long)]
        board: String,

        /// Mark the engine plays
        #[arg(long, value_parser = parse_mark)]
        mark: Mark,

        /// Also print the score of every empty cell
        #[arg(long)]
        scores: bool,
    },
}

/// Parses `x` or `o`, any case.
pub fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.trim() {
        "x" | "X" => Ok(Mark::X),
        "o" | "O" => Ok(Mark::O),
        other => Err(format!("expected x or o, got {:?}", other)),
    }
}

/// Parses a position number (1-9) or label, any case.
pub fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("expected 1-9 or a cell name like top-left, got {:?}", s))
}
