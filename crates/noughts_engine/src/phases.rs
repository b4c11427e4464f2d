//! Match phases and outcomes.

use crate::lines::WinningLine;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Phase of the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MatchPhase {
    /// No players registered; only an empty board.
    #[display("idle")]
    Idle,
    /// A match is being played.
    #[display("in progress")]
    InProgress,
    /// The last match ended; waiting for the next one or a reset.
    #[display("finished")]
    Finished,
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner {
        /// Winning mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { mark, line } => write!(f, "{} wins on {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
