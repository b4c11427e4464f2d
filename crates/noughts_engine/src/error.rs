//! Errors returned by match commands.
//!
//! A rejected command leaves the match exactly as it was.

use crate::phases::MatchPhase;
use crate::position::Position;
use crate::types::Mark;

/// Broad class of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchErrorKind {
    /// Position out of range or already taken.
    InvalidMove,
    /// Command issued in the wrong phase or out of turn.
    IllegalStateTransition,
    /// Session setup arguments that cannot form a match.
    InvalidSetup,
    /// The controller's own bookkeeping broke. Always a bug.
    InternalInvariantViolation,
}

/// Error that can occur when issuing a match command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// Position number outside 1-9.
    #[display("Position {} is outside 1-9", _0)]
    OutOfRange(u8),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A move was offered for the side not to move.
    #[display("It's not {}'s turn", _0)]
    WrongMark(Mark),

    /// A move was submitted while the computer is to move.
    #[display("It's the computer's turn")]
    NotHumanTurn,

    /// Command not available in the current phase.
    #[display("Cannot {} while {}", command, phase)]
    IllegalState {
        /// The rejected command.
        command: &'static str,
        /// Phase the controller was in.
        phase: MatchPhase,
    },

    /// Both players asked for the same mark.
    #[display("Both players chose {}", _0)]
    DuplicateMark(Mark),

    /// An invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MatchError {
    /// Classifies the error.
    pub fn kind(&self) -> MatchErrorKind {
        match self {
            MatchError::OutOfRange(_) | MatchError::SquareOccupied(_) => {
                MatchErrorKind::InvalidMove
            }
            MatchError::WrongMark(_)
            | MatchError::NotHumanTurn
            | MatchError::IllegalState { .. } => MatchErrorKind::IllegalStateTransition,
            MatchError::DuplicateMark(_) => MatchErrorKind::InvalidSetup,
            MatchError::InvariantViolation(_) => MatchErrorKind::InternalInvariantViolation,
        }
    }
}

impl std::error::Error for MatchError {}
