//! Noughts engine - tic-tac-toe matches with a perfect computer opponent
//!
//! This library holds the authoritative game state and nothing else: no
//! rendering, no input handling. A presentation layer sends commands to a
//! [`MatchController`] and renders the [`MatchEvent`]s it returns.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and the eight winning lines
//! - **Rules**: pure win/draw evaluation of a board snapshot
//! - **Search**: exhaustive minimax choosing the computer's move
//! - **Controller**: turn order, computer replies, win and tie tallies
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Mark, MatchController, MatchPhase, MatchSetup};
//!
//! let mut controller = MatchController::new();
//! controller
//!     .start_match(MatchSetup::new("Ada", Mark::X, "", true))
//!     .expect("idle controller accepts a new session");
//! assert_eq!(controller.phase(), MatchPhase::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod error;
mod events;
mod invariants;
mod lines;
mod phases;
mod player;
mod position;
mod round;
pub mod rules;
pub mod search;
mod types;

// Crate-level exports - Board and domain types
pub use lines::{WINNING_LINES, WinningLine};
pub use position::Position;
pub use types::{Board, BoardParseError, Mark, Square};

// Crate-level exports - Players
pub use player::{DEFAULT_COMPUTER_NAME, DEFAULT_HUMAN_NAME, Player, PlayerKind};

// Crate-level exports - Match control
pub use action::Move;
pub use controller::{MatchController, MatchSetup};
pub use error::{MatchError, MatchErrorKind};
pub use events::{MatchEvent, Stats};
pub use phases::{MatchPhase, Outcome};
pub use round::Round;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MarksTurn, MoveContract, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, RoundInvariants,
};
