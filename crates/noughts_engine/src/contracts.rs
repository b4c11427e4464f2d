//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::action::Move;
use crate::error::MatchError;
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::round::Round;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MatchError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MatchError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MatchError> {
        if round.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MatchError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: The move's mark must be the side to move.
pub struct MarksTurn;

impl MarksTurn {
    /// Rejects moves for the side not to move.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MatchError> {
        if mov.mark == round.to_move() {
            Ok(())
        } else {
            Err(MatchError::WrongMark(mov.mark))
        }
    }
}

/// Composite precondition: the square is empty and it's the mark's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MatchError> {
        SquareIsEmpty::check(mov, round)?;
        MarksTurn::check(mov, round)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Square must be empty
/// - Must be the mark's turn
///
/// Postconditions:
/// - Exactly one move was added
/// - All round invariants hold
pub struct MoveContract;

impl Contract<Round, Move> for MoveContract {
    fn pre(round: &Round, action: &Move) -> Result<(), MatchError> {
        LegalMove::check(action, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), MatchError> {
        if after.move_count() != before.move_count() + 1 {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "Move count did not advance by one"
            );
            return Err(MatchError::InvariantViolation(
                "Postcondition failed: move count did not advance by one".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MatchError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
