//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::round::Round;
use crate::types::{Board, Square};

/// Invariant: Board squares are never overwritten.
///
/// Verified by replaying the move history onto an empty board and
/// comparing with the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<Round> for MonotonicBoardInvariant {
    fn holds(round: &Round) -> bool {
        let mut reconstructed = Board::new();

        for mov in round.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.mark));
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_replayed_history_holds() {
        let mut round = Round::new(Mark::X);
        round.place(Move::new(Mark::X, Position::Center));
        round.place(Move::new(Mark::O, Position::TopLeft));
        assert!(MonotonicBoardInvariant::holds(&round));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut round = Round::new(Mark::X);
        round.place(Move::new(Mark::X, Position::Center));
        round.place(Move::new(Mark::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&round));
    }
}
