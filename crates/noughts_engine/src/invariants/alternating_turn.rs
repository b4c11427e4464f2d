//! Alternating turn invariant: marks alternate, whoever went first.

use super::Invariant;
use crate::round::Round;

/// Invariant: Marks alternate in the history and the side to move is the
/// opponent of the last mover.
///
/// The first move may be either mark; the starting side is a coin flip.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match history.last() {
            Some(last) => round.to_move() == last.mark.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_empty_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&Round::new(Mark::O)));
    }

    #[test]
    fn test_o_first_sequence_holds() {
        let mut round = Round::new(Mark::O);
        for (mark, pos) in [
            (Mark::O, Position::Center),
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::BottomRight),
        ] {
            round.place(Move::new(mark, pos));
            round.pass_turn();
        }
        assert!(AlternatingTurnInvariant::holds(&round));
        assert_eq!(round.to_move(), Mark::X);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut round = Round::new(Mark::X);
        round.place(Move::new(Mark::X, Position::TopLeft));
        round.place(Move::new(Mark::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&round));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut round = Round::new(Mark::X);
        round.place(Move::new(Mark::X, Position::TopLeft));
        assert!(!AlternatingTurnInvariant::holds(&round));
    }
}
