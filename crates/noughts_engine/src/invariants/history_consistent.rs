//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::round::Round;

/// Invariant: Move count equals the number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        round.move_count() == round.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
