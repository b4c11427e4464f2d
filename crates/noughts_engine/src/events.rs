//! Notifications emitted for the presentation layer.

use crate::lines::WinningLine;
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Session tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    /// Matches won by the X player.
    pub wins_x: u32,
    /// Matches won by the O player.
    pub wins_o: u32,
    /// Drawn matches.
    pub ties: u32,
}

/// Something the presentation layer should render.
///
/// Commands return these in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A new side is to move.
    TurnChanged {
        /// Mark to move.
        mark: Mark,
        /// Name of the player to move.
        name: String,
    },

    /// A cell received a mark, from either a human or the computer.
    CellMarked {
        /// The marked cell.
        position: Position,
        /// The mark placed.
        mark: Mark,
    },

    /// The match reached a terminal board.
    MatchFinished {
        /// True for a draw.
        is_tie: bool,
        /// Completed line, absent on a draw.
        winning_line: Option<WinningLine>,
        /// Winner's name, absent on a draw.
        winner_name: Option<String>,
        /// Winner's mark, absent on a draw.
        winner_mark: Option<Mark>,
    },

    /// Win and tie counters changed.
    StatsUpdated(Stats),
}
