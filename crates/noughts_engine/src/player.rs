//! Match participants.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Name given to a human player registered without one.
pub const DEFAULT_HUMAN_NAME: &str = "HUMAN";

/// Name given to a computer player registered without one.
pub const DEFAULT_COMPUTER_NAME: &str = "AI";

/// Who picks a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive through `submit_move`.
    Human,
    /// Moves are chosen by the minimax search.
    Computer,
}

/// A player in a session.
///
/// Name, mark and kind are fixed for the session; only the win counter
/// changes, and only through the match controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
    win_count: u32,
}

impl Player {
    /// Creates a player with no wins. A blank name falls back to a default.
    pub fn new(name: impl Into<String>, mark: Mark, kind: PlayerKind) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            match kind {
                PlayerKind::Human => DEFAULT_HUMAN_NAME.to_string(),
                PlayerKind::Computer => DEFAULT_COMPUTER_NAME.to_string(),
            }
        } else {
            name
        };

        Self {
            name,
            mark,
            kind,
            win_count: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Human or computer.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Whether the search plays for this player.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    /// Matches won this session.
    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    pub(crate) fn record_win(&mut self) {
        self.win_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_get_defaults() {
        assert_eq!(Player::new("", Mark::X, PlayerKind::Human).name(), "HUMAN");
        assert_eq!(Player::new("  ", Mark::O, PlayerKind::Computer).name(), "AI");
        assert_eq!(Player::new("Ada", Mark::O, PlayerKind::Human).name(), "Ada");
    }

    #[test]
    fn test_record_win() {
        let mut player = Player::new("Ada", Mark::X, PlayerKind::Human);
        assert_eq!(player.win_count(), 0);
        player.record_win();
        player.record_win();
        assert_eq!(player.win_count(), 2);
    }
}
