//! Board positions, numbered 1-9 in row-major order.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
///
/// Positions are addressed 1-9 at the command boundary and 0-8 when
/// indexing the backing array.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1).
    TopLeft,
    /// Top-center (2).
    TopCenter,
    /// Top-right (3).
    TopRight,
    /// Middle-left (4).
    MiddleLeft,
    /// Center (5).
    Center,
    /// Middle-right (6).
    MiddleRight,
    /// Bottom-left (7).
    BottomLeft,
    /// Bottom-center (8).
    BottomCenter,
    /// Bottom-right (9).
    BottomRight,
}

impl Position {
    /// All 9 positions in scan order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to its 1-based number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from its 1-based number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Self::from_index(usize::from(number - 1)),
            _ => None,
        }
    }

    /// Parse from a 1-based number or a label.
    ///
    /// Labels match case-insensitively, so `"center"` and `"top-left"` work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<u8>() {
            return Self::from_number(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}
