//! State of the match being played.

use crate::action::Move;
use crate::types::{Board, Mark, Square};

/// Board, move history and side to move for one match.
///
/// Only the match controller mutates a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
}

impl Round {
    /// Empty round with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: first,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Clears the board and history.
    pub(crate) fn reset(&mut self, first: Mark) {
        self.board.reset();
        self.history.clear();
        self.to_move = first;
    }

    /// Writes the move (unchecked - contracts run first).
    pub(crate) fn place(&mut self, action: Move) {
        self.board.set(action.position, Square::Occupied(action.mark));
        self.history.push(action);
    }

    pub(crate) fn pass_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
