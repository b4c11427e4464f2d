//! Win detection logic.

use crate::lines::{WINNING_LINES, WinningLine};
use crate::types::{Board, Mark, Square};

/// Returns the first completed line in scan order with its mark.
pub fn winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((mark, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
