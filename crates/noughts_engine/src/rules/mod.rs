//! Outcome evaluation.
//!
//! Pure functions over a board snapshot. They never mutate the board and
//! are shared by the match controller and the search.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::phases::Outcome;
use crate::types::Board;

/// Returns the terminal outcome of `board`, or `None` while play continues.
///
/// A completed line takes precedence over a full board.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((mark, line)) = winning_line(board) {
        return Some(Outcome::Winner { mark, line });
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_evaluate_open_board() {
        let board: Board = "XO__X____".parse().unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXOOXXXO".parse().unwrap();
        assert_eq!(evaluate(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_last_cell_completing_line_is_win() {
        let board: Board = "OXOXOXXXX".parse().unwrap();
        assert!(is_full(&board));
        let outcome = evaluate(&board).unwrap();
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(outcome.line().map(|l| l.numbers()), Some([7, 8, 9]));
    }
}
