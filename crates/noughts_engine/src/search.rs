//! Exhaustive minimax search for the computer player.
//!
//! The tree is at most 9! leaves deep, so the search runs to completion on
//! every call with no pruning and no transposition table. Scores do not
//! depend on depth: any forced win is as good as any other.

use crate::position::Position;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// Score of a board the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a board the opponent has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a full board with no line.
pub const DRAW_SCORE: i32 = 0;

fn terminal_score(board: &Board, computer: Mark) -> Option<i32> {
    if let Some(winner) = check_winner(board) {
        return Some(if winner == computer {
            WIN_SCORE
        } else {
            LOSS_SCORE
        });
    }
    if is_full(board) {
        return Some(DRAW_SCORE);
    }
    None
}

/// Value of `board` for `computer` with `to_move` about to play.
///
/// Places trial marks on `board` and clears each one before returning, so
/// the board is unchanged afterwards.
fn minimax(board: &mut Board, to_move: Mark, computer: Mark) -> i32 {
    if let Some(score) = terminal_score(board, computer) {
        return score;
    }

    let maximizing = to_move == computer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent(), computer);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every empty cell for `computer`, in scan order.
///
/// Each score assumes both sides play perfectly after the computer marks
/// that cell. The search runs on a private copy of `board`.
pub fn score_moves(board: &Board, computer: Mark) -> Vec<(Position, i32)> {
    let mut work = board.snapshot();

    board
        .empty_positions()
        .map(|pos| {
            work.set(pos, Square::Occupied(computer));
            let score = minimax(&mut work, computer.opponent(), computer);
            work.set(pos, Square::Empty);
            (pos, score)
        })
        .collect()
}

/// Value of the position for `computer` when `to_move` plays next.
///
/// Terminal boards return their score directly.
pub fn evaluate(board: &Board, to_move: Mark, computer: Mark) -> i32 {
    let mut work = board.snapshot();
    minimax(&mut work, to_move, computer)
}

/// Cells where `mark` would complete a line on its next move.
fn completing_cells(board: &Board, mark: Mark) -> Vec<Position> {
    let mut work = board.snapshot();
    board
        .empty_positions()
        .filter(|&pos| {
            work.set(pos, Square::Occupied(mark));
            let wins = check_winner(&work) == Some(mark);
            work.set(pos, Square::Empty);
            wins
        })
        .collect()
}

/// Preference among equally scored moves: completing a line first, then
/// occupying the only cell the opponent could complete next.
fn tie_rank(pos: Position, wins: &[Position], threats: &[Position]) -> u8 {
    if wins.contains(&pos) {
        2
    } else if !threats.is_empty() && threats.iter().all(|&cell| cell == pos) {
        1
    } else {
        0
    }
}

/// Picks the computer's move.
///
/// Keeps the greatest score. Among equal scores a move that wins at once is
/// preferred, then one that blocks every immediate threat, then the first
/// in scan order. Returns `None` when the board has no empty cell.
#[instrument(skip(board), fields(empty = 9 - board.occupied_count()))]
pub fn best_move(board: &Board, computer: Mark) -> Option<Position> {
    let wins = completing_cells(board, computer);
    let threats = completing_cells(board, computer.opponent());

    let mut best: Option<(Position, (i32, u8))> = None;
    for (pos, score) in score_moves(board, computer) {
        let key = (score, tie_rank(pos, &wins, &threats));
        match best {
            Some((_, best_key)) if key <= best_key => {}
            _ => best = Some((pos, key)),
        }
    }

    if let Some((pos, (score, rank))) = best {
        debug!(position = pos.number(), score, rank, "Search chose move");
    }

    best.map(|(pos, _)| pos)
}
