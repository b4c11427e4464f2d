//! Tests for win and draw evaluation.

use noughts_engine::rules::{check_winner, evaluate, is_draw, is_full, winning_line};
use noughts_engine::{Board, Mark, Outcome, Position, Square, WINNING_LINES};
use strum::IntoEnumIterator;

/// Every way to fill `cells` with empty, `mark` or its opponent.
fn fillings(base: Board, cells: &[Position], mark: Mark) -> Vec<Board> {
    let options = [
        Square::Empty,
        Square::Occupied(mark),
        Square::Occupied(mark.opponent()),
    ];
    let mut boards = vec![base];
    for pos in cells {
        boards = boards
            .into_iter()
            .flat_map(|board| {
                options.iter().map(move |sq| {
                    let mut next = board;
                    next.set(*pos, *sq);
                    next
                })
            })
            .collect();
    }
    boards
}

fn opponent_has_line(board: &Board, mark: Mark) -> bool {
    WINNING_LINES.iter().any(|line| {
        line.positions()
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark.opponent()))
    })
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in WINNING_LINES {
        for mark in Mark::iter() {
            let mut base = Board::new();
            for pos in line.positions() {
                base.set(pos, Square::Occupied(mark));
            }
            let rest: Vec<_> = Position::ALL
                .into_iter()
                .filter(|pos| !line.contains(*pos))
                .collect();

            for board in fillings(base, &rest, mark) {
                if opponent_has_line(&board, mark) {
                    continue;
                }
                assert_eq!(
                    check_winner(&board),
                    Some(mark),
                    "line {} for {} on\n{}",
                    line,
                    mark,
                    board.display()
                );
                assert!(!is_draw(&board));
            }
        }
    }
}

#[test]
fn test_draw_pattern() {
    // X O X / O X O / O X O
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert!(is_full(&board));
    assert!(is_draw(&board));
    assert_eq!(check_winner(&board), None);
    assert_eq!(evaluate(&board), Some(Outcome::Draw));
}

#[test]
fn test_top_row_scenario() {
    let board: Board = "XXX______".parse().unwrap();
    let (mark, line) = winning_line(&board).unwrap();
    assert_eq!(mark, Mark::X);
    assert_eq!(line.numbers(), [1, 2, 3]);
}

#[test]
fn test_partial_board_is_neither() {
    let board: Board = "XO_XO____".parse().unwrap();
    assert_eq!(evaluate(&board), None);
    assert!(!is_full(&board));
    assert!(!is_draw(&board));
}
