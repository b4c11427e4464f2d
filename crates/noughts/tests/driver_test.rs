//! Tests for the headless session driver.

use noughts::play_session;
use noughts_engine::{Mark, MatchController, MatchSetup};
use rand::rngs::mock::StepRng;
use serde_json::Value;

fn lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_human_session_streams_events() {
    let mut controller = MatchController::with_rng(StepRng::new(0, 0));
    let setup = MatchSetup::new("Ada", Mark::X, "Grace", false);
    let mut out = Vec::new();

    let summary = play_session(&mut controller, setup, &[1, 4, 2, 5, 3], &mut out).unwrap();

    assert_eq!(summary.matches_finished, 1);
    assert_eq!(summary.rejected_moves, 0);
    assert_eq!(summary.stats.wins_x, 1);

    let events = lines(&out);
    assert_eq!(events[0]["event"], "turn_changed");
    assert_eq!(events[0]["name"], "Ada");
    let finished = events
        .iter()
        .find(|e| e["event"] == "match_finished")
        .expect("match finished event");
    assert_eq!(finished["is_tie"], false);
    assert_eq!(finished["winner_name"], "Ada");
    assert_eq!(events.last().unwrap()["event"], "stats_updated");
}

#[test]
fn test_refused_moves_are_counted() {
    let mut controller = MatchController::with_rng(StepRng::new(0, 0));
    let setup = MatchSetup::new("Ada", Mark::X, "Grace", false);
    let mut out = Vec::new();

    let summary = play_session(&mut controller, setup, &[5, 5, 0, 1], &mut out).unwrap();
    assert_eq!(summary.rejected_moves, 2);
    assert_eq!(controller.move_count(), 2);
}

#[test]
fn test_matches_chain_after_finish() {
    let mut controller = MatchController::with_rng(StepRng::new(0, 0));
    let setup = MatchSetup::new("Ada", Mark::X, "Grace", false);
    let mut out = Vec::new();

    let moves = [1, 4, 2, 5, 3, 7, 4, 8, 5, 9];
    let summary = play_session(&mut controller, setup, &moves, &mut out).unwrap();

    assert_eq!(summary.matches_finished, 2);
    assert_eq!(summary.stats.wins_x, 2);
}

#[test]
fn test_computer_session_never_lost() {
    let mut controller = MatchController::with_rng(StepRng::new(u64::MAX, 0));
    let setup = MatchSetup::new("Ada", Mark::X, "", true);
    let mut out = Vec::new();

    let summary =
        play_session(&mut controller, setup, &[1, 2, 3, 4, 5, 6, 7, 8, 9], &mut out).unwrap();

    assert_eq!(summary.stats.wins_x, 0);
    assert!(summary.matches_finished >= 1);
}
