//! Match controller: turn order, computer moves and session tallies.
//!
//! The controller is an explicit object owned by the caller; nothing here
//! is global. Every command runs to completion synchronously, including any
//! computer moves it triggers, and returns the events it produced. A command
//! that returns `Err` has not changed any state.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::MatchError;
use crate::events::{MatchEvent, Stats};
use crate::phases::{MatchPhase, Outcome};
use crate::player::{Player, PlayerKind};
use crate::position::Position;
use crate::round::Round;
use crate::types::{Board, Mark};
use crate::{rules, search};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Arguments for starting a session.
///
/// Player 1 is always human; player 2 may be played by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    /// Player 1 name; blank means the default human name.
    pub player1_name: String,
    /// Player 1 mark.
    pub player1_mark: Mark,
    /// Player 2 name; blank means a default name.
    pub player2_name: String,
    /// Player 2 mark. Must differ from player 1's.
    pub player2_mark: Mark,
    /// Whether the search plays for player 2.
    pub player2_computer: bool,
}

impl MatchSetup {
    /// Human player 1 against player 2 with the opposite mark.
    pub fn new(
        player1_name: impl Into<String>,
        player1_mark: Mark,
        player2_name: impl Into<String>,
        player2_computer: bool,
    ) -> Self {
        Self {
            player1_name: player1_name.into(),
            player1_mark,
            player2_name: player2_name.into(),
            player2_mark: player1_mark.opponent(),
            player2_computer,
        }
    }
}

/// Drives matches between two players.
///
/// `R` supplies the fair coin that picks who opens each match.
#[derive(Debug)]
pub struct MatchController<R = StdRng> {
    phase: MatchPhase,
    players: Option<[Player; 2]>,
    active: usize,
    round: Round,
    match_count: u32,
    tie_count: u32,
    outcome: Option<Outcome>,
    rng: R,
}

impl MatchController<StdRng> {
    /// Creates an idle controller with an entropy-seeded coin.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for MatchController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MatchController<R> {
    /// Creates an idle controller flipping its coin with `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            phase: MatchPhase::Idle,
            players: None,
            active: 0,
            round: Round::default(),
            match_count: 0,
            tie_count: 0,
            outcome: None,
            rng,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Live board. Empty while idle.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Moves of the current (or just finished) match.
    pub fn history(&self) -> &[Move] {
        self.round.history()
    }

    /// Moves applied in the current match.
    pub fn move_count(&self) -> usize {
        self.round.move_count()
    }

    /// Matches started this session, counting the current one.
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// Drawn matches this session.
    pub fn tie_count(&self) -> u32 {
        self.tie_count
    }

    /// Both players, once a session has started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The player to move while a match is in progress.
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            MatchPhase::InProgress => self.players.as_ref().map(|p| &p[self.active]),
            MatchPhase::Idle | MatchPhase::Finished => None,
        }
    }

    /// Outcome of the last match while finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Win counts per mark and tie count.
    pub fn stats(&self) -> Stats {
        let wins = |mark: Mark| {
            self.players
                .iter()
                .flatten()
                .find(|p| p.mark() == mark)
                .map_or(0, Player::win_count)
        };

        Stats {
            wins_x: wins(Mark::X),
            wins_o: wins(Mark::O),
            ties: self.tie_count,
        }
    }

    /// Registers both players and starts the first match.
    ///
    /// Only valid while idle. If the coin picks the computer, its opening
    /// move is already on the board when this returns.
    #[instrument(skip(self))]
    pub fn start_match(&mut self, setup: MatchSetup) -> Result<Vec<MatchEvent>, MatchError> {
        self.require_phase("start a match", MatchPhase::Idle)?;

        if setup.player1_mark == setup.player2_mark {
            warn!(mark = %setup.player1_mark, "Rejected setup with duplicate marks");
            return Err(MatchError::DuplicateMark(setup.player1_mark));
        }

        let player2_kind = if setup.player2_computer {
            PlayerKind::Computer
        } else {
            PlayerKind::Human
        };
        let players = [
            Player::new(setup.player1_name, setup.player1_mark, PlayerKind::Human),
            Player::new(setup.player2_name, setup.player2_mark, player2_kind),
        ];
        info!(
            player1 = players[0].name(),
            player2 = players[1].name(),
            computer = setup.player2_computer,
            "Starting session"
        );
        self.players = Some(players);

        let mut events = Vec::new();
        self.begin_match(&mut events)?;
        Ok(events)
    }

    /// Plays `number` (1-9) for the human to move.
    ///
    /// If the computer is to move afterwards it replies before this returns.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, number: u8) -> Result<Vec<MatchEvent>, MatchError> {
        self.require_phase("submit a move", MatchPhase::InProgress)?;

        let position = Position::from_number(number).ok_or_else(|| {
            warn!(number, "Rejected out-of-range position");
            MatchError::OutOfRange(number)
        })?;

        if self.current_player()?.is_computer() {
            warn!(number, "Rejected move during computer's turn");
            return Err(MatchError::NotHumanTurn);
        }

        let mut events = Vec::new();
        self.apply(position, &mut events)?;
        self.play_computer_turns(&mut events)?;
        Ok(events)
    }

    /// Starts another match with the same players, keeping the tallies.
    ///
    /// Only valid once the previous match has finished.
    #[instrument(skip(self))]
    pub fn start_next_match(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        self.require_phase("start the next match", MatchPhase::Finished)?;

        let mut events = Vec::new();
        self.begin_match(&mut events)?;
        Ok(events)
    }

    /// Forgets both players and every tally, returning to idle.
    ///
    /// Valid in every phase.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) -> Vec<MatchEvent> {
        info!(phase = %self.phase, "Resetting session");
        self.phase = MatchPhase::Idle;
        self.players = None;
        self.active = 0;
        self.round.reset(Mark::X);
        self.match_count = 0;
        self.tie_count = 0;
        self.outcome = None;
        vec![MatchEvent::StatsUpdated(Stats::default())]
    }

    fn require_phase(&self, command: &'static str, expected: MatchPhase) -> Result<(), MatchError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(command, phase = %self.phase, "Rejected command in wrong phase");
            Err(MatchError::IllegalState {
                command,
                phase: self.phase,
            })
        }
    }

    fn current_player(&self) -> Result<&Player, MatchError> {
        self.players
            .as_ref()
            .map(|p| &p[self.active])
            .ok_or_else(|| {
                error!(phase = %self.phase, "No players registered");
                MatchError::InvariantViolation("no players registered".to_string())
            })
    }

    /// Flips the coin, clears the board and lets the computer open if it won
    /// the flip.
    fn begin_match(&mut self, events: &mut Vec<MatchEvent>) -> Result<(), MatchError> {
        self.active = if self.rng.gen_bool(0.5) { 0 } else { 1 };
        let opener = self.current_player()?;
        let (mark, name) = (opener.mark(), opener.name().to_string());

        self.round.reset(mark);
        self.outcome = None;
        self.phase = MatchPhase::InProgress;
        self.match_count += 1;
        info!(match_number = self.match_count, opener = %name, mark = %mark, "Match started");

        events.push(MatchEvent::TurnChanged { mark, name });
        self.play_computer_turns(events)
    }

    /// Applies computer moves until a human is to move or the match ends.
    fn play_computer_turns(&mut self, events: &mut Vec<MatchEvent>) -> Result<(), MatchError> {
        while self.phase == MatchPhase::InProgress {
            let player = self.current_player()?;
            if !player.is_computer() {
                break;
            }

            let mark = player.mark();
            let position = search::best_move(self.round.board(), mark).ok_or_else(|| {
                error!(mark = %mark, "Search called on a full board");
                MatchError::InvariantViolation("search found no empty cell".to_string())
            })?;
            self.apply(position, events)?;
        }
        Ok(())
    }

    /// Places the active player's mark and settles the consequences.
    fn apply(&mut self, position: Position, events: &mut Vec<MatchEvent>) -> Result<(), MatchError> {
        let mark = self.current_player()?.mark();
        let action = Move::new(mark, position);

        MoveContract::pre(&self.round, &action).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;

        #[cfg(debug_assertions)]
        let before = self.round.clone();

        self.round.place(action);
        debug!(%action, move_count = self.round.move_count(), "Move applied");
        events.push(MatchEvent::CellMarked { position, mark });

        if let Some(outcome) = rules::evaluate(self.round.board()) {
            self.finish(outcome, events);
            return Ok(());
        }

        self.round.pass_turn();
        self.active = 1 - self.active;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.round).inspect_err(|e| {
            error!(error = %e, "Move postcondition failed");
        })?;

        let next = self.current_player()?;
        events.push(MatchEvent::TurnChanged {
            mark: next.mark(),
            name: next.name().to_string(),
        });
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<MatchEvent>) {
        let mut winner_name = None;
        match outcome {
            Outcome::Winner { mark, .. } => {
                if let Some(winner) = self
                    .players
                    .iter_mut()
                    .flatten()
                    .find(|p| p.mark() == mark)
                {
                    winner.record_win();
                    winner_name = Some(winner.name().to_string());
                }
            }
            Outcome::Draw => self.tie_count += 1,
        }

        self.phase = MatchPhase::Finished;
        self.outcome = Some(outcome);
        info!(%outcome, moves = self.round.move_count(), "Match finished");

        events.push(MatchEvent::MatchFinished {
            is_tie: outcome.is_draw(),
            winning_line: outcome.line(),
            winner_name,
            winner_mark: outcome.winner(),
        });
        events.push(MatchEvent::StatsUpdated(self.stats()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    /// Coin that always lands for player 1.
    fn player1_opens() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Coin that always lands for player 2.
    fn player2_opens() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn humans() -> MatchSetup {
        MatchSetup::new("Ada", Mark::X, "Grace", false)
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = MatchController::new();
        assert_eq!(controller.phase(), MatchPhase::Idle);
        assert!(controller.players().is_none());
        assert_eq!(controller.board(), &Board::new());
        assert_eq!(controller.stats(), Stats::default());
    }

    #[test]
    fn test_coin_picks_opener() {
        let mut controller = MatchController::with_rng(player1_opens());
        controller.start_match(humans()).unwrap();
        assert_eq!(controller.active_player().unwrap().name(), "Ada");

        let mut controller = MatchController::with_rng(player2_opens());
        controller.start_match(humans()).unwrap();
        assert_eq!(controller.active_player().unwrap().name(), "Grace");
    }

    #[test]
    fn test_start_emits_turn_changed() {
        let mut controller = MatchController::with_rng(player1_opens());
        let events = controller.start_match(humans()).unwrap();
        assert_eq!(
            events,
            vec![MatchEvent::TurnChanged {
                mark: Mark::X,
                name: "Ada".to_string()
            }]
        );
    }

    #[test]
    fn test_duplicate_marks_rejected() {
        let mut controller = MatchController::with_rng(player1_opens());
        let mut setup = humans();
        setup.player2_mark = Mark::X;
        assert_eq!(
            controller.start_match(setup),
            Err(MatchError::DuplicateMark(Mark::X))
        );
        assert_eq!(controller.phase(), MatchPhase::Idle);
        assert!(controller.players().is_none());
    }

    #[test]
    fn test_computer_opens_when_coin_says_so() {
        let mut controller = MatchController::with_rng(player2_opens());
        let events = controller
            .start_match(MatchSetup::new("Ada", Mark::X, "", true))
            .unwrap();

        assert_eq!(controller.move_count(), 1);
        assert_eq!(controller.board().count(Mark::O), 1);
        assert_eq!(controller.active_player().unwrap().name(), "Ada");
        assert_eq!(controller.players().unwrap()[1].name(), "AI");
        assert!(matches!(events[1], MatchEvent::CellMarked { mark: Mark::O, .. }));
    }

    #[test]
    fn test_occupied_square_is_a_no_op() {
        let mut controller = MatchController::with_rng(player1_opens());
        controller.start_match(humans()).unwrap();
        controller.submit_move(5).unwrap();

        let board = *controller.board();
        assert_eq!(
            controller.submit_move(5),
            Err(MatchError::SquareOccupied(Position::Center))
        );
        assert_eq!(controller.board(), &board);
        assert_eq!(controller.move_count(), 1);
        assert_eq!(controller.active_player().unwrap().name(), "Grace");
    }
}
