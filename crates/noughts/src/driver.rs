//! Headless session driver.
//!
//! Feeds a list of positions into a [`MatchController`] and writes every
//! event it returns as one JSON object per line.

use anyhow::{Context, Result};
use noughts_engine::{MatchController, MatchEvent, MatchPhase, MatchSetup, Stats};
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Totals for a driven session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Matches that reached a result.
    pub matches_finished: u32,
    /// Moves the controller refused.
    pub rejected_moves: u32,
    /// Final tallies.
    pub stats: Stats,
}

fn emit<W: Write>(out: &mut W, events: &[MatchEvent]) -> Result<()> {
    for event in events {
        serde_json::to_writer(&mut *out, event).context("Failed to encode event")?;
        writeln!(out).context("Failed to write event")?;
    }
    Ok(())
}

/// Starts a session and submits `moves` in order.
///
/// When a match finishes and moves remain, the next match starts. Refused
/// moves are logged and skipped.
#[instrument(skip(controller, out))]
pub fn play_session<R: Rng, W: Write>(
    controller: &mut MatchController<R>,
    setup: MatchSetup,
    moves: &[u8],
    out: &mut W,
) -> Result<SessionSummary> {
    let mut matches_finished = 0;
    let mut rejected_moves = 0;

    let events = controller
        .start_match(setup)
        .context("Failed to start session")?;
    emit(out, &events)?;
    if controller.phase() == MatchPhase::Finished {
        matches_finished += 1;
    }

    for &number in moves {
        if controller.phase() == MatchPhase::Finished {
            let events = controller
                .start_next_match()
                .context("Failed to start next match")?;
            emit(out, &events)?;
        }

        match controller.submit_move(number) {
            Ok(events) => {
                emit(out, &events)?;
                if controller.phase() == MatchPhase::Finished {
                    matches_finished += 1;
                }
            }
            Err(e) => {
                warn!(number, error = %e, "Move refused");
                rejected_moves += 1;
            }
        }
    }

    let summary = SessionSummary {
        matches_finished,
        rejected_moves,
        stats: controller.stats(),
    };
    info!(?summary, "Session complete");
    Ok(summary)
}
