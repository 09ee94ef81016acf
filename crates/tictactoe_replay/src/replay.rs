//! Drives a [`GameEngine`] through a [`GameScript`].
//!
//! The driver plays the role of the presentation layer: it reads the
//! current turn, places marks, switches turns on success and polls the
//! terminal queries after every accepted move.

use crate::script::GameScript;
use derive_getters::Getters;
use serde::Serialize;
use tictactoe_engine::{Board, GameEngine, Marker, PlaceErrorKind, Placement};
use tracing::{debug, info, instrument, warn};

/// How a replayed game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// A line was completed by this marker.
    Winner(Marker),
    /// All cells are occupied and no line is complete.
    BoardFull,
    /// The script ran out before the game ended.
    Unfinished,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(marker) => write!(f, "Player {} wins", marker),
            Outcome::BoardFull => write!(f, "Board full"),
            Outcome::Unfinished => write!(f, "Unfinished"),
        }
    }
}

/// A scripted placement the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based index of the move in the script.
    pub index: usize,
    /// The refused placement.
    pub placement: Placement,
    /// Why it was refused.
    pub kind: PlaceErrorKind,
    /// Human-readable reason.
    pub message: String,
}

/// Result of replaying one script.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct ReplayReport {
    /// Script name.
    name: String,
    /// Number of placements the engine accepted.
    applied: usize,
    /// Placements the engine refused, in script order.
    rejected: Vec<Rejection>,
    /// Placements never attempted because the game had ended.
    skipped: usize,
    /// How the game ended.
    outcome: Outcome,
    /// Marker on turn when the replay stopped.
    turn: Marker,
    /// Final board.
    board: Board,
}

/// Replays scripts against a fresh engine.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    engine: GameEngine,
}

impl Replay {
    /// Creates a driver around a fresh engine.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine in its current state.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Replays a script on a new engine and reports the result.
    #[instrument(skip(script), fields(script_name = %script.name()))]
    pub fn run(script: &GameScript) -> ReplayReport {
        let mut replay = Self::new();
        replay.play(script)
    }

    /// Plays a script on this driver's engine.
    #[instrument(skip(self, script), fields(script_name = %script.name()))]
    pub fn play(&mut self, script: &GameScript) -> ReplayReport {
        let mut applied = 0;
        let mut rejected = Vec::new();
        let mut skipped = 0;

        for (index, scripted) in script.moves().iter().enumerate() {
            let placement = scripted.placement();
            debug!(index, %placement, turn = %self.engine.current_turn(), "Attempting placement");

            if let Err(e) = self.engine.try_place(placement) {
                warn!(index, %placement, error = %e, "Placement rejected");
                rejected.push(Rejection {
                    index,
                    placement,
                    kind: e.kind(),
                    message: e.to_string(),
                });
                continue;
            }

            applied += 1;
            if *script.switch_turns() {
                self.engine.switch_turn();
            }

            if self.is_terminal() && *script.stop_at_terminal() {
                skipped = script.moves().len() - index - 1;
                break;
            }
        }

        let outcome = self.outcome();
        info!(%outcome, applied, rejected = rejected.len(), skipped, "Replay finished");

        ReplayReport {
            name: script.name().clone(),
            applied,
            rejected,
            skipped,
            outcome,
            turn: self.engine.current_turn(),
            board: self.engine.board().clone(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.engine.check_for_win() || self.engine.is_board_full()
    }

    fn outcome(&self) -> Outcome {
        if let Some(marker) = self.engine.winner() {
            Outcome::Winner(marker)
        } else if self.engine.is_board_full() {
            Outcome::BoardFull
        } else {
            Outcome::Unfinished
        }
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.board)?;
        for r in &self.rejected {
            writeln!(f, "  move {} ({}): {}", r.index, r.placement, r.message)?;
        }
        write!(
            f,
            "{} ({} applied, {} rejected, {} skipped)",
            self.outcome,
            self.applied,
            self.rejected.len(),
            self.skipped
        )
    }
}
