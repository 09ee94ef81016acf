//! The tic-tac-toe rules engine.

use super::action::Placement;
use super::contracts::LegalPlacement;
use super::error::PlaceError;
use super::types::{Board, Marker};
use super::{Position, rules};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// Tic-tac-toe game engine.
///
/// Owns the board and the marker whose turn it is. The two are independent:
/// placing a mark never switches the turn, and the engine has no game-over
/// state. Callers poll [`check_for_win`](Self::check_for_win) and
/// [`is_board_full`](Self::is_board_full) and stop issuing moves themselves.
///
/// Invariant: the current turn is always [`Marker::X`] or [`Marker::O`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    turn: Marker,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Marker::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker whose move is expected next.
    pub fn current_turn(&self) -> Marker {
        self.turn
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.turn))]
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
        trace!(to = %self.turn, "Turn switched");
    }

    /// Checks if every cell is occupied.
    #[instrument(skip(self))]
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Checks if any row, column or diagonal is held by a single marker.
    #[instrument(skip(self))]
    pub fn check_for_win(&self) -> bool {
        rules::has_winner(&self.board)
    }

    /// Returns the marker holding the first winning line (rows, columns,
    /// then diagonals), or `None` if nobody has won.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Marker> {
        rules::check_winner(&self.board)
    }

    /// Records `marker` at `position`.
    ///
    /// Does not switch the turn.
    ///
    /// # Errors
    ///
    /// Checked in this order, first failure wins:
    /// - [`PlaceError::OutOfTurn`] if `marker` is not the current turn
    /// - [`PlaceError::OutOfRange`] if either coordinate is outside `0..3`
    /// - [`PlaceError::AlreadyMarked`] if the cell is occupied
    ///
    /// The board is untouched on every error path.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, marker: Marker, position: Position) -> Result<(), PlaceError> {
        self.try_place(Placement::new(marker, position))
    }

    /// Same as [`place_mark`](Self::place_mark), taking a [`Placement`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_place(&mut self, placement: Placement) -> Result<(), PlaceError> {
        let index = LegalPlacement::check(&placement, self).inspect_err(|e| {
            debug!(error = %e, kind = %e.kind(), %placement, "Placement rejected");
        })?;
        self.board.set(index, placement.marker);
        debug!(%placement, "Mark placed");
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
