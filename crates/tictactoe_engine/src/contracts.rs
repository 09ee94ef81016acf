//! Preconditions for placing a mark.
//!
//! Each check is a unit struct so it can be exercised on its own; the
//! engine only ever calls [`LegalPlacement`], which composes them in a
//! fixed order.

use super::action::Placement;
use super::engine::GameEngine;
use super::error::PlaceError;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Individual preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the placement's marker must be the engine's current turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`PlaceError::OutOfTurn`] when the marker is not on turn.
    #[instrument(skip(engine))]
    pub fn check(placement: &Placement, engine: &GameEngine) -> Result<(), PlaceError> {
        let expected = engine.current_turn();
        if placement.marker != expected {
            Err(PlaceError::OutOfTurn {
                expected,
                attempted: placement.marker,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates must lie in `0..3`.
pub struct WithinBoard;

impl WithinBoard {
    /// Returns the row-major index of the target cell.
    #[instrument]
    pub fn check(placement: &Placement) -> Result<usize, PlaceError> {
        placement.position.index().ok_or(PlaceError::OutOfRange {
            position: placement.position,
        })
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`PlaceError::AlreadyMarked`] when the cell is occupied.
    ///
    /// Off-board targets are reported as out of range.
    #[instrument(skip(engine))]
    pub fn check(placement: &Placement, engine: &GameEngine) -> Result<(), PlaceError> {
        match engine.board().get(placement.position) {
            None => Err(PlaceError::OutOfRange {
                position: placement.position,
            }),
            Some(m) if !m.is_empty() => Err(PlaceError::AlreadyMarked {
                position: placement.position,
            }),
            Some(_) => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite
// ─────────────────────────────────────────────────────────────

/// All preconditions, in order: turn, range, occupancy.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates a placement and returns the index of the target cell.
    #[instrument(skip(engine))]
    pub fn check(placement: &Placement, engine: &GameEngine) -> Result<usize, PlaceError> {
        PlayersTurn::check(placement, engine)?;
        let index = WithinBoard::check(placement)?;
        CellIsEmpty::check(placement, engine)?;
        Ok(index)
    }
}
