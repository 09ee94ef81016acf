//! Placement errors.

use super::{Marker, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Reason a placement was rejected.
///
/// Exactly one variant applies to any rejected placement; the checks run
/// in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The marker is not the one whose turn it is.
    #[display("It is not your turn!")]
    OutOfTurn {
        /// Marker the engine expected.
        expected: Marker,
        /// Marker that was offered.
        attempted: Marker,
    },

    /// A coordinate lies outside `0..3`.
    #[display("Range is not in board!")]
    OutOfRange {
        /// The offending position.
        position: Position,
    },

    /// The target cell is already occupied.
    #[display("Already marked!")]
    AlreadyMarked {
        /// The occupied position.
        position: Position,
    },
}

impl PlaceError {
    /// Returns the fieldless kind of this error.
    pub fn kind(&self) -> PlaceErrorKind {
        match self {
            PlaceError::OutOfTurn { .. } => PlaceErrorKind::OutOfTurn,
            PlaceError::OutOfRange { .. } => PlaceErrorKind::OutOfRange,
            PlaceError::AlreadyMarked { .. } => PlaceErrorKind::AlreadyMarked,
        }
    }
}

/// Fieldless tag for [`PlaceError`], convenient for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PlaceErrorKind {
    /// See [`PlaceError::OutOfTurn`].
    OutOfTurn,
    /// See [`PlaceError::OutOfRange`].
    OutOfRange,
    /// See [`PlaceError::AlreadyMarked`].
    AlreadyMarked,
}
