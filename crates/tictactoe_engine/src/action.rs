//! Placement: one attempted move.

use super::{Marker, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player's intent to put `marker` at `position`.
///
/// Placements are plain values; the engine decides whether they are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// The marker being placed.
    pub marker: Marker,
    /// Where the marker goes.
    pub position: Position,
}

impl Placement {
    /// Returns the marker being placed.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the target position.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position)
    }
}
