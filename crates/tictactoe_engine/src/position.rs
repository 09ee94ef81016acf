//! Board coordinates.

use super::types::{BOARD_SIDE, CELL_COUNT};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate.
///
/// Positions are not validated on construction; negative or oversized
/// coordinates are representable and rejected by the engine at use time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Returns the row.
    pub fn row(self) -> i32 {
        self.row
    }

    /// Returns the column.
    pub fn col(self) -> i32 {
        self.col
    }

    /// Checks that both coordinates satisfy `0 <= c < 3`.
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIDE).contains(&self.row) && (0..BOARD_SIDE).contains(&self.col)
    }

    /// Converts to a row-major board index (0-8), or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| (self.row * BOARD_SIDE + self.col) as usize)
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let side = BOARD_SIDE as usize;
        Some(Self::new((index / side) as i32, (index % side) as i32))
    }

    /// Iterates over every on-board position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
