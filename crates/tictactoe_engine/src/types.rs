//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_SIDE: i32 = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Content of a single cell, also used to name whose turn it is.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Unoccupied cell.
    #[default]
    #[strum(serialize = "Empty", to_string = ".")]
    Empty,
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Marker {
    /// Returns the other player's marker. `Empty` maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
            Marker::Empty => Marker::Empty,
        }
    }

    /// Checks if this is the empty marker.
    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Marker; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Marker::Empty; CELL_COUNT],
        }
    }

    /// Gets the marker at a position, or `None` if the position is off the board.
    pub fn get(&self, pos: Position) -> Option<Marker> {
        pos.index().map(|i| self.squares[i])
    }

    /// Checks if the cell at a position exists and is unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Marker::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Marker; CELL_COUNT] {
        &self.squares
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker holding the first complete line, if any.
    pub fn winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// Writes a marker into a cell by row-major index.
    ///
    /// Callers validate the index first; only the engine mutates boards.
    pub(crate) fn set(&mut self, index: usize, marker: Marker) {
        self.squares[index] = marker;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(BOARD_SIDE as usize).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let line = cells
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
