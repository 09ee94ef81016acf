//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker};
use tracing::instrument;

/// The eight winning lines as row-major indices: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the marker occupying the first complete line found, scanning
/// in [`LINES`] order, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| {
        let m = squares[a];
        (m != Marker::Empty && m == squares[b] && m == squares[c]).then_some(m)
    })
}

/// Checks if any line is complete.
pub fn has_winner(board: &Board) -> bool {
    check_winner(board).is_some()
}
