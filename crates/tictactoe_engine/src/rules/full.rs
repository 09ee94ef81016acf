//! Full-board detection.

use super::super::{Board, Marker};
use tracing::instrument;

/// Checks if the board is full (all nine cells occupied).
///
/// This is the only end-of-game condition besides a win; there is no
/// separate draw analysis.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|m| *m != Marker::Empty)
}
