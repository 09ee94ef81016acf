//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine and the board
//! delegate to these so the rules can be tested without turn state.

pub mod full;
pub mod win;

pub use full::is_full;
pub use win::{LINES, check_winner, has_winner};
