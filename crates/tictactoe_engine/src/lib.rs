//! Tic-tac-toe rules engine.
//!
//! A small deterministic state machine: a 3x3 board of [`Marker`]s, the
//! marker whose turn it is, move validation and win detection.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Marker, PlaceError, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.place_mark(Marker::X, Position::new(1, 1))?;
//! engine.switch_turn();
//! assert_eq!(engine.current_turn(), Marker::O);
//! assert!(!engine.check_for_win());
//! # Ok::<(), PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use action::Placement;
pub use contracts::{CellIsEmpty, LegalPlacement, PlayersTurn, WithinBoard};
pub use engine::GameEngine;
pub use error::{PlaceError, PlaceErrorKind};
pub use position::Position;
pub use types::{BOARD_SIDE, Board, CELL_COUNT, Marker};
