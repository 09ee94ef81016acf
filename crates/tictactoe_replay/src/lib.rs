//! Scripted replays for the tic-tac-toe rules engine.
//!
//! Loads a game from a TOML script and drives [`tictactoe_engine::GameEngine`]
//! the way an interactive front end would.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod replay;
mod script;

pub use replay::{Outcome, Rejection, Replay, ReplayReport};
pub use script::{GameScript, ScriptError, ScriptedMove};
