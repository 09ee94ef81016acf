//! Scripted games loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Marker, Placement, Position};
use tracing::{debug, info, instrument};

/// A scripted game: an ordered list of placements plus driver options.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameScript {
    /// Name shown in reports.
    #[serde(default = "default_name")]
    name: String,

    /// Switch the turn after every accepted placement.
    #[serde(default = "default_true")]
    switch_turns: bool,

    /// Stop once a win or a full board is observed.
    #[serde(default = "default_true")]
    stop_at_terminal: bool,

    /// Placements in the order they are attempted.
    #[serde(default)]
    moves: Vec<ScriptedMove>,
}

#[instrument]
fn default_name() -> String {
    "unnamed".to_string()
}

#[instrument]
fn default_true() -> bool {
    true
}

/// One scripted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedMove {
    /// Marker to place.
    pub marker: Marker,
    /// Zero-based row (may be off the board).
    pub row: i32,
    /// Zero-based column (may be off the board).
    pub col: i32,
}

impl ScriptedMove {
    /// Converts to an engine placement.
    pub fn placement(&self) -> Placement {
        Placement::new(self.marker, Position::new(self.row, self.col))
    }
}

impl GameScript {
    /// Creates a script with default options.
    #[instrument(skip(name, moves), fields(script_name = %name))]
    pub fn new(name: String, moves: Vec<ScriptedMove>) -> Self {
        Self {
            name,
            switch_turns: default_true(),
            stop_at_terminal: default_true(),
            moves,
        }
    }

    /// Sets whether the driver switches turns after accepted placements.
    pub fn with_switch_turns(mut self, switch_turns: bool) -> Self {
        self.switch_turns = switch_turns;
        self
    }

    /// Sets whether the driver stops at a win or full board.
    pub fn with_stop_at_terminal(mut self, stop_at_terminal: bool) -> Self {
        self.stop_at_terminal = stop_at_terminal;
        self
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(script_name = %script.name, moves = script.moves.len(), "Script parsed");
        Ok(script)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;

        let script = Self::from_toml_str(&content)?;
        info!(script_name = %script.name, "Script loaded successfully");
        Ok(script)
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
