//! Command-line interface for tictactoe_replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replay scripted tic-tac-toe games against the rules engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Replay scripted tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a script and print the result
    Play {
        /// Path to the TOML script
        script: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a script without playing it
    Check {
        /// Path to the TOML script
        script: PathBuf,
    },
}
