//! tictactoe_replay - scripted game runner

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_replay::{GameScript, Replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { script, json } => play(&script, json),
        Command::Check { script } => check(&script),
    }
}

/// Play a script and print the report
#[instrument(skip(path), fields(path = %path.display()))]
fn play(path: &Path, json: bool) -> Result<()> {
    let script = GameScript::from_file(path)?;
    let report = Replay::run(&script);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Validate a script
#[instrument(skip(path), fields(path = %path.display()))]
fn check(path: &Path) -> Result<()> {
    let script = GameScript::from_file(path)?;
    info!(moves = script.moves().len(), "Script is valid");
    println!("{}: {} moves", script.name(), script.moves().len());
    Ok(())
}
