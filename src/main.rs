//! Strictly Tic-Tac-Toe - CLI
//!
//! Terminal UI and headless replay over the time-travel game model.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use strictly_tictactoe::{Session, TuiConfig, tui};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, jump, json } => run_replay(&moves, jump, json),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Run the terminal UI, logging to the configured file.
fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = TuiConfig::load(config_path.as_deref())?;

    // Log to a file so the alternate screen stays clean
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run_tui(&config)
}

/// Apply moves headlessly and print the resulting view.
fn run_replay(moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(TuiConfig::default().log_filter()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    print!("{}", replay(moves, jump, json)?);
    Ok(())
}

/// Renders the view left after replaying `moves` and the optional jump.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn replay(moves: &[usize], jump: Option<usize>, json: bool) -> Result<String> {
    let view = Session::from_clicks(moves, jump).view();
    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        Ok(format!("{}\n", out))
    } else {
        Ok(view.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_ignores_bad_clicks_and_jump() {
        let text = replay(&[0, 0, 9, 4], Some(9), false).unwrap();
        let expected = "\
X|.|.
-+-+-
.|O|.
-+-+-
.|.|.

Next player: X
  1. Go to game start
  2. Go to move #1
> 3. Go to move #2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_replay_json() {
        let out = replay(&[4], None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["current_step"], 1);
        assert_eq!(value["status_line"], "Next player: O");
        assert_eq!(value["moves"].as_array().map(Vec::len), Some(2));
    }
}
