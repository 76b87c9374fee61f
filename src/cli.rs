//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Position;

/// Strictly Tic-Tac-Toe - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with an immutable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of moves without a UI and print the result
    Replay {
        /// Cells to play in order, comma-separated: indices (0-8) or labels ("center")
        #[arg(short, long, value_delimiter = ',', num_args = 1.., value_parser = parse_cell)]
        moves: Vec<usize>,

        /// Step to travel to after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses a cell as a raw index or a position label.
///
/// Numbers are passed through unchecked so out-of-range cells reach the
/// game and are rejected there like any other bad click.
fn parse_cell(s: &str) -> Result<usize, String> {
    s.trim().parse::<usize>().or_else(|_| {
        Position::from_label_or_number(s)
            .map(Position::to_index)
            .ok_or_else(|| format!("'{}' is neither a cell index nor a position label", s))
    })
}
