//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with a jump-back move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, default_value = "tictactoe_history.toml")]
    pub config: PathBuf,

    /// Show the (row, col) of each move in the history list
    #[arg(long, global = true)]
    pub show_coordinates: bool,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Replay a script of clicks and print the resulting game
    Play {
        /// Cells to click (index 0-8 or a label like `center`), and `@N` to jump to history step N
        #[arg(required = true, num_args = 1..)]
        script: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `play` prints the final game.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The full view as JSON
    Json,
}
