//! Command-line interface for replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replay - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply moves and jumps non-interactively and print the result
    Script {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Steps: m<cell> plays cell 0-8, j<index> jumps to a history entry
        #[arg(required = true)]
        steps: Vec<String>,
    },
}
