//! Command-line interface for five_in_a_row.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Five in a row - gomoku in the terminal with move history
#[derive(Parser, Debug)]
#[command(name = "five_in_a_row")]
#[command(about = "Five-in-a-row on a 15x15 board with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "five_in_a_row.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a script of moves and jumps, then print the final position
    Replay {
        /// Script file; reads stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
