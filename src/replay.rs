//! Headless script runner.
//!
//! A script is a whitespace-separated list of commands:
//!
//! - `112` or `7,7` places the next mark (cell index or `row,col`)
//! - `@3` jumps to history entry 3
//!
//! Refused placements are absorbed exactly as the interactive board absorbs
//! them. Malformed tokens and jumps past the end of history are errors.

use crate::games::gomoku::{History, Position};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

/// One scripted input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Place the next mark.
    Place(Position),
    /// Show an earlier (or later) history entry.
    Jump(usize),
}

impl ScriptCommand {
    /// Parses a single token.
    pub fn parse(token: &str) -> Result<Self, ScriptError> {
        if let Some(target) = token.strip_prefix('@') {
            return target
                .parse()
                .map(ScriptCommand::Jump)
                .map_err(|_| ScriptError::new(format!("Invalid jump target: {}", token)));
        }
        Position::parse(token)
            .map(ScriptCommand::Place)
            .ok_or_else(|| ScriptError::new(format!("Invalid cell: {}", token)))
    }
}

/// Parses a whole script.
#[instrument(skip(script))]
pub fn parse_script(script: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    script
        .split_whitespace()
        .map(ScriptCommand::parse)
        .collect()
}

/// Applies commands to a fresh history.
#[instrument(skip_all, fields(commands = commands.len()))]
pub fn run_script(commands: &[ScriptCommand]) -> Result<History, ScriptError> {
    let mut history = History::new();
    for command in commands {
        match *command {
            ScriptCommand::Place(pos) => {
                if let Err(e) = history.play(pos) {
                    debug!(error = %e, "Ignoring refused placement");
                }
            }
            ScriptCommand::Jump(target) => history
                .jump(target)
                .map_err(|e| ScriptError::new(e.to_string()))?,
        }
    }
    Ok(history)
}

/// Final state of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Current snapshot, one string per row.
    pub board: Vec<String>,
    /// Status line.
    pub status: String,
    /// Index of the current snapshot.
    pub pointer: usize,
    /// Number of recorded snapshots.
    pub history_len: usize,
    /// Move list labels.
    pub moves: Vec<String>,
}

impl Report {
    /// Summarizes a history.
    pub fn from_history(history: &History) -> Self {
        Self {
            board: history
                .current()
                .display()
                .lines()
                .map(String::from)
                .collect(),
            status: history.status().to_string(),
            pointer: history.pointer(),
            history_len: history.len(),
            moves: history.descriptions(),
        }
    }

    /// Plain-text rendering: board, status, then the move list with the
    /// current entry marked.
    pub fn to_text(&self) -> String {
        let mut out = self.board.join("\n");
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        for (n, label) in self.moves.iter().enumerate() {
            let marker = if n == self.pointer { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, n, label));
        }
        out
    }
}

/// Script error with location tracking.
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
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
