//! Five in a row - gomoku on a 15x15 board with move history
//!
//! Two players alternate placing X and O; the first to fill five squares in
//! a row, column or diagonal wins. Every position reached is kept, so play
//! can be rewound to any earlier move and continued from there.
//!
//! # Architecture
//!
//! - **Games**: board snapshots, win detection and the [`History`] that owns
//!   game state
//! - **Replay**: headless script runner
//! - **Settings**: display and logging configuration
//! - **TUI**: interactive terminal front-end
//!
//! # Example
//!
//! ```
//! use five_in_a_row::{History, Player, Status};
//!
//! let mut history = History::new();
//! history.play_index(112)?;
//! assert_eq!(history.status(), Status::NextPlayer(Player::O));
//!
//! history.jump(0)?;
//! assert_eq!(history.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod replay;
mod settings;
mod tui;

// Crate-level exports - Game types (five-in-a-row)
pub use games::gomoku::{
    BOARD_SIZE, Board, CELL_COUNT, History, JumpError, LINE_LENGTH, Move, MoveError, Player,
    Position, Square, Status,
};

// Crate-level exports - Rules and invariants
pub use games::gomoku::invariants::{
    AlternatingTurnInvariant, GomokuInvariants, Invariant, InvariantSet, InvariantViolation,
    RootedHistoryInvariant, SingleStepInvariant,
};
pub use games::gomoku::rules::{Line, check_winner, lines, winning_line};

// Crate-level exports - Replay
pub use replay::{Report, ScriptCommand, ScriptError, parse_script, run_script};

// Crate-level exports - Settings
pub use settings::{ConfigError, Palette, Settings};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, draw, move_cursor, run_tui};
