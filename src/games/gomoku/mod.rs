//! Five-in-a-row on a fixed 15x15 board.

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use history::History;
pub use position::Position;
pub use types::{BOARD_SIZE, Board, CELL_COUNT, LINE_LENGTH, Player, Square, Status};
