//! Board coordinates for five-in-a-row.

use super::types::{BOARD_SIZE, CELL_COUNT};
use tracing::instrument;

/// A cell on the 15x15 board.
///
/// A `Position` is always in bounds; the constructors return `None`
/// for coordinates off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from row and column (both 0-14).
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Creates position from board index (0-224).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// Converts position to board index (`row * 15 + col`).
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// The middle of the board.
    pub fn center() -> Self {
        Self {
            row: BOARD_SIZE / 2,
            col: BOARD_SIZE / 2,
        }
    }

    /// Moves by the given deltas, or `None` if that leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// Parses either a cell index (`112`) or a `row,col` pair (`7,7`).
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.split_once(',') {
            Some((row, col)) => {
                let row = row.trim().parse().ok()?;
                let col = col.trim().parse().ok()?;
                Self::new(row, col)
            }
            None => Self::from_index(s.parse().ok()?),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
