//! First-class action types for five-in-a-row.
//!
//! A move is a domain event: the mark a player placed and where. Moves are
//! recovered from history by comparing consecutive snapshots.

use super::{Player, Position};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Reason a placement was refused.
///
/// Front-ends absorb these: a refused placement leaves the game untouched
/// and shows nothing to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Cell index {} is off the board", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// `target` is not below the history length.
    #[display("Move #{} is out of range (history has {} entries)", target, len)]
    OutOfRange {
        /// Requested history index.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
