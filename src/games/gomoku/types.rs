//! Core domain types for five-in-a-row.

use super::position::Position;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// Number of equal marks in a row needed to win.
pub const LINE_LENGTH: usize = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player who moves when `moves_played` marks are on the board.
    ///
    /// X moves on even counts, O on odd counts.
    pub fn for_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// One immutable 15x15 board snapshot.
///
/// Squares are stored in row-major order (`row * 15 + col`). A `Board` has
/// no public mutators: placing a mark with [`Board::with`] returns a new
/// snapshot and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: vec![Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given index (0-224).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at a position.
    pub fn at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.at(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// Whatever was at `pos` is overwritten; legality is checked by
    /// [`History::play`](super::History::play).
    pub fn with(&self, pos: Position, player: Player) -> Self {
        let mut next = self.clone();
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(BOARD_SIZE)
    }

    /// Formats the board as a human-readable string.
    ///
    /// One text line per row; `.` marks an empty square.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => '.',
                        Square::Occupied(player) => player.symbol(),
                    })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Status line derived from the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A player has completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No line yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_for_move_alternates() {
        assert_eq!(Player::for_move(0), Player::X);
        assert_eq!(Player::for_move(1), Player::O);
        assert_eq!(Player::for_move(14), Player::X);
        assert_eq!(Player::for_move(15), Player::O);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let empty = Board::new();
        let pos = Position::new(7, 7).unwrap();
        let placed = empty.with(pos, Player::X);

        assert!(empty.is_empty(pos));
        assert_eq!(placed.at(pos), Square::Occupied(Player::X));
        assert_eq!(placed.occupied_count(), 1);
    }

    #[test]
    fn test_display_has_fifteen_rows() {
        let board = Board::new().with(Position::new(0, 1).unwrap(), Player::O);
        let text = board.display();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_SIZE);
        assert!(lines[0].starts_with(". O ."));
        assert_eq!(lines[14], vec!["."; BOARD_SIZE].join(" "));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }
}
