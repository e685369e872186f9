//! Snapshot history with time travel.
//!
//! `History` is the single owner of game state: the list of board snapshots
//! and the pointer to the one currently shown. Snapshots are never mutated
//! after they are recorded, so any entry stays valid as a jump target.

use super::action::{JumpError, Move, MoveError};
use super::invariants::{GomokuInvariants, InvariantSet};
use super::rules::check_winner;
use super::{Board, CELL_COUNT, Player, Position, Square, Status};
use tracing::{debug, info, instrument};

/// Game history: every snapshot played so far plus the current pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) pointer: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            pointer: 0,
        }
    }

    /// All recorded snapshots, oldest first. Never empty.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of recorded snapshots, including the empty start board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the empty start board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot currently shown.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// The snapshot currently shown.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.pointer]
    }

    /// Player whose mark the next placement puts down.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.pointer)
    }

    /// Winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// Status for the current snapshot.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Places the next mark at `pos`.
    ///
    /// Any snapshots after the current pointer are discarded before the new
    /// snapshot is appended, and the pointer moves to it.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the current snapshot already has a
    /// winner and `MoveError::SquareOccupied` if `pos` is taken. The history
    /// is unchanged in both cases.
    #[instrument(skip(self), fields(position = %pos, pointer = self.pointer))]
    pub fn play(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.winner().is_some() {
            debug!("Placement refused: game is over");
            return Err(MoveError::GameOver);
        }
        if !self.current().is_empty(pos) {
            debug!("Placement refused: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let next = self.current().with(pos, player);

        let discarded = self.snapshots.len() - (self.pointer + 1);
        self.snapshots.truncate(self.pointer + 1);
        self.snapshots.push(next);
        self.pointer = self.snapshots.len() - 1;

        info!(player = %player, move_number = self.pointer, discarded, "Move applied");
        debug_assert!(
            GomokuInvariants::check_all(self).is_ok(),
            "History invariants violated after move"
        );

        Ok(Move::new(player, pos))
    }

    /// Places the next mark at a raw cell index (0-224).
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for indices off the board, otherwise as
    /// [`History::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Shows snapshot `target` without altering the recorded history.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` when `target` is not a recorded
    /// snapshot; the pointer is left where it was.
    #[instrument(skip(self), fields(from = self.pointer))]
    pub fn jump(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.snapshots.len() {
            return Err(JumpError::OutOfRange {
                target,
                len: self.snapshots.len(),
            });
        }
        self.pointer = target;
        info!(to = target, "Jumped in history");
        Ok(())
    }

    /// The move that produced snapshot `n` from snapshot `n - 1`.
    ///
    /// `None` for the start board, for out-of-range `n`, and for any pair of
    /// snapshots that does not differ by exactly one newly filled square.
    pub fn placement(&self, n: usize) -> Option<Move> {
        let prev = self.snapshots.get(n.checked_sub(1)?)?;
        let next = self.snapshots.get(n)?;
        diff(prev, next)
    }

    /// Label for history entry `n` in the move list.
    pub fn description(n: usize) -> String {
        if n > 0 {
            format!("Go to move #{}", n)
        } else {
            "Go to game start".to_string()
        }
    }

    /// Labels for every history entry, oldest first.
    pub fn descriptions(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(Self::description).collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// The single placement separating two snapshots, if there is exactly one.
fn diff(prev: &Board, next: &Board) -> Option<Move> {
    let mut changed = (0..CELL_COUNT).filter(|&i| prev.get(i) != next.get(i));
    let index = changed.next()?;
    if changed.next().is_some() {
        return None;
    }
    match (prev.get(index)?, next.get(index)?) {
        (Square::Empty, Square::Occupied(player)) => {
            Some(Move::new(player, Position::from_index(index)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.pointer(), 0);
        assert_eq!(history.current(), &Board::new());
        assert_eq!(history.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_play_returns_move() {
        let mut history = History::new();
        let mov = history.play(pos(7, 7)).unwrap();
        assert_eq!(mov, Move::new(Player::X, pos(7, 7)));
        assert_eq!(history.placement(1), Some(mov));
    }

    #[test]
    fn test_placement_of_start_board_is_none() {
        let history = History::new();
        assert_eq!(history.placement(0), None);
        assert_eq!(history.placement(1), None);
    }

    #[test]
    fn test_earlier_snapshots_survive_later_moves() {
        let mut history = History::new();
        history.play(pos(0, 0)).unwrap();
        let first = history.snapshots()[1].clone();
        history.play(pos(0, 1)).unwrap();
        history.play(pos(0, 2)).unwrap();

        assert_eq!(history.snapshots()[1], first);
        assert_eq!(history.snapshots()[0], Board::new());
    }

    #[test]
    fn test_descriptions() {
        let mut history = History::new();
        history.play(pos(0, 0)).unwrap();
        history.play(pos(0, 1)).unwrap();
        assert_eq!(
            history.descriptions(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_play_index_out_of_bounds() {
        let mut history = History::new();
        assert_eq!(history.play_index(225), Err(MoveError::OutOfBounds(225)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_diff_rejects_overwrite() {
        let a = Board::new().with(pos(0, 0), Player::X);
        let b = Board::new().with(pos(0, 0), Player::O);
        assert_eq!(diff(&a, &b), None);
    }
}
