//! Rooted history invariant: history starts from the empty board.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: history is non-empty, begins with the empty board, and the
/// pointer names a recorded snapshot.
pub struct RootedHistoryInvariant;

impl Invariant<History> for RootedHistoryInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first() == Some(&Board::new()) && history.pointer() < history.len()
    }

    fn description() -> &'static str {
        "History starts from the empty board and the pointer is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(RootedHistoryInvariant::holds(&History::new()));
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let mut history = History::new();
        history.pointer = 1;
        assert!(!RootedHistoryInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_root_violates() {
        let mut history = History::new();
        history.snapshots[0] = Board::new().with(Position::center(), Player::X);
        assert!(!RootedHistoryInvariant::holds(&history));
    }

    #[test]
    fn test_missing_root_violates() {
        let mut history = History::new();
        history.snapshots.clear();
        assert!(!RootedHistoryInvariant::holds(&history));
    }
}
