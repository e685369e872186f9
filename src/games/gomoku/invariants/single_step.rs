//! Single step invariant: consecutive snapshots differ by one new mark.

use super::super::History;
use super::Invariant;

/// Invariant: every snapshot after the first fills exactly one square that
/// was empty in its predecessor, and changes nothing else.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        (1..history.len()).all(|n| history.placement(n).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{Board, Player, Position};

    fn pos(index: usize) -> Position {
        Position::from_index(index).unwrap()
    }

    #[test]
    fn test_played_history_holds() {
        let mut history = History::new();
        for index in [112, 113, 127, 128] {
            history.play_index(index).unwrap();
        }
        assert!(SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut history = History::new();
        history.snapshots.push(Board::new());
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut history = History::new();
        history.play_index(0).unwrap();
        let overwritten = history.current().with(pos(0), Player::O);
        history.snapshots.push(overwritten);
        assert!(!SingleStepInvariant::holds(&history));
    }
}
