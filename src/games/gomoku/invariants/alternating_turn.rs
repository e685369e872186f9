//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{History, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark added at step `n` belongs to X when `n` is odd and to O when
/// `n` is even. Steps that are not a single placement are left to
/// [`SingleStepInvariant`](super::SingleStepInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        (1..history.len())
            .filter_map(|n| history.placement(n).map(|mov| (n, mov)))
            .all(|(n, mov)| mov.player == Player::for_move(n - 1))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
