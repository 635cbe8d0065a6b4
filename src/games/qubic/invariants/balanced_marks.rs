//! Balanced marks invariant: A has as many marks as B, or one more.

use super::super::{Board, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: mark counts never drift apart.
///
/// A always moves first, so after any sequence of placements A has either
/// the same number of marks as B or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let a = board.count(Player::A);
        let b = board.count(Player::B);
        let valid = a == b || a == b + 1;
        if !valid {
            warn!(a, b, "Mark counts out of balance");
        }
        valid
    }

    fn description() -> &'static str {
        "Player A has as many marks as player B, or one more"
    }
}
