//! Alternating turn invariant: the turn tracker agrees with the marks.

use super::super::{Board, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: players alternate A, B, A, B, ...
///
/// A is to move exactly when both players have placed the same number of
/// marks.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let a = board.count(Player::A);
        let b = board.count(Player::B);
        let expected = if a == b { Player::A } else { Player::B };
        let valid = board.current_player() == expected;
        if !valid {
            warn!(a, b, to_move = %board.current_player(), "Turn out of step with marks");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
