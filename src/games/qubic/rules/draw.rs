//! Draw detection logic.

use super::super::{Board, Cell};
use super::win::WinDetector;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().flatten().all(|&c| c != Cell::Empty)
}

/// A full board with no line of four is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && WinDetector::winner(board).is_none()
}
