//! Greedy one-ply move selection.
//!
//! The heuristic takes a winning cell if one exists, otherwise blocks the
//! opponent's winning cell, otherwise picks a uniformly random empty cell.
//! It does not look for forks or search deeper than one tentative mark.

use super::rules::WinDetector;
use super::{Board, GameStatus, Move, Player};
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses moves for the player whose turn it is.
pub struct MoveHeuristic;

impl MoveHeuristic {
    /// Picks a move for `board.current_player()`.
    ///
    /// Trials run on copies of the board, so `board` is never modified.
    /// `rng` is only consulted when neither player has an immediate win.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell. Callers check the game status
    /// before asking for a move.
    #[instrument(skip_all, fields(player = %board.current_player()))]
    pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Move {
        let me = board.current_player();

        if let Some(mv) = Self::winning_cell(board, me) {
            debug!(%mv, "Taking winning cell");
            return mv;
        }

        if let Some(mv) = Self::winning_cell(board, me.opponent()) {
            debug!(%mv, "Blocking opponent");
            return mv;
        }

        let empty: Vec<Move> = board.empty_cells().collect();
        assert!(!empty.is_empty(), "no empty cell left to choose from");
        let mv = empty[rng.gen_range(0..empty.len())];
        debug!(%mv, candidates = empty.len(), "Random fallback");
        mv
    }

    /// First empty cell, in scan order, where a mark for `player` completes
    /// a line of four.
    #[instrument(level = "trace", skip(board))]
    pub fn winning_cell(board: &Board, player: Player) -> Option<Move> {
        board.empty_cells().find(|&mv| {
            WinDetector::evaluate(&board.with_mark(mv, player)) == GameStatus::Won(player)
        })
    }
}
