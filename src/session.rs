//! Self-play sessions and game records.
//!
//! A [`SelfPlay`] drives one game with [`MoveHeuristic`] playing both
//! sides. Each placed move is recorded in packed form so a finished game
//! can be stored as a [`GameRecord`] and replayed later.

use crate::games::qubic::invariants::{InvariantSet, QubicInvariants};
use crate::games::qubic::{
    Board, GameStatus, Move, MoveHeuristic, PackedMove, PlacementError, Player, WinDetector,
};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Error raised while driving or replaying a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// A move hit an occupied cell.
    #[display("Placement failed: {}", _0)]
    Placement(PlacementError),

    /// A packed move decodes outside the cube.
    #[display("Packed move {} is outside the cube", _0)]
    #[from(ignore)]
    OutOfRange(#[error(not(source))] PackedMove),

    /// A record continues after the game has already ended.
    #[display("Move {} played after the game ended", _0)]
    #[from(ignore)]
    MoveAfterGameOver(#[error(not(source))] PackedMove),

    /// A recorded status disagrees with the replayed board.
    #[display("Record says {} but replay gives {}", recorded, replayed)]
    #[from(ignore)]
    StatusMismatch {
        /// Status stored in the record.
        recorded: GameStatus,
        /// Status of the replayed board.
        replayed: GameStatus,
    },

    /// A board invariant failed after a move.
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

/// One move made during self-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Player who moved.
    pub player: Player,
    /// Cell that was marked.
    pub mv: Move,
    /// Game status after the move.
    pub status: GameStatus,
}

/// A game played by the heuristic against itself.
pub struct SelfPlay<R> {
    board: Board,
    history: Vec<PackedMove>,
    rng: R,
}

impl<R: Rng> SelfPlay<R> {
    /// Starts a fresh game.
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[PackedMove] {
        &self.history
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        WinDetector::evaluate(&self.board)
    }

    /// Plays one move, or returns `None` if the game is already over.
    ///
    /// Invariants are checked after the move in debug builds.
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn step(&mut self) -> Result<Option<Turn>, SessionError> {
        if self.status().is_over() {
            return Ok(None);
        }

        let player = self.board.current_player();
        let mv = MoveHeuristic::choose(&self.board, &mut self.rng);
        self.board.place_move(mv)?;
        self.history.push(mv.pack());

        #[cfg(debug_assertions)]
        check_invariants(&self.board)?;

        let status = self.status();
        debug!(%player, %mv, %status, "Move played");
        Ok(Some(Turn {
            player,
            mv,
            status,
        }))
    }

    /// Plays until the game ends and returns the record.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameRecord, SessionError> {
        while self.step()?.is_some() {}
        Ok(self.into_record())
    }

    /// Converts the game so far into a record.
    pub fn into_record(self) -> GameRecord {
        let status = WinDetector::evaluate(&self.board);
        info!(moves = self.history.len(), %status, "Game recorded");
        GameRecord {
            moves: self.history,
            status,
        }
    }
}

/// Moves of a game in packed form plus its final status.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order they were played.
    moves: Vec<PackedMove>,
    /// Status after the last move.
    status: GameStatus,
}

impl GameRecord {
    /// Creates a record from its parts.
    pub fn new(moves: Vec<PackedMove>, status: GameStatus) -> Self {
        Self { moves, status }
    }

    /// Replays the moves onto a fresh board.
    ///
    /// Packed moves are range-checked here because a record may come from
    /// outside the process. A record ends at the first finished board, so any
    /// move after a win or a full board is rejected.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self) -> Result<Board, SessionError> {
        let mut board = Board::new();
        for &packed in &self.moves {
            if WinDetector::evaluate(&board).is_over() {
                warn!(%packed, "Record continues past the end of the game");
                return Err(SessionError::MoveAfterGameOver(packed));
            }
            let mv = packed.unpack().ok_or(SessionError::OutOfRange(packed))?;
            board.place_move(mv)?;
            check_invariants(&board)?;
        }

        let replayed = WinDetector::evaluate(&board);
        if replayed != self.status {
            warn!(recorded = %self.status, %replayed, "Replay disagrees with record");
            return Err(SessionError::StatusMismatch {
                recorded: self.status,
                replayed,
            });
        }
        Ok(board)
    }
}

/// Folds every invariant violation on `board` into one error. Legal
/// placements keep the invariants true, so a failure here is a rules bug.
fn check_invariants(board: &Board) -> Result<(), SessionError> {
    QubicInvariants::check_all(board).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        SessionError::InvariantViolation(descriptions)
    })
}
