//! Strictly Qubic - 4x4x4 tic-tac-toe engine
//!
//! Two players take turns marking cells of a 4x4x4 cube. Four marks in a
//! straight line win: along an axis, across a face diagonal, or through a
//! space diagonal.
//!
//! # Architecture
//!
//! - **Codec**: [`Move`] coordinates and their [`PackedMove`] integer form
//! - **Board**: cell grid plus turn tracker; [`Board::place`] is the only mutation
//! - **Rules**: [`WinDetector`] classifies a board as in progress, won, or drawn
//! - **Heuristic**: [`MoveHeuristic`] wins, else blocks, else plays randomly
//! - **Session**: [`SelfPlay`] drives a heuristic-vs-heuristic game into a [`GameRecord`]
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_qubic::{Board, GameStatus, MoveHeuristic, WinDetector};
//!
//! let mut board = Board::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! while WinDetector::evaluate(&board) == GameStatus::InProgress {
//!     let mv = MoveHeuristic::choose(&board, &mut rng);
//!     board.place_move(mv).expect("heuristic picks empty cells");
//! }
//! assert_ne!(WinDetector::evaluate(&board), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Self-play sessions
pub use session::{GameRecord, SelfPlay, SessionError, Turn};

// Crate-level exports - Game types (4x4x4 tic-tac-toe)
pub use games::qubic::invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, Invariant, InvariantSet,
    InvariantViolation, QubicInvariants,
};
pub use games::qubic::rules::{is_draw, is_full};
pub use games::qubic::{
    Board, Cell, Cells, Direction, GameStatus, LINE_LENGTH, Line, Move, MoveCodec, MoveHeuristic,
    PackedMove, PlacementError, Player, SIZE, WinDetector,
};
