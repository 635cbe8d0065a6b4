mod action;
mod heuristic;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::PlacementError;
pub use heuristic::MoveHeuristic;
pub use position::{Direction, LINE_LENGTH, Move, MoveCodec, PackedMove, SIZE};
pub use rules::{Line, WinDetector};
pub use types::{Board, Cell, Cells, GameStatus, Player};
