//! Game rules for 4x4x4 tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. Rules are kept
//! apart from board storage so the heuristic can run them against trial
//! copies of the board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WinDetector};
