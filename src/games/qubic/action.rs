//! Errors raised when applying a move to the board.

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The target cell already holds a mark.
    #[display("Cell is already occupied")]
    Occupied,
}
