//! Core domain types for 4x4x4 tic-tac-toe.

use super::action::PlacementError;
use super::position::{Move, PackedMove, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player A (goes first, marked `O`).
    #[display("A")]
    A,
    /// Player B (goes second, marked `X`).
    #[display("B")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Character used when rendering this player's marks.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'O',
            Player::B => 'X',
        }
    }
}

/// A cell of the cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns true if nobody has marked this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Cell storage indexed `[x][y][z]`.
pub type Cells = [[[Cell; SIZE]; SIZE]; SIZE];

/// 4x4x4 board together with the player to move.
///
/// The board is a small `Copy` value. Hypothetical moves are evaluated on
/// copies, so the live board only changes through [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Cells,
    to_move: Player,
}

impl Board {
    /// Creates an empty board with player A to move.
    pub fn new() -> Self {
        Self {
            cells: [[[Cell::Empty; SIZE]; SIZE]; SIZE],
            to_move: Player::A,
        }
    }

    /// Builds a board from explicit cell contents.
    ///
    /// No consistency between mark counts and `to_move` is enforced; see
    /// the invariants module for those checks.
    pub fn from_cells(cells: Cells, to_move: Player) -> Self {
        Self { cells, to_move }
    }

    /// Places the current player's mark at `(x, y, z)` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Occupied`] if the cell already holds a
    /// mark. The board is left untouched in that case.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate is outside `0..4`.
    #[track_caller]
    pub fn place(&mut self, x: u8, y: u8, z: u8) -> Result<(), PlacementError> {
        self.place_move(Move::new(x, y, z))
    }

    /// Places the current player's mark at `mv` and passes the turn.
    #[instrument(level = "debug", skip_all, fields(mv = %mv, player = %self.to_move))]
    pub fn place_move(&mut self, mv: Move) -> Result<(), PlacementError> {
        let cell = &mut self.cells[usize::from(mv.x())][usize::from(mv.y())][usize::from(mv.z())];
        if !cell.is_empty() {
            trace!("Cell already occupied");
            return Err(PlacementError::Occupied);
        }
        *cell = Cell::Occupied(self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Decodes a packed move and places it.
    ///
    /// # Panics
    ///
    /// Panics if the packed move decodes outside the cube.
    #[track_caller]
    pub fn place_packed(&mut self, packed: PackedMove) -> Result<(), PlacementError> {
        let (x, y, z) = super::position::MoveCodec::decode(packed);
        self.place(x, y, z)
    }

    /// Returns the cell at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate is outside `0..4`.
    #[track_caller]
    pub fn get(&self, x: u8, y: u8, z: u8) -> Cell {
        self.cell(Move::new(x, y, z))
    }

    /// Returns the cell at `mv`.
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[usize::from(mv.x())][usize::from(mv.y())][usize::from(mv.z())]
    }

    /// Returns the player entitled to move next.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Empty cells in scan order (x outer, y middle, z inner).
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(move |&mv| self.cell(mv).is_empty())
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        Move::all()
            .filter(|&mv| self.cell(mv) == Cell::Occupied(player))
            .count()
    }

    /// Returns the raw cell storage.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Copy of this board with `player`'s mark at `mv`.
    ///
    /// The turn tracker is carried over unchanged; the copy exists only to
    /// be evaluated and dropped.
    pub(crate) fn with_mark(&self, mv: Move, player: Player) -> Board {
        let mut trial = *self;
        trial.cells[usize::from(mv.x())][usize::from(mv.y())][usize::from(mv.z())] =
            Cell::Occupied(player);
        trial
    }

    /// Formats the board as text: one line per x layer, each y row shown as
    /// four z cells followed by `|`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for plane in &self.cells {
            for row in plane {
                for cell in row {
                    result.push(match cell {
                        Cell::Empty => '.',
                        Cell::Occupied(player) => player.symbol(),
                    });
                }
                result.push('|');
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
