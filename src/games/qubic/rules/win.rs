//! Win detection logic for 4x4x4 tic-tac-toe.
//!
//! Every cell is tried as an anchor, and from each anchor the scan walks
//! the 13 canonical directions counting consecutive cells that match the
//! anchor's mark. A run of [`LINE_LENGTH`] is a win. Since each canonical
//! direction points one way only, every line of four is reached from
//! exactly one of its two end cells.

use super::super::position::{Direction, LINE_LENGTH};
use super::super::{Board, Cell, GameStatus, Move, Player};
use super::draw::is_full;
use tracing::instrument;

/// A straight line of four cells: an anchor and a canonical direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    anchor: Move,
    direction: Direction,
}

impl Line {
    /// First cell of the line.
    pub fn anchor(&self) -> Move {
        self.anchor
    }

    /// Canonical direction the line runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cells of the line, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Move> {
        let Line { anchor, direction } = *self;
        (0..LINE_LENGTH).filter_map(move |k| anchor.step(direction, k))
    }
}

/// Classifies a board as in progress, drawn, or won.
pub struct WinDetector;

impl WinDetector {
    /// Evaluates the board.
    ///
    /// A win is checked before fullness, so a full board containing a line
    /// is reported as `Won`, never `Draw`.
    #[instrument(level = "trace", skip(board))]
    pub fn evaluate(board: &Board) -> GameStatus {
        if let Some((player, _)) = Self::winning_line(board) {
            GameStatus::Won(player)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the player holding a line of four, if any.
    pub fn winner(board: &Board) -> Option<Player> {
        Self::winning_line(board).map(|(player, _)| player)
    }

    /// Returns the first line of four found, scanning anchors in x, y, z
    /// order and directions in [`Direction::CANONICAL`] order.
    #[instrument(level = "trace", skip(board))]
    pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
        for anchor in Move::all() {
            let Cell::Occupied(player) = board.cell(anchor) else {
                continue;
            };
            for direction in Direction::CANONICAL {
                if Self::run_length(board, anchor, direction) == LINE_LENGTH {
                    return Some((player, Line { anchor, direction }));
                }
            }
        }
        None
    }

    /// Every line of four on the cube, each listed once.
    pub fn lines() -> impl Iterator<Item = Line> {
        Move::all().flat_map(|anchor| {
            Direction::CANONICAL
                .into_iter()
                .filter(move |&direction| anchor.step(direction, LINE_LENGTH - 1).is_some())
                .map(move |direction| Line { anchor, direction })
        })
    }

    /// Counts cells from `anchor` along `direction` that hold the anchor's
    /// mark, stopping at the cube edge or the first mismatch.
    fn run_length(board: &Board, anchor: Move, direction: Direction) -> usize {
        let mark = board.cell(anchor);
        (0..LINE_LENGTH)
            .map_while(|k| anchor.step(direction, k))
            .take_while(|&mv| board.cell(mv) == mark)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cells, SIZE};
    use super::*;

    fn board_with(marks: &[(u8, u8, u8, Player)]) -> Board {
        let mut cells: Cells = [[[Cell::Empty; SIZE]; SIZE]; SIZE];
        for &(x, y, z, player) in marks {
            cells[usize::from(x)][usize::from(y)][usize::from(z)] = Cell::Occupied(player);
        }
        Board::from_cells(cells, Player::A)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(WinDetector::winner(&board), None);
        assert_eq!(WinDetector::evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_x_axis_row() {
        let board = board_with(&[
            (0, 0, 0, Player::A),
            (1, 0, 0, Player::A),
            (2, 0, 0, Player::A),
            (3, 0, 0, Player::A),
        ]);
        assert_eq!(WinDetector::evaluate(&board), GameStatus::Won(Player::A));
    }

    #[test]
    fn test_winner_anti_space_diagonal() {
        let board = board_with(&[
            (0, 3, 3, Player::B),
            (1, 2, 2, Player::B),
            (2, 1, 1, Player::B),
            (3, 0, 0, Player::B),
        ]);
        let (player, line) = WinDetector::winning_line(&board).unwrap();
        assert_eq!(player, Player::B);
        assert_eq!(line.anchor(), Move::new(0, 3, 3));
        assert_eq!(line.direction().components(), (1, -1, -1));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_with(&[
            (1, 1, 0, Player::A),
            (1, 1, 1, Player::A),
            (1, 1, 2, Player::A),
        ]);
        assert_eq!(WinDetector::evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = board_with(&[
            (0, 0, 0, Player::A),
            (0, 1, 1, Player::A),
            (0, 2, 2, Player::B),
            (0, 3, 3, Player::A),
        ]);
        assert_eq!(WinDetector::winner(&board), None);
    }

    #[test]
    fn test_run_stops_at_edge() {
        // Three marks ending at the edge; the fourth step would be x = 4.
        let board = board_with(&[
            (1, 2, 0, Player::B),
            (2, 2, 0, Player::B),
            (3, 2, 0, Player::B),
        ]);
        let anchor = Move::new(1, 2, 0);
        let axis = Direction::CANONICAL[0];
        assert_eq!(WinDetector::run_length(&board, anchor, axis), 3);
        assert_eq!(WinDetector::winner(&board), None);
    }

    #[test]
    fn test_seventy_six_distinct_lines() {
        let lines: Vec<Line> = WinDetector::lines().collect();
        assert_eq!(lines.len(), 76);

        let mut cell_sets: Vec<Vec<Move>> = lines
            .iter()
            .map(|line| {
                let mut cells: Vec<Move> = line.cells().collect();
                assert_eq!(cells.len(), LINE_LENGTH);
                cells.sort();
                cells
            })
            .collect();
        cell_sets.sort();
        cell_sets.dedup();
        assert_eq!(cell_sets.len(), 76);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WinDetector::lines() {
            let marks: Vec<_> = line
                .cells()
                .map(|mv| (mv.x(), mv.y(), mv.z(), Player::B))
                .collect();
            let board = board_with(&marks);
            assert_eq!(
                WinDetector::evaluate(&board),
                GameStatus::Won(Player::B),
                "missed line {line:?}"
            );
        }
    }
}
