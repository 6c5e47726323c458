//! The 3x3 board model.

use crate::error::BoardError;
use crate::rules::{self, Line};
use crate::types::{BOARD_SIZE, Cell, Move, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board, row-major.
///
/// The board stores and queries marks; it does not enforce turn order.
/// `mark` and `unmark` are the only mutation primitives, which keeps the
/// search's mark-recurse-unmark walk allocation free.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Sets the cell to `player`'s mark.
    ///
    /// The cell must be empty; callers check [`Board::is_empty`] first.
    pub fn mark(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(
            self.is_empty(row, col),
            "mark on occupied cell ({row}, {col})"
        );
        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Resets a single cell to empty, undoing a `mark`.
    pub fn unmark(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if `player` owns any complete line.
    pub fn winner(&self, player: Player) -> bool {
        rules::has_won(self, player)
    }

    /// Returns the line `player` completed, for drivers that highlight it.
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        rules::winning_line(self, player)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(|mv| self.is_empty(mv.row, mv.col))
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Returns all cells, row by row.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses three rows of `.`/`0`/`1`/`2`, separated by `/` or newlines.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .trim()
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::BadRowCount { found: rows.len() });
        }

        let mut board = Board::new();
        for (r, text) in rows.into_iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(BoardError::BadRowLength {
                    row: r,
                    found: chars.len(),
                });
            }
            for (c, ch) in chars.into_iter().enumerate() {
                board.cells[r][c] =
                    Cell::from_char(ch).ok_or(BoardError::BadCell { row: r, found: ch })?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Move::ALL.iter().all(|mv| board.is_empty(mv.row, mv.col)));
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board: Board = "110/220/000".parse().unwrap();
        assert_eq!(board.to_string(), "11./22./...");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_accepts_multiline() {
        let board: Board = "1..\n.2.\n...".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 0)), Cell::Occupied(Player::One));
        assert_eq!(board.get(Move::new(1, 1)), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "110/220".parse::<Board>(),
            Err(BoardError::BadRowCount { found: 2 })
        );
        assert_eq!(
            "110/2200/000".parse::<Board>(),
            Err(BoardError::BadRowLength { row: 1, found: 4 })
        );
        assert_eq!(
            "110/2x0/000".parse::<Board>(),
            Err(BoardError::BadCell { row: 1, found: 'x' })
        );
    }

    #[test]
    fn test_count_marks() {
        let board: Board = "121/.2./1..".parse().unwrap();
        assert_eq!(board.count(Player::One), 3);
        assert_eq!(board.count(Player::Two), 2);
    }
}
