//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Move, Player};
use serde::{Deserialize, Serialize};

/// One of the 8 winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// A horizontal line, by row index.
    #[display("row {_0}")]
    Row(usize),
    /// A vertical line, by column index.
    #[display("column {_0}")]
    Column(usize),
    /// Bottom-left to top-right.
    #[display("ascending diagonal")]
    AscendingDiagonal,
    /// Top-left to bottom-right.
    #[display("descending diagonal")]
    DescendingDiagonal,
}

impl Line {
    /// All lines, in the order they are checked.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::AscendingDiagonal,
        Line::DescendingDiagonal,
    ];

    /// The three cells of this line.
    pub fn cells(self) -> [Move; 3] {
        match self {
            Line::Row(r) => [Move::new(r, 0), Move::new(r, 1), Move::new(r, 2)],
            Line::Column(c) => [Move::new(0, c), Move::new(1, c), Move::new(2, c)],
            Line::AscendingDiagonal => [Move::new(2, 0), Move::new(1, 1), Move::new(0, 2)],
            Line::DescendingDiagonal => [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
        }
    }

    /// Returns true if `mv` lies on this line.
    pub fn contains(self, mv: Move) -> bool {
        self.cells().contains(&mv)
    }
}

/// Returns the first line fully marked by `player`.
///
/// All 8 lines are scanned on every call; nothing is cached between
/// queries.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let target = Cell::Occupied(player);
    Line::ALL
        .into_iter()
        .find(|line| line.cells().iter().all(|&mv| board.get(mv) == target))
}

/// Checks if `player` has three in a row.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Checks if either player has three in a row.
///
/// The computer's lines are checked first, matching the search.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Two, Player::One]
        .into_iter()
        .find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(line: Line, player: Player) -> Board {
        let mut board = Board::new();
        for mv in line.cells() {
            board.mark(mv.row, mv.col, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_every_line_wins_individually() {
        for line in Line::ALL {
            for player in Player::iter() {
                let board = board_with(line, player);
                assert!(has_won(&board, player), "{line} should win for {player}");
                assert!(!has_won(&board, player.opponent()));
                assert_eq!(winning_line(&board, player), Some(line));
            }
        }
    }

    #[test]
    fn test_diagonal_cells() {
        assert_eq!(
            Line::AscendingDiagonal.cells(),
            [Move::new(2, 0), Move::new(1, 1), Move::new(0, 2)]
        );
        assert!(Line::DescendingDiagonal.contains(Move::new(2, 2)));
        assert!(!Line::DescendingDiagonal.contains(Move::new(0, 2)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.mark(0, 0, Player::One);
        board.mark(0, 1, Player::One);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "121/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // Top row and left column both complete through (0, 0).
        let board: Board = "111/12./1.2".parse().unwrap();
        assert_eq!(winning_line(&board, Player::One), Some(Line::Row(0)));
    }
}
