//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use crate::types::Cell;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|&cell| cell != Cell::Empty)
}

/// Checks if the board is a finished draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
