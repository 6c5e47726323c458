//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the search and the game
//! session share one definition of "terminal".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, has_won, winning_line};

use crate::board::Board;
use crate::types::GameStatus;

/// Classifies a board as in progress, won or drawn.
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// Returns true if the board has a winner or no empty cell.
pub fn is_terminal(board: &Board) -> bool {
    status(board).is_over()
}
