//! Exhaustive minimax search for the computer's move.
//!
//! The computer is always [`Player::Two`] and maximizes; the human is
//! [`Player::One`] and is assumed to minimize. Every continuation is
//! explored to the end of the game. There is no pruning, no caching and no
//! depth penalty, so every win scores the same regardless of how far away
//! it is.
//!
//! Candidates are enumerated in row-major order and the root keeps the
//! first strictly better score, so among equally good moves the
//! row-major-earliest one is chosen.
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{Board, Move, search};
//!
//! let mut board = Board::new();
//! assert_eq!(search::best_move(&mut board).unwrap(), Move::new(0, 0));
//! ```

use crate::board::Board;
use crate::error::SearchError;
use crate::rules;
use crate::types::{Move, Player, Score};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A root candidate and the score it guarantees the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ScoredMove {
    /// The candidate cell.
    pub position: Move,
    /// Its minimax value.
    pub score: Score,
}

/// Outcome of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct SearchReport {
    /// The chosen move.
    best_move: Move,
    /// Score guaranteed by the chosen move.
    score: Score,
    /// Every root candidate, in row-major order.
    candidates: Vec<ScoredMove>,
    /// Positions visited below the root.
    nodes: u64,
}

/// Minimax value of `board` with the given side to move.
///
/// `maximizing` means the computer is to move. The board is marked and
/// unmarked in place and is identical on return.
pub fn evaluate(board: &mut Board, maximizing: bool) -> Score {
    let mut nodes = 0;
    minimax(board, maximizing, &mut nodes)
}

fn minimax(board: &mut Board, maximizing: bool, nodes: &mut u64) -> Score {
    *nodes += 1;

    if board.winner(Player::Two) {
        return Score::Win;
    }
    if board.winner(Player::One) {
        return Score::Loss;
    }
    if board.is_full() {
        return Score::Draw;
    }

    let side = if maximizing { Player::Two } else { Player::One };
    let mut best = if maximizing { Score::Loss } else { Score::Win };

    for mv in Move::ALL {
        if !board.is_empty(mv.row, mv.col) {
            continue;
        }
        board.mark(mv.row, mv.col, side);
        let score = minimax(board, !maximizing, nodes);
        board.unmark(mv.row, mv.col);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every empty cell for the computer and picks the best one.
///
/// # Errors
///
/// Returns [`SearchError::TerminalPosition`] if the board already has a
/// winner or no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &mut Board) -> Result<SearchReport, SearchError> {
    if rules::is_terminal(board) {
        return Err(SearchError::TerminalPosition);
    }

    let mut nodes = 0;
    let mut candidates = Vec::with_capacity(board.empty_cells().count());
    let mut best: Option<ScoredMove> = None;

    for mv in Move::ALL {
        if !board.is_empty(mv.row, mv.col) {
            continue;
        }
        board.mark(mv.row, mv.col, Player::Two);
        let score = minimax(board, false, &mut nodes);
        board.unmark(mv.row, mv.col);

        let candidate = ScoredMove::new(mv, score);
        candidates.push(candidate);
        // Strict comparison: ties keep the earlier cell.
        match best {
            Some(current) if score <= current.score => {}
            _ => best = Some(candidate),
        }
    }

    let best = best.ok_or(SearchError::TerminalPosition)?;
    debug!(
        row = best.position.row,
        col = best.position.col,
        score = best.score.value(),
        nodes,
        "Search complete"
    );

    Ok(SearchReport::new(best.position, best.score, candidates, nodes))
}

/// Computes the computer's move for `board`.
///
/// # Errors
///
/// Returns [`SearchError::TerminalPosition`] if the board already has a
/// winner or no empty cell.
pub fn best_move(board: &mut Board) -> Result<Move, SearchError> {
    analyze(board).map(|report| report.best_move)
}
