//! Turn-taking game session.
//!
//! `Game` owns the board between turns, enforces alternation, and tracks
//! the `InProgress -> Won | Draw` state machine. The computer's turn is
//! delegated to the search.

use crate::board::Board;
use crate::error::GameError;
use crate::rules::{self, Line};
use crate::search;
use crate::types::{GameStatus, Move, Player};
use tracing::{info, instrument, warn};

/// A single human-versus-computer game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    first: Player,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the side that moves first after every restart.
    pub fn first(&self) -> Player {
        self.first
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.count(Player::One) + self.board.count(Player::Two)
    }

    /// The completed line, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(player) => self.board.winning_line(player),
            _ => None,
        }
    }

    /// Places the human's mark.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has ended
    /// - [`GameError::NotYourTurn`] if the computer is to move
    /// - [`GameError::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play(&mut self, at: Move) -> Result<GameStatus, GameError> {
        self.check_turn(Player::One)?;
        if !self.board.is_empty(at.row, at.col) {
            warn!(row = at.row, col = at.col, "Cell already occupied");
            return Err(GameError::CellOccupied { at });
        }
        Ok(self.apply(at))
    }

    /// Lets the computer search for and play its move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has ended
    /// - [`GameError::NotYourTurn`] if the human is to move
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn play_computer(&mut self) -> Result<Move, GameError> {
        self.check_turn(Player::Two)?;
        let at = search::best_move(&mut self.board)?;
        self.apply(at);
        Ok(at)
    }

    /// Clears the board and hands the move back to the first player.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.to_move = self.first;
        self.status = GameStatus::InProgress;
        info!(first = %self.first, "Game restarted");
    }

    fn check_turn(&self, player: Player) -> Result<(), GameError> {
        if self.status.is_over() {
            warn!(%player, "Move attempted after game over");
            return Err(GameError::GameOver);
        }
        if self.to_move != player {
            warn!(%player, "Move attempted out of turn");
            return Err(GameError::NotYourTurn { player });
        }
        Ok(())
    }

    fn apply(&mut self, at: Move) -> GameStatus {
        let player = self.to_move;
        self.board.mark(at.row, at.col, player);
        self.status = rules::status(&self.board);
        if !self.status.is_over() {
            self.to_move = player.opponent();
        }
        info!(%player, row = at.row, col = at.col, status = %self.status, "Move applied");
        debug_assert!(self.marks_alternate(), "mark counts out of balance");
        self.status
    }

    /// The first player is never behind and never more than one mark ahead.
    fn marks_alternate(&self) -> bool {
        let lead = self.board.count(self.first);
        let trail = self.board.count(self.first.opponent());
        lead == trail || lead == trail + 1
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::One)
    }
}
