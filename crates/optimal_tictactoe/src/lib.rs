//! Tic-tac-toe against a computer that never loses.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with mark/unmark primitives and win/draw queries
//! - **Rules**: line and draw detection shared by the board and the search
//! - **Search**: exhaustive minimax choosing the computer's move
//! - **Game**: turn-taking session a front end drives
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{Game, GameStatus, Move};
//!
//! let mut game = Game::default();
//! game.play(Move::new(1, 1))?;
//! let reply = game.play_computer()?;
//! assert_ne!(reply, Move::new(1, 1));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), optimal_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod types;

pub mod rules;
pub mod search;

pub use board::Board;
pub use error::{BoardError, GameError, SearchError};
pub use game::Game;
pub use rules::Line;
pub use search::{ScoredMove, SearchReport, best_move, evaluate};
pub use types::{BOARD_SIZE, Cell, GameStatus, Move, Player, Score};
