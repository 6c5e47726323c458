//! Error types for the board, the search and the game session.

use crate::types::{Move, Player};

/// Error raised when board input from outside the core is malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({row}, {col}) are off the board (must be 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Board text does not contain exactly three rows.
    #[display("Expected 3 rows, found {found}")]
    BadRowCount {
        /// Number of rows found.
        found: usize,
    },

    /// A row of board text does not contain exactly three cells.
    #[display("Row {row} has {found} cells, expected 3")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        found: usize,
    },

    /// A character is not one of `.`, `0`, `1`, `2`.
    #[display("Invalid cell {found:?} in row {row}")]
    BadCell {
        /// Zero-based row index.
        row: usize,
        /// Offending character.
        found: char,
    },
}

impl std::error::Error for BoardError {}

/// Error raised when the search is asked for a move it cannot produce.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The position already has a winner or no empty cell.
    #[display("Position is terminal; no move to search")]
    TerminalPosition,
}

impl std::error::Error for SearchError {}

/// Error that can occur when applying a move to a game session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell is already occupied.
    #[display("{} is already occupied", at.label())]
    CellOccupied {
        /// The rejected move.
        at: Move,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The caller tried to move for the side that is not to move.
    #[display("It's not {}'s turn", player)]
    NotYourTurn {
        /// The side that tried to move.
        player: Player,
    },

    /// The search could not produce a move.
    #[display("Search failed: {}", source)]
    Search {
        /// Underlying search error.
        source: SearchError,
    },
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Search { source } => Some(source),
            _ => None,
        }
    }
}

impl From<SearchError> for GameError {
    fn from(source: SearchError) -> Self {
        GameError::Search { source }
    }
}
