//! Keyboard and mouse mapping onto board cells.

use crossterm::event::KeyCode;
use optimal_tictactoe::{BOARD_SIZE, Move};

/// Width of one rendered cell, in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one rendered cell, in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole grid.
pub const GRID_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16;
/// Height of the whole grid.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * BOARD_SIZE as u16;

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let last = BOARD_SIZE - 1;
    match key {
        KeyCode::Left => Move::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Move::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up => Move::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Move::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}

/// Maps a digit key `1`-`9` onto a cell, numbered row-major.
pub fn digit_cell(c: char) -> Option<Move> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Move::from_index)
}

/// Maps a terminal coordinate onto the cell drawn there.
///
/// `origin` is the top-left corner of the grid. The offset is divided by
/// the fixed cell size; anything outside the grid maps to `None`.
pub fn cell_at(origin: (u16, u16), column: u16, row: u16) -> Option<Move> {
    let dx = column.checked_sub(origin.0)?;
    let dy = row.checked_sub(origin.1)?;
    Move::try_new((dy / CELL_HEIGHT) as usize, (dx / CELL_WIDTH) as usize).ok()
}
