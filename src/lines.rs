//! Win detection by scanning every line of the board
//!
//! All rows, columns and diagonals long enough to hold a line of four are
//! written into one byte buffer, one mark per cell, with a separator after
//! each line so that a run can never continue from one line into the next.
//! The heuristic scans the same buffer for its patterns.

use crate::{
    board::{Board, Cell, Player},
    COLUMNS, ROWS, SERIES_LEN,
};

/// The score of a position won by player one, negated for player two
pub const WIN_SCORE: i32 = 1000;

pub const PLAYER_ONE_MARK: u8 = b'X';
pub const PLAYER_TWO_MARK: u8 = b'O';
pub const EMPTY_MARK: u8 = b'_';
/// Ends a line, never equal to a mark
pub const SEPARATOR: u8 = b'|';

pub fn mark(cell: Cell) -> u8 {
    match cell {
        Cell::PlayerOne => PLAYER_ONE_MARK,
        Cell::PlayerTwo => PLAYER_TWO_MARK,
        Cell::Empty => EMPTY_MARK,
    }
}

pub fn player_mark(player: Player) -> u8 {
    mark(player.into())
}

/// Appends the marks from `(row, column)` stepping by `(d_row, d_column)`
/// until the edge of the board, then a separator
fn push_line(buffer: &mut Vec<u8>, board: &Board, start: (usize, usize), step: (isize, isize)) {
    let (mut row, mut column) = (start.0 as isize, start.1 as isize);
    while (0..ROWS as isize).contains(&row) && (0..COLUMNS as isize).contains(&column) {
        buffer.push(mark(board.cell(row as usize, column as usize)));
        row += step.0;
        column += step.1;
    }
    buffer.push(SEPARATOR);
}

/// Builds the separated buffer of every line on the board
///
/// Columns are read bottom-to-top, rows left-to-right starting from the
/// bottom row, and diagonals upwards from their anchor on the bottom row or
/// the side edge.
pub fn line_buffer(board: &Board) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(4 * ROWS * COLUMNS);
    let bottom = ROWS - 1;
    let last = SERIES_LEN - 1;

    for column in 0..COLUMNS {
        push_line(&mut buffer, board, (bottom, column), (-1, 0));
    }
    for row in (0..ROWS).rev() {
        push_line(&mut buffer, board, (row, 0), (0, 1));
    }

    // diagonals going up and to the left
    for column in last..COLUMNS {
        push_line(&mut buffer, board, (bottom, column), (-1, -1));
    }
    for row in (last..bottom).rev() {
        push_line(&mut buffer, board, (row, COLUMNS - 1), (-1, -1));
    }

    // diagonals going up and to the right
    for column in (0..=COLUMNS - SERIES_LEN).rev() {
        push_line(&mut buffer, board, (bottom, column), (-1, 1));
    }
    for row in (last..bottom).rev() {
        push_line(&mut buffer, board, (row, 0), (-1, 1));
    }

    buffer
}

fn has_series(buffer: &[u8], mark: u8) -> bool {
    buffer
        .windows(SERIES_LEN)
        .any(|window| window.iter().all(|&m| m == mark))
}

/// Returns the player with four in a line, checking player one first
pub fn winner(board: &Board) -> Option<Player> {
    let buffer = line_buffer(board);
    if has_series(&buffer, PLAYER_ONE_MARK) {
        Some(Player::One)
    } else if has_series(&buffer, PLAYER_TWO_MARK) {
        Some(Player::Two)
    } else {
        None
    }
}

/// Whether the game is over, either won or with a full board
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.side_to_move().is_none()
}

/// The final score of a finished game: a win for player one is positive,
/// a win for player two negative and a draw zero
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::One) => WIN_SCORE,
        Some(Player::Two) => -WIN_SCORE,
        None => 0,
    }
}
