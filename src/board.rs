use anyhow::{anyhow, Result};

use crate::{error::EngineError, lines, COLUMNS, ROWS};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A cell to drop a tile into
///
/// Row 0 is the top of the board, row `ROWS - 1` the bottom.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A Connect 4 position
///
/// Boards are plain values: playing a move returns a new board and leaves
/// the original untouched. The player to move is never stored, it follows
/// from the number of tiles on the board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    // cells are stored top-to-bottom, left-to-right
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// The empty starting position
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    /// Creates a board from a string of 1-indexed column numbers, e.g. `"4453"`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLUMNS) => {
                    if lines::terminal(&board) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    let next = board
                        .landing_move(column - 1)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column))?;
                    board = board.apply_move(next)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: [[Cell; COLUMNS]; ROWS]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// The grid, top row first
    pub fn rows(&self) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells
    }

    pub fn num_moves(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn empty_cells(&self) -> usize {
        crate::CELLS - self.num_moves()
    }

    /// The player whose turn it is, or `None` once the board is full
    pub fn side_to_move(&self) -> Option<Player> {
        match self.num_moves() {
            n if n == crate::CELLS => None,
            n if n % 2 == 0 => Some(Player::One),
            _ => Some(Player::Two),
        }
    }

    /// The lowest empty cell of a column, if there is one
    pub fn landing_move(&self, column: usize) -> Option<Move> {
        if column >= COLUMNS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .map(|row| Move::new(row, column))
    }

    /// Every playable move, ordered by ascending column
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..COLUMNS)
            .filter_map(|column| self.landing_move(column))
            .collect()
    }

    /// Returns the board after the player to move drops a tile into `new_move`
    ///
    /// Playing into an occupied cell leaves the board as it was, so callers
    /// should only pass moves taken from [`Board::legal_moves`].
    pub fn apply_move(&self, new_move: Move) -> Result<Self, EngineError> {
        let Move { row, column } = new_move;
        if row >= ROWS || column >= COLUMNS {
            return Err(EngineError::OutOfBounds { row, column });
        }

        let mut next = *self;
        if let (Cell::Empty, Some(player)) = (self.cells[row][column], self.side_to_move()) {
            debug_assert!(
                row == ROWS - 1 || !self.cells[row + 1][column].is_empty(),
                "tile placed above an empty cell"
            );
            next.cells[row][column] = player.into();
        }
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
