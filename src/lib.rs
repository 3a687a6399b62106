//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead, chosen from how full
//! the board is, and scores the positions at the search horizon with a
//! pattern-matching heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("112233")?;
//! let outcome = Solver::new(board).solve()?;
//!
//! // the first player completes the bottom row
//! assert_eq!(outcome.result.best_move.map(|m| m.column), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod lines;

pub mod heuristic;

pub mod solver;


pub use board::{Board, Cell, Move, Player};
pub use error::EngineError;
pub use solver::{choose_move, SearchOutcome, SearchResult, Solver};

/// The number of rows of the game board
pub const ROWS: usize = 6;

/// The number of columns of the game board
pub const COLUMNS: usize = 7;

/// The total number of cells on the game board
pub const CELLS: usize = ROWS * COLUMNS;

/// The number of marks in a line needed to win
pub const SERIES_LEN: usize = 4;

// a line of four has to fit on the board in every direction
const_assert!(ROWS >= SERIES_LEN);
const_assert!(COLUMNS >= SERIES_LEN);
