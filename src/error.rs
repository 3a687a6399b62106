//! Typed failures of the engine

use thiserror::Error;

/// The ways a call into the engine can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The move references a cell outside the grid
    #[error("move ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    /// A move was requested for a position that is already over
    #[error("no legal move, the game is already over")]
    NoLegalMove,
}
