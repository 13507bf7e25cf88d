//! Error types for board construction and coordinate queries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Position text could not be decoded into a complete board.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Coordinate outside the 8x8 board.
    #[error("Square out of bounds: row {row}, column {col} (both must be 0-7)")]
    OutOfBounds { row: i8, col: i8 },
}

pub type Result<T> = std::result::Result<T, ChessError>;
