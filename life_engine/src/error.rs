//! Error types for the life engine.

use thiserror::Error;

/// Everything that can go wrong when driving the grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A row/column pair that does not address a cell
    #[error("cell ({row}, {col}) is outside the {side}x{side} grid")]
    OutOfRange { row: usize, col: usize, side: usize },

    /// A pointer position left or above the canvas origin
    #[error("pointer ({x}, {y}) is outside the canvas")]
    OutsideCanvas { x: i32, y: i32 },

    /// Grid construction with no cells
    #[error("grid side must be at least 1, got {side}")]
    InvalidDimensions { side: usize },

    /// A thread panicked while holding the grid lock
    #[error("grid lock poisoned")]
    LockPoisoned,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, LifeError>;
