//! Error types for Sudoku board input.

use thiserror::Error;

/// Result type for Sudoku input operations.
pub type Result<T> = std::result::Result<T, SudokuError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SudokuError {
    /// Only 4x4, 6x6 and 9x9 boards have a box layout.
    #[error("unsupported board size {0} (expected 4, 6 or 9)")]
    UnsupportedSize(usize),

    /// A cell holds something other than a digit in `1..=size` or a blank.
    #[error("row {row}, column {col}: invalid cell {token:?}")]
    InvalidCell { row: usize, col: usize, token: String },

    /// A row has the wrong number of cells.
    #[error("row {row}: expected {expected} cells, found {found}")]
    MalformedRow { row: usize, expected: usize, found: usize },
}
