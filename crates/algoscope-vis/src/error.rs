//! Error types for the visualization server.

use thiserror::Error;

/// Result type for session and server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling commands or serving.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected parameter or unknown algorithm
    #[error(transparent)]
    Input(#[from] algoscope_core::Error),

    /// Edge list could not be parsed
    #[error("Graph input error: {0}")]
    Graph(#[from] algoscope_graph::ParseError),

    /// Sudoku board could not be parsed
    #[error("Sudoku input error: {0}")]
    Sudoku(#[from] algoscope_puzzles::SudokuError),

    /// Bad environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Background solver task panicked or was cancelled
    #[error("Solver task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Input(_) | Error::Graph(_) | Error::Sudoku(_) | Error::Serialization(_))
    }
}
