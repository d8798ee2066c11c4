//! Error types for algoscope-core.

use thiserror::Error;

/// Result type for algoscope-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the input boundary, before anything reaches a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The algorithm id is not in the catalog.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A parameter fell outside its accepted range.
    #[error("{name} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Input could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
