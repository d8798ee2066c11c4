//! Error types for edge-list parsing.

use thiserror::Error;

/// Result type for graph input operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while reading the plain-text edge list. Line numbers are
/// 1-based as a user would count them in the text box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Weight is not a non-negative integer.
    #[error("line {line}: invalid weight {token:?}")]
    InvalidWeight { line: usize, token: String },

    /// More than `from to weight` on one line.
    #[error("line {line}: expected at most 3 tokens, found {count}")]
    TooManyTokens { line: usize, count: usize },
}
