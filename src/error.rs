//! Parse errors.

use thiserror::Error;

/// Errors returned by [`crate::parse`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no recognizable ingredient (blank, or quantities and
    /// parentheticals only).
    #[error("malformed ingredient line: {line:?}")]
    MalformedInput { line: String },
}

/// Result type for parse operations.
pub type ParseOutcome<T> = Result<T, ParseError>;
