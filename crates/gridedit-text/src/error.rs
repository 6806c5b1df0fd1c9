//! Text format error types

use thiserror::Error;

/// Result type for text reading and writing
pub type TextResult<T> = std::result::Result<T, TextError>;

/// Errors that can occur while reading or writing a table
#[derive(Debug, Error)]
pub enum TextError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input holds no data at all
    #[error("Input table is empty")]
    EmptyInput,

    /// Delimiter set is empty or contains a reserved character
    #[error("Invalid delimiter {0:?}: must be non-empty and must not contain '\\' or '\"'")]
    InvalidDelimiter(String),

    /// A quoted span reached the end of a row or of the input
    #[error("No closing quote on row {row}")]
    UnterminatedQuote { row: usize },

    /// Input ends with a lone backslash
    #[error("Escape character at end of input on row {row}")]
    DanglingEscape { row: usize },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridedit_core::Error),
}
