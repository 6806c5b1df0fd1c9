//! Error types for gridedit-core

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridedit-core
#[derive(Debug, Error)]
pub enum Error {
    /// Selection bounds are non-positive or out of order
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Register index outside 0-9
    #[error("Register index {0} out of range (expected 0-9)")]
    RegisterOutOfRange(usize),

    /// Cell address outside the current table extent
    #[error("Cell at row {row}, column {col} is outside the table")]
    CellOutOfBounds { row: usize, col: usize },

    /// A 0-based index has no successor, so the table cannot grow to reach it
    #[error("Index {0} is too large to address")]
    IndexOverflow(usize),

    /// Growing the table failed
    #[error("Memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl Error {
    /// Create a new selection error with a message
    pub fn invalid_selection<S: Into<String>>(msg: S) -> Self {
        Error::InvalidSelection(msg.into())
    }

    /// Length needed for 0-based `index` to exist
    pub(crate) fn len_for(index: usize) -> Result<usize> {
        index.checked_add(1).ok_or(Error::IndexOverflow(index))
    }
}
