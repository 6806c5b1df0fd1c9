//! Error type for the one-shot editing helpers

use thiserror::Error;

/// Result type for gridedit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure from reading, parsing, running or writing
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the table text failed
    #[error(transparent)]
    Text(#[from] gridedit_text::TextError),

    /// The command string was invalid or execution aborted
    #[error(transparent)]
    Command(#[from] gridedit_command::CommandError),

    /// Table model error
    #[error(transparent)]
    Core(#[from] gridedit_core::Error),
}
