//! Command error types

use thiserror::Error;

/// Result type for command operations
pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Errors that can occur while parsing or running commands
#[derive(Debug, Error)]
pub enum CommandError {
    /// A command did not match any known form
    #[error("Invalid command syntax in command {index} ({command:?}): {message}")]
    Parse {
        /// 1-based position of the command in the sequence
        index: usize,
        command: String,
        message: String,
    },

    /// A jump landed outside the program
    #[error("Jump by {offset} from command {at} leaves the program ({len} commands)")]
    JumpOutOfBounds {
        /// 1-based position of the jumping command
        at: usize,
        offset: isize,
        len: usize,
    },

    /// The configured step limit was reached
    #[error("Step limit of {0} executed commands exceeded")]
    StepLimitExceeded(u64),

    /// Core error
    #[error("{0}")]
    Core(#[from] gridedit_core::Error),
}
