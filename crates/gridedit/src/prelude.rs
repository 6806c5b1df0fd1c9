//! Prelude module - common imports for gridedit users
//!
//! ```rust
//! use gridedit::prelude::*;
//! ```

pub use crate::{
    // One-shot helpers
    edit_file,
    edit_file_to,
    edit_str,
    // Error types
    Error,
    ExecutionStats,
    Result,
    RunOptions,
    Selection,
    // Main types
    Table,
    // Extension traits
    TableEditExt,
    TableExt,
    // I/O types
    TextOptions,
    TextReader,
    TextWriter,
};
