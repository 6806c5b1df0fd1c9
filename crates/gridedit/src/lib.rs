//! # gridedit
//!
//! A Rust library for editing delimited text tables.
//!
//! A table is read from text, edited by a `;`-separated command string and
//! written back out. Commands address cells through a rectangular selection
//! and can use ten registers and relative jumps, which makes loops possible.
//!
//! ## Features
//!
//! - Quote- and escape-aware reading and writing with configurable delimiters
//! - Structural edits (`irow`, `arow`, `drow`, `icol`, `acol`, `dcol`)
//! - Content commands (`set`, `clear`, `swap`, `sum`, `avg`, `count`, `len`,
//!   `tolower`, `toupper`, `round`, `int`)
//! - Derived selections (`[min]`, `[max]`, `[find STR]`)
//! - Registers and control flow (`def`, `use`, `inc`, `sub`, `iszero`, `goto`)
//!
//! ## Example
//!
//! ```rust
//! use gridedit::prelude::*;
//!
//! let options = TextOptions::new(",").unwrap();
//! let output = edit_str("1,2\n3,4\n", "[1,1,2,2];sum [1,3]", &options, &RunOptions::default())
//!     .unwrap();
//!
//! assert_eq!(output, "1,2,10\n3,4,\n");
//! ```

pub mod edit;
pub mod error;
pub mod prelude;

pub use edit::{edit_file, edit_file_to, edit_str, TableEditExt};
pub use error::{Error, Result};

// Re-export core types
pub use gridedit_core::{
    format_number, parse_number, Cell, RegisterValue, Registers, Row, Selection, Table,
    REGISTER_COUNT,
};

// Re-export command types
pub use gridedit_command::{
    execute, parse_commands, Aggregate, CommandError, CommandResult, ExecutionStats, Instruction,
    Program, RunOptions, Transform,
};

// Re-export I/O types
pub use gridedit_text::{
    TextError, TextOptions, TextReader, TextResult, TextWriter, DEFAULT_DELIMITERS,
};

use std::path::Path;

/// Extension trait for Table to add file I/O
pub trait TableExt: Sized {
    /// Open a table from a delimited text file
    fn open<P: AsRef<Path>>(path: P, options: &TextOptions) -> Result<Self>;

    /// Save the table to a delimited text file
    fn save<P: AsRef<Path>>(&self, path: P, options: &TextOptions) -> Result<()>;
}

impl TableExt for Table {
    fn open<P: AsRef<Path>>(path: P, options: &TextOptions) -> Result<Table> {
        Ok(TextReader::read_file(path, options)?)
    }

    fn save<P: AsRef<Path>>(&self, path: P, options: &TextOptions) -> Result<()> {
        Ok(TextWriter::write_file(self, path, options)?)
    }
}
