//! # gridedit-text
//!
//! Reader and writer for the delimited text tables gridedit edits.
//!
//! Rows end with a newline and cells are split by any character of a
//! configurable delimiter set. Double quotes toggle quoting anywhere in a
//! cell, and a backslash escapes the character after it.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{TextError, TextResult};
pub use options::{TextOptions, DEFAULT_DELIMITERS};
pub use reader::TextReader;
pub use writer::TextWriter;
