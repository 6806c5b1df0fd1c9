//! One-shot table editing
//!
//! Ties the reader, the command language and the writer together:
//! read, parse, execute, trim, write. Nothing is written when any stage
//! fails.
//!
//! # Example
//!
//! ```rust
//! use gridedit::prelude::*;
//!
//! let mut table = Table::from_rows(vec![vec!["b", "a"]]).unwrap();
//! let stats = table.run_commands("[1,1];swap [1,2]", &RunOptions::default()).unwrap();
//!
//! assert_eq!(table.text_at(0, 0), "a");
//! assert_eq!(stats.steps, 2);
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::{
    execute, parse_commands, ExecutionStats, Result, RunOptions, Table, TableExt, TextOptions,
    TextReader, TextWriter,
};

/// Extension trait for Table to run command strings
pub trait TableEditExt {
    /// Parse `commands` against this table and execute them.
    ///
    /// Parsing completes before anything runs, so a syntax error leaves the
    /// table untouched.
    fn run_commands(&mut self, commands: &str, options: &RunOptions) -> Result<ExecutionStats>;
}

impl TableEditExt for Table {
    fn run_commands(&mut self, commands: &str, options: &RunOptions) -> Result<ExecutionStats> {
        let program = parse_commands(commands, self)?;
        let stats = execute(&program, self, options)?;
        debug!(steps = stats.steps, jumps = stats.jumps, "commands executed");
        Ok(stats)
    }
}

/// Edit table text in memory and return the new text
pub fn edit_str(
    input: &str,
    commands: &str,
    text_options: &TextOptions,
    run_options: &RunOptions,
) -> Result<String> {
    let mut table = TextReader::read_str(input, text_options)?;
    table.run_commands(commands, run_options)?;
    table.trim_trailing_empty_columns();
    Ok(TextWriter::write_string(&table, text_options))
}

/// Edit a file in place. The file is only rewritten when every stage succeeds.
pub fn edit_file<P: AsRef<Path>>(
    path: P,
    commands: &str,
    text_options: &TextOptions,
    run_options: &RunOptions,
) -> Result<()> {
    let path = path.as_ref();
    edit_file_to(path, path, commands, text_options, run_options)
}

/// Edit `input` and write the result to `output`
pub fn edit_file_to<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    commands: &str,
    text_options: &TextOptions,
    run_options: &RunOptions,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let mut table = Table::open(input, text_options)?;
    table.run_commands(commands, run_options)?;
    table.trim_trailing_empty_columns();
    table.save(output, text_options)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = table.row_count(),
        cols = table.col_count(),
        "table written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comma() -> TextOptions {
        TextOptions::new(",").unwrap()
    }

    #[test]
    fn test_edit_str_trims_empty_columns() {
        let output = edit_str("a,b,,\n", "[1,2];clear", &comma(), &RunOptions::default()).unwrap();
        assert_eq!(output, "a\n");
    }

    #[test]
    fn test_edit_str_keeps_one_column() {
        let output = edit_str("a\nb\n", "[_,1];clear", &comma(), &RunOptions::default()).unwrap();
        assert_eq!(output, "\n\n");
    }

    #[test]
    fn test_run_commands_parse_error_leaves_table() {
        let mut table = Table::from_rows(vec![vec!["x"]]).unwrap();
        let before = table.clone();
        assert!(table
            .run_commands("set y;nonsense", &RunOptions::default())
            .is_err());
        assert_eq!(table, before);
    }
}
