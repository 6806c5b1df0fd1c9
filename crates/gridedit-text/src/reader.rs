//! Table reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gridedit_core::{Cell, Row, Table};
use tracing::debug;

use crate::error::{TextError, TextResult};
use crate::options::TextOptions;

/// Delimited text reader
pub struct TextReader;

impl TextReader {
    /// Read a file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &TextOptions) -> TextResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read everything from a reader into a table
    pub fn read<R: Read>(mut reader: R, options: &TextOptions) -> TextResult<Table> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::read_str(&input, options)
    }

    /// Parse a table from text. The result is balanced.
    ///
    /// ```
    /// use gridedit_text::{TextOptions, TextReader};
    ///
    /// let options = TextOptions::new(",").unwrap();
    /// let table = TextReader::read_str("a,\"b,c\"\nd\n", &options).unwrap();
    /// assert_eq!(table.text_at(0, 1), "b,c");
    /// assert_eq!(table.text_at(1, 1), "");
    /// ```
    pub fn read_str(input: &str, options: &TextOptions) -> TextResult<Table> {
        if input.is_empty() {
            return Err(TextError::EmptyInput);
        }

        let mut table = Table::new();
        let mut row = Row::new();
        let mut cell = String::new();
        let mut in_quotes = false;
        let mut line = 1;
        let mut at_row_start = true;

        let mut chars = input.chars();
        while let Some(c) = chars.next() {
            at_row_start = false;
            match c {
                '\\' => match chars.next() {
                    // An escaped line break outside quotes still ends the row
                    Some('\n') if !in_quotes => {
                        Self::finish_row(&mut table, &mut row, &mut cell)?;
                        line += 1;
                        at_row_start = true;
                    }
                    Some(escaped) => cell.push(escaped),
                    None => return Err(TextError::DanglingEscape { row: line }),
                },
                '"' => in_quotes = !in_quotes,
                '\n' if in_quotes => return Err(TextError::UnterminatedQuote { row: line }),
                '\n' => {
                    Self::finish_row(&mut table, &mut row, &mut cell)?;
                    line += 1;
                    at_row_start = true;
                }
                c if options.is_delimiter(c) && !in_quotes => {
                    row.push(Cell::new(std::mem::take(&mut cell)))?;
                }
                c => cell.push(c),
            }
        }

        if in_quotes {
            return Err(TextError::UnterminatedQuote { row: line });
        }
        if !at_row_start {
            Self::finish_row(&mut table, &mut row, &mut cell)?;
        }

        table.balance()?;
        debug!(
            rows = table.row_count(),
            cols = table.col_count(),
            "read table"
        );
        Ok(table)
    }

    fn finish_row(table: &mut Table, row: &mut Row, cell: &mut String) -> TextResult<()> {
        row.push(Cell::new(std::mem::take(cell)))?;
        table.push_row(std::mem::take(row))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(table: &Table) -> Vec<Vec<String>> {
        table
            .rows()
            .iter()
            .map(|r| r.cells().iter().map(|c| c.text().to_string()).collect())
            .collect()
    }

    fn comma() -> TextOptions {
        TextOptions::new(",").unwrap()
    }

    #[test]
    fn test_read_simple() {
        let table = TextReader::read_str("1,2\n3,4\n", &comma()).unwrap();
        assert_eq!(grid(&table), vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let table = TextReader::read_str("1,2\n3,4", &comma()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.text_at(1, 1), "4");
    }

    #[test]
    fn test_read_default_space_delimiter() {
        let table = TextReader::read_str("a b  c\n", &TextOptions::default()).unwrap();
        assert_eq!(grid(&table), vec![vec!["a", "b", "", "c"]]);
    }

    #[test]
    fn test_read_delimiter_set() {
        let options = TextOptions::new(":;").unwrap();
        let table = TextReader::read_str("a:b;c\n", &options).unwrap();
        assert_eq!(grid(&table), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_read_balances_rows() {
        let table = TextReader::read_str("a\nb,c,d\n", &comma()).unwrap();
        assert!(table.is_balanced());
        assert_eq!(table.col_count(), 3);
    }

    #[test]
    fn test_read_quotes_and_escapes() {
        let table =
            TextReader::read_str("\"a,b\",c\\,d,\\\"q\\\",\"x\\\\y\"\n", &comma()).unwrap();
        assert_eq!(grid(&table), vec![vec!["a,b", "c,d", "\"q\"", "x\\y"]]);
    }

    #[test]
    fn test_read_empty_cells_and_lines() {
        let table = TextReader::read_str(",\n\n", &comma()).unwrap();
        assert_eq!(grid(&table), vec![vec!["", ""], vec!["", ""]]);
    }

    #[test]
    fn test_escaped_newline_ends_row_outside_quotes() {
        let table = TextReader::read_str("a\\\nb\n", &comma()).unwrap();
        assert_eq!(grid(&table), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_escaped_newline_inside_quotes_is_kept() {
        let table = TextReader::read_str("\"a\\\nb\",c\n", &comma()).unwrap();
        assert_eq!(grid(&table), vec![vec!["a\nb", "c"]]);
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            TextReader::read_str("", &comma()),
            Err(TextError::EmptyInput)
        ));
        assert!(matches!(
            TextReader::read_str("a\n\"b,c\nd\n", &comma()),
            Err(TextError::UnterminatedQuote { row: 2 })
        ));
        assert!(matches!(
            TextReader::read_str("\"abc", &comma()),
            Err(TextError::UnterminatedQuote { row: 1 })
        ));
        assert!(matches!(
            TextReader::read_str("abc\\", &comma()),
            Err(TextError::DanglingEscape { row: 1 })
        ));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");
        std::fs::write(&path, "x y\nz\n").unwrap();

        let table = TextReader::read_file(&path, &TextOptions::default()).unwrap();
        assert_eq!(grid(&table), vec![vec!["x", "y"], vec!["z", ""]]);
    }
}
