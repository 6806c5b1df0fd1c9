//! Table writer

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use gridedit_core::Table;
use tempfile::NamedTempFile;
use tracing::trace;

use crate::error::TextResult;
use crate::options::TextOptions;

/// Delimited text writer
pub struct TextWriter;

impl TextWriter {
    /// Write a table to a file, replacing its contents.
    ///
    /// The text is staged in a temporary file next to `path` and renamed
    /// over it, so a failed write leaves any existing file untouched.
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &TextOptions,
    ) -> TextResult<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        if let Ok(metadata) = fs::metadata(path) {
            staged.as_file().set_permissions(metadata.permissions())?;
        }
        Self::write(table, &mut staged, options)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| e.error)?;

        trace!(path = %path.display(), "file replaced");
        Ok(())
    }

    /// Write a table to a writer
    pub fn write<W: Write>(table: &Table, mut writer: W, options: &TextOptions) -> TextResult<()> {
        writer.write_all(Self::write_string(table, options).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render a table as text
    ///
    /// ```
    /// use gridedit_core::Table;
    /// use gridedit_text::{TextOptions, TextWriter};
    ///
    /// let table = Table::from_rows(vec![vec!["a b", "c"]]).unwrap();
    /// let text = TextWriter::write_string(&table, &TextOptions::default());
    /// assert_eq!(text, "\"a b\" c\n");
    /// ```
    pub fn write_string(table: &Table, options: &TextOptions) -> String {
        let delimiter = options.output_delimiter();
        let mut out = String::new();

        for row in table.rows() {
            for (i, cell) in row.cells().iter().enumerate() {
                if i > 0 {
                    out.push(delimiter);
                }
                out.push_str(&Self::escape_cell(cell.text(), options));
            }
            out.push('\n');
        }

        out
    }

    /// Quote and escape a single cell value
    fn escape_cell<'a>(text: &'a str, options: &TextOptions) -> Cow<'a, str> {
        let needs_quotes = text
            .chars()
            .any(|c| c == '"' || c == '\n' || options.is_delimiter(c));
        let needs_escapes = text.contains(['\\', '"', '\n']);

        if !needs_quotes && !needs_escapes {
            return Cow::Borrowed(text);
        }

        let mut escaped = String::with_capacity(text.len() + 2);
        if needs_quotes {
            escaped.push('"');
        }
        for c in text.chars() {
            if matches!(c, '\\' | '"' | '\n') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        if needs_quotes {
            escaped.push('"');
        }
        Cow::Owned(escaped)
    }
}
