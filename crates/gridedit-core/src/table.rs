//! Table type

use tracing::trace;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::register::Registers;
use crate::row::Row;
use crate::selection::{Selection, SelectionCells};

/// A growable grid of text cells with its editing state.
///
/// Rows and columns are addressed with 0-based indices here; the
/// [`Selection`] type carries the 1-based addresses used in command
/// strings. Mutating operations leave the table rectangular unless noted
/// otherwise; call [`Table::balance`] after the ones that don't.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
    /// Active selection
    selection: Selection,
    /// Scratch slot for `[set]` / `[_]`
    saved_selection: Selection,
    /// Variable registers `_0` - `_9`
    registers: Registers,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a balanced table from rows of text
    ///
    /// ```
    /// use gridedit_core::Table;
    ///
    /// let table = Table::from_rows(vec![vec!["a", "b"], vec!["c"]]).unwrap();
    /// assert_eq!(table.col_count(), 2);
    /// assert_eq!(table.text_at(1, 1), "");
    /// ```
    pub fn from_rows<R, S>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for row in rows {
            table.push_row(row.into_iter().collect())?;
        }
        table.balance()?;
        Ok(table)
    }

    // === Dimensions ===

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (length of the longest row)
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if every row has the same length
    pub fn is_balanced(&self) -> bool {
        let cols = self.col_count();
        self.rows.iter().all(|r| r.len() == cols)
    }

    // === Cell Access ===

    /// All rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a cell by 0-based indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cell(col))
    }

    /// Get a mutable cell by 0-based indices
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.cell_mut(col))
    }

    /// Cell text, or `""` for cells outside the table
    pub fn text_at(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).map(Cell::text).unwrap_or("")
    }

    /// 0-based cells of `selection` that lie inside the table, row by row
    pub fn existing_cells(&self, selection: &Selection) -> SelectionCells {
        selection.cells_within(self.row_count(), self.col_count())
    }

    /// Numeric cell content, or `None` for non-numeric or missing cells
    pub fn number_at(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col).and_then(Cell::as_number)
    }

    // === Cell Modification ===

    /// Set a cell's text, growing the table so the cell exists
    pub fn set_text_at<S: Into<String>>(&mut self, row: usize, col: usize, text: S) -> Result<()> {
        self.expand_to(row, col)?;
        let cell = self
            .cell_mut(row, col)
            .ok_or(Error::CellOutOfBounds { row, col })?;
        cell.set_text(text);
        Ok(())
    }

    /// Fill every cell of `selection` with `text`, growing the table as needed
    pub fn fill(&mut self, selection: &Selection, text: &str) -> Result<()> {
        let (last_row, last_col) = selection.bottom_right();
        self.expand_to(last_row, last_col)?;
        for (row, col) in selection.cells() {
            if let Some(cell) = self.cell_mut(row, col) {
                cell.set_text(text);
            }
        }
        Ok(())
    }

    /// Exchange the contents of two existing cells
    pub fn swap_cells(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<()> {
        for &(row, col) in &[a, b] {
            if self.cell(row, col).is_none() {
                return Err(Error::CellOutOfBounds { row, col });
            }
        }
        if a == b {
            return Ok(());
        }
        if a.0 == b.0 {
            self.rows[a.0].cells.swap(a.1, b.1);
        } else {
            let taken = std::mem::take(&mut self.rows[a.0].cells[a.1]);
            let other = std::mem::replace(&mut self.rows[b.0].cells[b.1], taken);
            self.rows[a.0].cells[a.1] = other;
        }
        Ok(())
    }

    // === Row/Column Operations ===

    /// Append a row at the bottom. The table may be unbalanced afterwards.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        self.rows.try_reserve(1)?;
        self.rows.push(row);
        Ok(())
    }

    /// Insert an empty row before 0-based row `before`.
    ///
    /// If `before` lies past the last row, empty rows are appended until it
    /// exists instead.
    pub fn insert_row(&mut self, before: usize) -> Result<()> {
        if before >= self.rows.len() {
            let len = Error::len_for(before)?;
            self.rows.try_reserve(len - self.rows.len())?;
            self.rows.resize_with(len, Row::new);
        } else {
            self.rows.try_reserve(1)?;
            self.rows.insert(before, Row::new());
        }
        trace!(before, rows = self.rows.len(), "inserted row");
        self.balance()
    }

    /// Delete 0-based rows `first..=last`, clamped to the table extent
    pub fn delete_rows(&mut self, first: usize, last: usize) {
        if first >= self.rows.len() || first > last {
            return;
        }
        let end = last.min(self.rows.len() - 1);
        self.rows.drain(first..=end);
        trace!(first, end, rows = self.rows.len(), "deleted rows");
    }

    /// Insert an empty column before 0-based column `before` in every row.
    ///
    /// Rows shorter than `before` are padded so the column exists.
    pub fn insert_col(&mut self, before: usize) -> Result<()> {
        for row in &mut self.rows {
            row.insert_empty(before)?;
        }
        trace!(before, cols = self.col_count(), "inserted column");
        self.balance()
    }

    /// Delete 0-based columns `first..=last` from every row, clamped to each row's length
    pub fn delete_cols(&mut self, first: usize, last: usize) {
        for row in &mut self.rows {
            row.remove_range(first, last);
        }
        trace!(first, last, cols = self.col_count(), "deleted columns");
    }

    /// Pad every row with empty cells up to the longest row's length
    pub fn balance(&mut self) -> Result<()> {
        let cols = self.col_count();
        for row in &mut self.rows {
            row.pad_to(cols)?;
        }
        Ok(())
    }

    /// Remove trailing columns in which every cell is empty.
    ///
    /// At least one column is kept on a non-empty table.
    pub fn trim_trailing_empty_columns(&mut self) {
        let keep = self
            .rows
            .iter()
            .filter_map(Row::last_non_empty)
            .max()
            .map_or(1, |last| last + 1);
        for row in &mut self.rows {
            row.truncate(keep);
        }
    }

    /// Grow the table so 0-based cell (`row`, `col`) exists, then balance it
    pub fn expand_to(&mut self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = (Error::len_for(row)?, Error::len_for(col)?);
        if rows > self.rows.len() {
            self.rows.try_reserve(rows - self.rows.len())?;
            self.rows.resize_with(rows, Row::new);
        }
        self.rows[row].pad_to(cols)?;
        self.balance()
    }

    // === Selection State ===

    /// The active selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the active selection
    pub fn set_selection(&mut self, selection: Selection) {
        trace!(%selection, "selection changed");
        self.selection = selection;
    }

    /// The selection stored by [`Table::save_selection`]
    pub fn saved_selection(&self) -> Selection {
        self.saved_selection
    }

    /// Store the active selection in the scratch slot
    pub fn save_selection(&mut self) {
        self.saved_selection = self.selection;
    }

    /// Make the stored selection active again
    pub fn restore_selection(&mut self) {
        self.set_selection(self.saved_selection);
    }

    // === Registers ===

    /// The register file
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Mutable access to the register file
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }
}
