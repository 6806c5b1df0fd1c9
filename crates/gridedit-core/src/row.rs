//! Row type

use crate::cell::Cell;
use crate::error::{Error, Result};

/// An ordered, growable sequence of cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub(crate) cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from existing cells
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell by 0-based column index
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Get a mutable cell by 0-based column index
    pub fn cell_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    /// All cells in order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Append a cell at the end of the row
    pub fn push(&mut self, cell: Cell) -> Result<()> {
        self.cells.try_reserve(1)?;
        self.cells.push(cell);
        Ok(())
    }

    /// Append empty cells until the row holds `len` cells
    pub fn pad_to(&mut self, len: usize) -> Result<()> {
        if len > self.cells.len() {
            self.cells.try_reserve(len - self.cells.len())?;
            self.cells.resize_with(len, Cell::empty);
        }
        Ok(())
    }

    /// Insert an empty cell before 0-based column `col`.
    ///
    /// A row shorter than `col` is padded so that column `col` exists.
    pub fn insert_empty(&mut self, col: usize) -> Result<()> {
        if col > self.cells.len() {
            return self.pad_to(Error::len_for(col)?);
        }
        self.cells.try_reserve(1)?;
        self.cells.insert(col, Cell::empty());
        Ok(())
    }

    /// Remove 0-based columns `first..=last`, clamped to the row length
    pub fn remove_range(&mut self, first: usize, last: usize) {
        if first >= self.cells.len() || first > last {
            return;
        }
        let end = last.min(self.cells.len() - 1);
        self.cells.drain(first..=end);
    }

    /// Shorten the row to at most `len` cells
    pub fn truncate(&mut self, len: usize) {
        self.cells.truncate(len);
    }

    /// Index of the last cell with content, if any
    pub fn last_non_empty(&self) -> Option<usize> {
        self.cells.iter().rposition(|c| !c.is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_cells(iter.into_iter().map(Cell::new).collect())
    }
}
