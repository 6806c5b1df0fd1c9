//! Selection type for rectangular table addresses

use std::fmt;

use crate::error::{Error, Result};

/// A closed rectangle of cells, 1-based and inclusive on both ends.
///
/// A selection always satisfies `1 <= r1 <= r2` and `1 <= c1 <= c2`; the
/// constructors reject anything else. It may reach past the current table
/// extent: commands that read treat missing cells as empty, commands that
/// write grow the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    r1: usize,
    c1: usize,
    r2: usize,
    c2: usize,
}

impl Selection {
    /// Create a selection from 1-based bounds
    ///
    /// # Examples
    /// ```
    /// use gridedit_core::Selection;
    ///
    /// let sel = Selection::new(1, 2, 3, 4).unwrap();
    /// assert_eq!(sel.row_count(), 3);
    /// assert_eq!(sel.col_count(), 3);
    ///
    /// assert!(Selection::new(0, 1, 1, 1).is_err());
    /// assert!(Selection::new(2, 1, 1, 1).is_err());
    /// ```
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Result<Self> {
        if r1 == 0 || c1 == 0 || r2 == 0 || c2 == 0 {
            return Err(Error::invalid_selection(format!(
                "[{},{},{},{}]: indices must be >= 1",
                r1, c1, r2, c2
            )));
        }
        if r1 > r2 || c1 > c2 {
            return Err(Error::invalid_selection(format!(
                "[{},{},{},{}]: start must not come after end",
                r1, c1, r2, c2
            )));
        }
        Ok(Self { r1, c1, r2, c2 })
    }

    /// Create a single-cell selection from 1-based indices
    pub fn cell(row: usize, col: usize) -> Result<Self> {
        Self::new(row, col, row, col)
    }

    /// First row (1-based)
    pub fn r1(&self) -> usize {
        self.r1
    }

    /// First column (1-based)
    pub fn c1(&self) -> usize {
        self.c1
    }

    /// Last row (1-based)
    pub fn r2(&self) -> usize {
        self.r2
    }

    /// Last column (1-based)
    pub fn c2(&self) -> usize {
        self.c2
    }

    /// Number of rows covered
    pub fn row_count(&self) -> usize {
        self.r2 - self.r1 + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> usize {
        self.c2 - self.c1 + 1
    }

    /// Check if the selection covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.r1 == self.r2 && self.c1 == self.c2
    }

    /// Top-left corner as 0-based (row, col)
    pub fn top_left(&self) -> (usize, usize) {
        (self.r1 - 1, self.c1 - 1)
    }

    /// Bottom-right corner as 0-based (row, col)
    pub fn bottom_right(&self) -> (usize, usize) {
        (self.r2 - 1, self.c2 - 1)
    }

    /// Intersect with the first `rows` rows and `cols` columns.
    ///
    /// Returns `None` when nothing of the selection lies inside that extent.
    pub fn clamp_to(&self, rows: usize, cols: usize) -> Option<Self> {
        if self.r1 > rows || self.c1 > cols {
            return None;
        }
        Some(Self {
            r2: self.r2.min(rows),
            c2: self.c2.min(cols),
            ..*self
        })
    }

    /// Iterate over 0-based (row, col) pairs, row by row
    pub fn cells(&self) -> SelectionCells {
        SelectionCells {
            selection: *self,
            row: self.r1 - 1,
            col: self.c1 - 1,
        }
    }

    /// Iterate over the cells that also lie inside a `rows` x `cols` extent
    pub fn cells_within(&self, rows: usize, cols: usize) -> SelectionCells {
        match self.clamp_to(rows, cols) {
            Some(clamped) => clamped.cells(),
            None => SelectionCells {
                selection: *self,
                row: self.r2,
                col: self.c1 - 1,
            },
        }
    }
}

impl Default for Selection {
    /// The cell in the first row and column
    fn default() -> Self {
        Self {
            r1: 1,
            c1: 1,
            r2: 1,
            c2: 1,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "[{},{}]", self.r1, self.c1)
        } else {
            write!(f, "[{},{},{},{}]", self.r1, self.c1, self.r2, self.c2)
        }
    }
}

/// Iterator over the cells of a selection
pub struct SelectionCells {
    selection: Selection,
    row: usize,
    col: usize,
}

impl Iterator for SelectionCells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.selection.r2 {
            return None;
        }

        let item = (self.row, self.col);

        self.col += 1;
        if self.col >= self.selection.c2 {
            self.col = self.selection.c1 - 1;
            self.row += 1;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.row >= self.selection.r2 {
            return (0, Some(0));
        }
        let rows_after = self.selection.r2 - self.row - 1;
        let remaining = rows_after
            .checked_mul(self.selection.col_count())
            .and_then(|n| n.checked_add(self.selection.c2 - self.col));
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_cell() {
        let sel = Selection::cell(3, 2).unwrap();
        assert!(sel.is_single_cell());
        assert_eq!(sel, Selection::new(3, 2, 3, 2).unwrap());
        assert_eq!(sel.top_left(), (2, 1));
        assert_eq!(sel.to_string(), "[3,2]");
    }

    #[test]
    fn test_invalid_selections() {
        assert!(Selection::cell(0, 1).is_err());
        assert!(Selection::cell(1, 0).is_err());
        assert!(Selection::new(1, 3, 1, 2).is_err());
        assert!(Selection::new(4, 1, 3, 1).is_err());
    }

    #[test]
    fn test_clamp_to() {
        let sel = Selection::new(2, 2, 5, 6).unwrap();
        assert_eq!(sel.clamp_to(3, 4), Some(Selection::new(2, 2, 3, 4).unwrap()));
        assert_eq!(sel.clamp_to(10, 10), Some(sel));
        assert_eq!(sel.clamp_to(1, 10), None);
        assert_eq!(sel.clamp_to(10, 1), None);
    }

    #[test]
    fn test_cells_within() {
        let sel = Selection::new(1, 2, 3, 3).unwrap();
        let cells: Vec<_> = sel.cells_within(2, 2).collect();
        assert_eq!(cells, vec![(0, 1), (1, 1)]);
        assert_eq!(sel.cells_within(0, 0).next(), None);

        let huge = Selection::new(1, 1, 1_000_000, 1_000_000).unwrap();
        assert_eq!(huge.cells_within(2, 2).count(), 4);
    }

    #[test]
    fn test_size_hint_saturates_on_huge_selection() {
        let sel = Selection::new(1, 1, usize::MAX, usize::MAX).unwrap();
        assert_eq!(sel.cells().size_hint(), (usize::MAX, None));

        let mut iter = Selection::new(1, 1, 1, usize::MAX).unwrap().cells();
        iter.next();
        assert_eq!(iter.size_hint(), (usize::MAX - 1, Some(usize::MAX - 1)));
    }

    #[test]
    fn test_cells_iterator() {
        let sel = Selection::new(1, 1, 2, 2).unwrap();
        let cells: Vec<_> = sel.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(sel.cells().size_hint(), (4, Some(4)));

        let mut iter = Selection::new(2, 3, 3, 4).unwrap().cells();
        assert_eq!(iter.next(), Some((1, 2)));
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_display_range() {
        let sel = Selection::new(1, 2, 5, 6).unwrap();
        assert_eq!(sel.to_string(), "[1,2,5,6]");
    }
}
