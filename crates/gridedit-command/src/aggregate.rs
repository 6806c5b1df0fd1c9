//! Aggregates and content transforms over a selection

use std::fmt;

use gridedit_core::{Cell, Selection, Table};

/// Scalar computed over the current selection and written to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    /// Sum of numeric cells (0 when there are none)
    Sum,
    /// Mean of numeric cells (NaN when there are none)
    Avg,
    /// Number of non-empty cells
    Count,
    /// Total characters across all cells
    Len,
}

impl Aggregate {
    /// Command keyword
    pub fn name(&self) -> &'static str {
        match self {
            Aggregate::Sum => "sum",
            Aggregate::Avg => "avg",
            Aggregate::Count => "count",
            Aggregate::Len => "len",
        }
    }

    /// Look up an aggregate by its command keyword
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sum" => Some(Aggregate::Sum),
            "avg" => Some(Aggregate::Avg),
            "count" => Some(Aggregate::Count),
            "len" => Some(Aggregate::Len),
            _ => None,
        }
    }

    /// Compute the aggregate over `selection`.
    ///
    /// Cells outside the table count as empty, so only the part of the
    /// selection inside the table is visited.
    pub fn evaluate(&self, table: &Table, selection: &Selection) -> f64 {
        match self {
            Aggregate::Sum => numbers(table, selection).sum(),
            Aggregate::Avg => {
                let (sum, count) =
                    numbers(table, selection).fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
                if count == 0 {
                    f64::NAN
                } else {
                    sum / count as f64
                }
            }
            Aggregate::Count => table
                .existing_cells(selection)
                .filter(|&(r, c)| !table.text_at(r, c).is_empty())
                .count() as f64,
            Aggregate::Len => table
                .existing_cells(selection)
                .filter_map(|(r, c)| table.cell(r, c))
                .map(Cell::char_count)
                .sum::<usize>() as f64,
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn numbers<'a>(table: &'a Table, selection: &Selection) -> impl Iterator<Item = f64> + 'a {
    table
        .existing_cells(selection)
        .filter_map(move |(r, c)| table.number_at(r, c))
}

/// In-place rewrite of every existing cell in the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    ToLower,
    ToUpper,
    /// Round numeric cells half away from zero
    Round,
    /// Truncate numeric cells toward zero
    Int,
}

impl Transform {
    /// Command keyword
    pub fn name(&self) -> &'static str {
        match self {
            Transform::ToLower => "tolower",
            Transform::ToUpper => "toupper",
            Transform::Round => "round",
            Transform::Int => "int",
        }
    }

    /// Look up a transform by its command keyword
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tolower" => Some(Transform::ToLower),
            "toupper" => Some(Transform::ToUpper),
            "round" => Some(Transform::Round),
            "int" => Some(Transform::Int),
            _ => None,
        }
    }

    /// Rewrite a single cell
    pub fn apply(&self, cell: &mut Cell) {
        match self {
            Transform::ToLower => {
                let lowered = cell.text().to_lowercase();
                cell.set_text(lowered);
            }
            Transform::ToUpper => {
                let raised = cell.text().to_uppercase();
                cell.set_text(raised);
            }
            Transform::Round => {
                if let Some(n) = cell.as_number() {
                    cell.set_number(n.round());
                }
            }
            Transform::Int => {
                if let Some(n) = cell.as_number() {
                    cell.set_number(n.trunc());
                }
            }
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
