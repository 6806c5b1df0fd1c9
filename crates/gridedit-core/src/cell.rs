//! Cell type and numeric helpers
//!
//! Cells hold plain text. Numeric content is never stored separately; it is
//! inferred on demand with [`parse_number`] and written back with
//! [`format_number`].

use std::fmt;

/// A single table cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    text: String,
}

impl Cell {
    /// Create a new cell holding `text`
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the cell text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the cell text
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Replace the cell text with a formatted number
    pub fn set_number(&mut self, n: f64) {
        self.text = format_number(n);
    }

    /// Check if the cell holds no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters in the cell
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Interpret the cell as a number, if its whole text is numeric
    pub fn as_number(&self) -> Option<f64> {
        parse_number(&self.text)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// Parse cell text as a number.
///
/// Leading whitespace is skipped; everything after it must be a valid
/// `f64`. Empty text is never numeric.
///
/// ```
/// use gridedit_core::parse_number;
///
/// assert_eq!(parse_number("42"), Some(42.0));
/// assert_eq!(parse_number("  -1.5"), Some(-1.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("12abc"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Format a number for storage in a cell.
///
/// Integral values print without a fractional part; everything else uses
/// the shortest representation that round-trips.
///
/// ```
/// use gridedit_core::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(-3.0), "-3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
