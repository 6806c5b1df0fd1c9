//! Text format options

use crate::error::{TextError, TextResult};

/// Delimiter set used when none is configured
pub const DEFAULT_DELIMITERS: &str = " ";

/// Options for reading and writing tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    delimiters: String,
}

impl TextOptions {
    /// Create options for a delimiter set.
    ///
    /// Every character of `delimiters` separates cells on input; the first
    /// one is written between cells on output.
    ///
    /// ```
    /// use gridedit_text::TextOptions;
    ///
    /// let options = TextOptions::new(",;").unwrap();
    /// assert!(options.is_delimiter(';'));
    /// assert_eq!(options.output_delimiter(), ',');
    ///
    /// assert!(TextOptions::new("").is_err());
    /// assert!(TextOptions::new("\"").is_err());
    /// ```
    pub fn new<S: Into<String>>(delimiters: S) -> TextResult<Self> {
        let delimiters = delimiters.into();
        if delimiters.is_empty() || delimiters.contains(['\\', '"', '\n']) {
            return Err(TextError::InvalidDelimiter(delimiters));
        }
        Ok(Self { delimiters })
    }

    /// The full delimiter set
    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    /// Check if `c` separates cells
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }

    /// Character written between cells
    pub fn output_delimiter(&self) -> char {
        self.delimiters
            .chars()
            .next()
            .unwrap_or(' ')
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }
}
