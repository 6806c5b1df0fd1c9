//! Variable registers
//!
//! A table carries [`REGISTER_COUNT`] registers, addressed `_0` to `_9` in
//! command strings. Each one holds either a number or a piece of text,
//! never both.

use crate::cell::{format_number, parse_number, Cell};
use crate::error::{Error, Result};

/// Number of registers in a [`Registers`] file
pub const REGISTER_COUNT: usize = 10;

/// Value held by a single register
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterValue {
    Number(f64),
    Text(String),
}

impl Default for RegisterValue {
    fn default() -> Self {
        RegisterValue::Text(String::new())
    }
}

impl RegisterValue {
    /// Capture a cell: numeric cells become numbers, everything else text
    pub fn from_cell(cell: &Cell) -> Self {
        match cell.as_number() {
            Some(n) => RegisterValue::Number(n),
            None => RegisterValue::Text(cell.text().to_string()),
        }
    }

    /// Coerce to a number for arithmetic.
    ///
    /// Numeric text yields its value; any other text yields 0.
    pub fn to_number(&self) -> f64 {
        match self {
            RegisterValue::Number(n) => *n,
            RegisterValue::Text(s) => parse_number(s).unwrap_or(0.0),
        }
    }

    /// Check if the register holds the number zero
    pub fn is_zero(&self) -> bool {
        matches!(self, RegisterValue::Number(n) if *n == 0.0)
    }

    /// Increment a numeric register; a text register becomes 1
    pub fn increment(&mut self) {
        *self = match self {
            RegisterValue::Number(n) => RegisterValue::Number(*n + 1.0),
            RegisterValue::Text(_) => RegisterValue::Number(1.0),
        };
    }

    /// Text to write into a cell
    pub fn to_cell_text(&self) -> String {
        match self {
            RegisterValue::Number(n) => format_number(*n),
            RegisterValue::Text(s) => s.clone(),
        }
    }
}

/// The register file of a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registers {
    slots: [RegisterValue; REGISTER_COUNT],
}

impl Registers {
    /// Create a register file with every slot holding empty text
    pub fn new() -> Self {
        Self::default()
    }

    /// Read register `index`
    pub fn get(&self, index: usize) -> Result<&RegisterValue> {
        self.slots
            .get(index)
            .ok_or(Error::RegisterOutOfRange(index))
    }

    /// Mutable access to register `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut RegisterValue> {
        self.slots
            .get_mut(index)
            .ok_or(Error::RegisterOutOfRange(index))
    }

    /// Overwrite register `index`
    pub fn set(&mut self, index: usize, value: RegisterValue) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}
