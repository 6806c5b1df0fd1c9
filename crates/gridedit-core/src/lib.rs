//! # gridedit-core
//!
//! Core data structures for the gridedit table editor.
//!
//! This crate provides the fundamental types used throughout gridedit:
//! - [`Cell`] and [`Row`] - Growable text storage
//! - [`Table`] - The rectangular grid plus its selection state and registers
//! - [`Selection`] - A 1-based rectangular address within a table
//! - [`RegisterValue`] and [`Registers`] - The ten number-or-text variable slots
//!
//! ## Example
//!
//! ```rust
//! use gridedit_core::{Selection, Table};
//!
//! let mut table = Table::new();
//! table.set_text_at(1, 2, "hello").unwrap();
//!
//! // Writing outside the table grows it and keeps it rectangular
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.col_count(), 3);
//! assert_eq!(table.text_at(1, 2), "hello");
//!
//! table.set_selection(Selection::cell(2, 3).unwrap());
//! assert_eq!(table.selection().top_left(), (1, 2));
//! ```

pub mod cell;
pub mod error;
pub mod register;
pub mod row;
pub mod selection;
pub mod table;

// Re-exports for convenience
pub use cell::{format_number, parse_number, Cell};
pub use error::{Error, Result};
pub use register::{RegisterValue, Registers, REGISTER_COUNT};
pub use row::Row;
pub use selection::{Selection, SelectionCells};
pub use table::Table;
