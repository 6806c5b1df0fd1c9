//! # gridedit-command
//!
//! Command language for gridedit.
//!
//! This crate provides:
//! - Command parsing (command string → [`Program`])
//! - Program execution against a [`Table`](gridedit_core::Table)
//! - Aggregates (`sum`, `avg`, `count`, `len`) and content transforms
//!
//! ## Example
//!
//! ```rust
//! use gridedit_command::{execute, parse_commands, RunOptions};
//! use gridedit_core::Table;
//!
//! let mut table = Table::from_rows(vec![vec!["1", "2"], vec!["3", "4"]]).unwrap();
//! let program = parse_commands("[1,1,2,2];sum [1,3]", &table).unwrap();
//! execute(&program, &mut table, &RunOptions::default()).unwrap();
//!
//! assert_eq!(table.text_at(0, 2), "10");
//! ```

pub mod aggregate;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod options;
pub mod parser;

pub use aggregate::{Aggregate, Transform};
pub use error::{CommandError, CommandResult};
pub use instruction::{Instruction, Program};
pub use interpreter::{execute, ExecutionStats, Interpreter};
pub use options::RunOptions;
pub use parser::parse_commands;
