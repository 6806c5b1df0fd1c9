//! Instruction types
//!
//! A command string parses into a [`Program`]: a flat list of
//! [`Instruction`]s with every operand already resolved.

use std::fmt;

use gridedit_core::Selection;

use crate::aggregate::{Aggregate, Transform};

/// A single parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    // === Selection ===
    /// `[r,c]`, `[r1,c1,r2,c2]` and their wildcard forms
    Select(Selection),
    /// `[min]`
    SelectMin,
    /// `[max]`
    SelectMax,
    /// `[find STR]`
    Find(String),
    /// `[set]`
    SaveSelection,
    /// `[_]`
    RestoreSelection,

    // === Structure ===
    /// `irow`
    InsertRow,
    /// `arow`
    AppendRow,
    /// `drow`
    DeleteRows,
    /// `icol`
    InsertCol,
    /// `acol`
    AppendCol,
    /// `dcol`
    DeleteCols,

    // === Content ===
    /// `set STR`
    Set(String),
    /// `clear`
    Clear,
    /// `swap [r,c]`
    Swap(Selection),
    /// `sum`, `avg`, `count`, `len` with their target
    Aggregate { kind: Aggregate, target: Selection },
    /// `tolower`, `toupper`, `round`, `int`
    Transform(Transform),

    // === Registers ===
    /// `def _N`
    Def(usize),
    /// `use _N`
    Use(usize),
    /// `inc _N`
    Inc(usize),

    // === Control flow ===
    /// `goto ±N`
    Goto(isize),
    /// `iszero _N ±M`
    IsZero { register: usize, offset: isize },
    /// `sub _N _M`
    Sub { target: usize, operand: usize },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Select(sel) => write!(f, "{}", sel),
            Instruction::SelectMin => f.write_str("[min]"),
            Instruction::SelectMax => f.write_str("[max]"),
            Instruction::Find(s) => write!(f, "[find {}]", quote_literal(s)),
            Instruction::SaveSelection => f.write_str("[set]"),
            Instruction::RestoreSelection => f.write_str("[_]"),
            Instruction::InsertRow => f.write_str("irow"),
            Instruction::AppendRow => f.write_str("arow"),
            Instruction::DeleteRows => f.write_str("drow"),
            Instruction::InsertCol => f.write_str("icol"),
            Instruction::AppendCol => f.write_str("acol"),
            Instruction::DeleteCols => f.write_str("dcol"),
            Instruction::Set(s) => write!(f, "set {}", quote_literal(s)),
            Instruction::Clear => f.write_str("clear"),
            Instruction::Swap(target) => write!(f, "swap {}", target),
            Instruction::Aggregate { kind, target } => write!(f, "{} {}", kind, target),
            Instruction::Transform(t) => write!(f, "{}", t),
            Instruction::Def(r) => write!(f, "def _{}", r),
            Instruction::Use(r) => write!(f, "use _{}", r),
            Instruction::Inc(r) => write!(f, "inc _{}", r),
            Instruction::Goto(offset) => write!(f, "goto {:+}", offset),
            Instruction::IsZero { register, offset } => {
                write!(f, "iszero _{} {:+}", register, offset)
            }
            Instruction::Sub { target, operand } => write!(f, "sub _{} _{}", target, operand),
        }
    }
}

/// Render a string literal the way the parser reads it back
fn quote_literal(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// A parsed, validated command sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from instructions
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// All instructions in order
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the instruction at `index`
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
