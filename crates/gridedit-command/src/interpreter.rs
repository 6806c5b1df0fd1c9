//! Program interpreter
//!
//! Runs a [`Program`] against a [`Table`]. The table owns all mutable
//! state (cells, active and saved selection, registers); the interpreter
//! only tracks the program counter.

use gridedit_core::{format_number, RegisterValue, Selection, Table};
use tracing::{debug, warn};

use crate::error::{CommandError, CommandResult};
use crate::instruction::{Instruction, Program};
use crate::options::RunOptions;

/// Counters collected during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Instructions executed
    pub steps: u64,
    /// Jumps taken by `goto` and `iszero`
    pub jumps: u64,
}

/// Run `program` against `table`
///
/// # Example
/// ```rust
/// use gridedit_command::{execute, parse_commands, RunOptions};
/// use gridedit_core::Table;
///
/// let mut table = Table::from_rows(vec![vec!["7"], vec![""]]).unwrap();
/// let program = parse_commands("def _0;[2,1];use _0", &table).unwrap();
/// let stats = execute(&program, &mut table, &RunOptions::default()).unwrap();
///
/// assert_eq!(table.text_at(1, 0), "7");
/// assert_eq!(stats.steps, 3);
/// ```
pub fn execute(
    program: &Program,
    table: &mut Table,
    options: &RunOptions,
) -> CommandResult<ExecutionStats> {
    Interpreter::new(program, options).run(table)
}

/// What to do after an instruction
enum Flow {
    Next,
    Jump(isize),
}

/// Executes one program with fixed options
pub struct Interpreter<'a> {
    program: &'a Program,
    options: &'a RunOptions,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter for `program`
    pub fn new(program: &'a Program, options: &'a RunOptions) -> Self {
        Self { program, options }
    }

    /// Run until execution falls off the end of the program
    pub fn run(&self, table: &mut Table) -> CommandResult<ExecutionStats> {
        let mut stats = ExecutionStats::default();
        let mut pc = 0;

        while let Some(instruction) = self.program.get(pc) {
            if let Some(limit) = self.options.step_limit {
                if stats.steps >= limit {
                    return Err(CommandError::StepLimitExceeded(limit));
                }
            }

            debug!(pc, %instruction, "executing");
            let flow = Self::step(instruction, table)?;
            table.balance()?;
            stats.steps += 1;

            pc = match flow {
                Flow::Next => pc + 1,
                Flow::Jump(offset) => {
                    stats.jumps += 1;
                    self.resolve_jump(pc, offset)?
                }
            };
        }

        debug!(steps = stats.steps, jumps = stats.jumps, "program finished");
        Ok(stats)
    }

    /// Target of a jump by `offset` from `pc`. Landing just past the last
    /// instruction ends the run normally.
    fn resolve_jump(&self, pc: usize, offset: isize) -> CommandResult<usize> {
        let len = self.program.len();
        let out_of_bounds = || CommandError::JumpOutOfBounds {
            at: pc + 1,
            offset,
            len,
        };

        let target = isize::try_from(pc)
            .ok()
            .and_then(|pc| pc.checked_add(offset))
            .ok_or_else(out_of_bounds)?;
        match usize::try_from(target) {
            Ok(target) if target <= len => Ok(target),
            _ => Err(out_of_bounds()),
        }
    }

    fn step(instruction: &Instruction, table: &mut Table) -> CommandResult<Flow> {
        let selection = table.selection();

        match instruction {
            // === Selection ===
            Instruction::Select(sel) => table.set_selection(*sel),
            Instruction::SelectMin => Self::select_extremum(table, |n, best| n < best, "min")?,
            Instruction::SelectMax => Self::select_extremum(table, |n, best| n > best, "max")?,
            Instruction::Find(needle) => {
                let found = table
                    .existing_cells(&selection)
                    .find(|&(r, c)| table.text_at(r, c).contains(needle.as_str()));
                match found {
                    Some((r, c)) => table.set_selection(Selection::cell(r + 1, c + 1)?),
                    None => warn!(%selection, needle = %needle, "find matched nothing"),
                }
            }
            Instruction::SaveSelection => table.save_selection(),
            Instruction::RestoreSelection => table.restore_selection(),

            // === Structure ===
            Instruction::InsertRow => table.insert_row(selection.r1() - 1)?,
            Instruction::AppendRow => table.insert_row(selection.r2())?,
            Instruction::DeleteRows => table.delete_rows(selection.r1() - 1, selection.r2() - 1),
            Instruction::InsertCol => table.insert_col(selection.c1() - 1)?,
            Instruction::AppendCol => table.insert_col(selection.c2())?,
            Instruction::DeleteCols => table.delete_cols(selection.c1() - 1, selection.c2() - 1),

            // === Content ===
            Instruction::Set(text) => table.fill(&selection, text)?,
            Instruction::Clear => table.fill(&selection, "")?,
            Instruction::Swap(target) => {
                let target = target.top_left();
                let (last_row, last_col) = selection.bottom_right();
                table.expand_to(last_row.max(target.0), last_col.max(target.1))?;
                for cell in selection.cells() {
                    table.swap_cells(cell, target)?;
                }
            }
            Instruction::Aggregate { kind, target } => {
                let value = kind.evaluate(table, &selection);
                table.fill(target, &format_number(value))?;
            }
            Instruction::Transform(transform) => {
                for (r, c) in table.existing_cells(&selection) {
                    if let Some(cell) = table.cell_mut(r, c) {
                        transform.apply(cell);
                    }
                }
            }

            // === Registers ===
            Instruction::Def(register) => {
                let (r, c) = selection.top_left();
                let value = table
                    .cell(r, c)
                    .map(RegisterValue::from_cell)
                    .unwrap_or_default();
                table.registers_mut().set(*register, value)?;
            }
            Instruction::Use(register) => {
                let text = table.registers().get(*register)?.to_cell_text();
                table.fill(&selection, &text)?;
            }
            Instruction::Inc(register) => table.registers_mut().get_mut(*register)?.increment(),

            // === Control flow ===
            Instruction::Goto(offset) => return Ok(Flow::Jump(*offset)),
            Instruction::IsZero { register, offset } => {
                if table.registers().get(*register)?.is_zero() {
                    return Ok(Flow::Jump(*offset));
                }
            }
            Instruction::Sub { target, operand } => {
                let registers = table.registers_mut();
                let a = registers.get(*target)?.to_number();
                let b = registers.get(*operand)?.to_number();
                registers.set(*operand, RegisterValue::Number(b))?;
                registers.set(*target, RegisterValue::Number(a - b))?;
            }
        }

        Ok(Flow::Next)
    }

    /// Select the first cell whose number beats every earlier one under `better`.
    /// NaN cells never win.
    fn select_extremum(
        table: &mut Table,
        better: fn(f64, f64) -> bool,
        name: &str,
    ) -> CommandResult<()> {
        let selection = table.selection();
        let mut best: Option<((usize, usize), f64)> = None;

        for (r, c) in table.existing_cells(&selection) {
            if let Some(n) = table.number_at(r, c).filter(|n| !n.is_nan()) {
                if best.map_or(true, |(_, b)| better(n, b)) {
                    best = Some(((r, c), n));
                }
            }
        }

        match best {
            Some(((r, c), _)) => table.set_selection(Selection::cell(r + 1, c + 1)?),
            None => warn!(%selection, "[{}] found no numeric cell", name),
        }
        Ok(())
    }
}
