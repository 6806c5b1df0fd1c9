//! Command parser
//!
//! Turns a `;`-separated command string into a [`Program`]. Wildcard
//! selections resolve against the table extent at parse time, so the table
//! is needed here even though nothing is mutated.

use gridedit_core::{Selection, Table};
use tracing::debug;

use crate::aggregate::{Aggregate, Transform};
use crate::error::{CommandError, CommandResult};
use crate::instruction::{Instruction, Program};

/// Parse a full command string into a program
///
/// # Example
/// ```rust
/// use gridedit_command::{parse_commands, Instruction};
/// use gridedit_core::{Selection, Table};
///
/// let table = Table::from_rows(vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();
/// let program = parse_commands("[_,2];set \"x;y\";goto -1", &table).unwrap();
///
/// assert_eq!(program.len(), 3);
/// assert_eq!(
///     program.get(0),
///     Some(&Instruction::Select(Selection::new(1, 2, 2, 2).unwrap()))
/// );
/// assert_eq!(program.get(1), Some(&Instruction::Set("x;y".into())));
/// assert_eq!(program.get(2), Some(&Instruction::Goto(-1)));
/// ```
pub fn parse_commands(commands: &str, table: &Table) -> CommandResult<Program> {
    let parser = CommandParser::new(table);
    let mut instructions = Vec::new();

    for (i, command) in split_commands(commands).into_iter().enumerate() {
        let instruction =
            parser
                .parse_command(command)
                .map_err(|message| CommandError::Parse {
                    index: i + 1,
                    command: command.to_string(),
                    message,
                })?;
        instructions.push(instruction);
    }

    debug!(commands = instructions.len(), "parsed program");
    Ok(Program::new(instructions))
}

/// Split on `;` outside quoted spans and not escaped by `\`.
/// Empty segments are dropped.
fn split_commands(commands: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in commands.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                parts.push(&commands[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&commands[start..]);

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

type ParseResult<T> = Result<T, String>;

/// Single-command parser bound to the table extent
struct CommandParser {
    rows: usize,
    cols: usize,
}

impl CommandParser {
    fn new(table: &Table) -> Self {
        Self {
            rows: table.row_count().max(1),
            cols: table.col_count().max(1),
        }
    }

    fn parse_command(&self, command: &str) -> ParseResult<Instruction> {
        // Bare keywords
        let keyword = match command {
            "irow" => Some(Instruction::InsertRow),
            "arow" => Some(Instruction::AppendRow),
            "drow" => Some(Instruction::DeleteRows),
            "icol" => Some(Instruction::InsertCol),
            "acol" => Some(Instruction::AppendCol),
            "dcol" => Some(Instruction::DeleteCols),
            "clear" => Some(Instruction::Clear),
            "[min]" => Some(Instruction::SelectMin),
            "[max]" => Some(Instruction::SelectMax),
            "[set]" => Some(Instruction::SaveSelection),
            "[_]" => Some(Instruction::RestoreSelection),
            _ => None,
        };
        if let Some(instruction) = keyword {
            return Ok(instruction);
        }
        if let Some(transform) = Transform::from_name(command) {
            return Ok(Instruction::Transform(transform));
        }

        if command.starts_with('[') {
            return self.parse_selection_command(command);
        }

        let (name, argument) = command
            .split_once(' ')
            .ok_or_else(|| "unknown command".to_string())?;

        if let Some(kind) = Aggregate::from_name(name) {
            let target = self.parse_selection(argument)?;
            return Ok(Instruction::Aggregate { kind, target });
        }

        match name {
            "set" => Ok(Instruction::Set(parse_literal(argument)?)),
            "swap" => {
                let target = self.parse_selection(argument)?;
                if !target.is_single_cell() {
                    return Err(format!("swap target {} must be a single cell", target));
                }
                Ok(Instruction::Swap(target))
            }
            "def" => Ok(Instruction::Def(parse_register(argument)?)),
            "use" => Ok(Instruction::Use(parse_register(argument)?)),
            "inc" => Ok(Instruction::Inc(parse_register(argument)?)),
            "goto" => Ok(Instruction::Goto(parse_offset(argument)?)),
            "iszero" => {
                let (register, offset) = argument
                    .split_once(' ')
                    .ok_or_else(|| "expected `iszero _N ±M`".to_string())?;
                Ok(Instruction::IsZero {
                    register: parse_register(register)?,
                    offset: parse_offset(offset)?,
                })
            }
            "sub" => {
                let (target, operand) = argument
                    .split_once(' ')
                    .ok_or_else(|| "expected `sub _N _M`".to_string())?;
                Ok(Instruction::Sub {
                    target: parse_register(target)?,
                    operand: parse_register(operand)?,
                })
            }
            _ => Err("unknown command".to_string()),
        }
    }

    /// `[find STR]` or a static selection
    fn parse_selection_command(&self, command: &str) -> ParseResult<Instruction> {
        if let Some(rest) = command.strip_prefix("[find ") {
            let needle = rest
                .strip_suffix(']')
                .ok_or_else(|| "missing closing `]`".to_string())?;
            return Ok(Instruction::Find(parse_literal(needle)?));
        }
        self.parse_selection(command).map(Instruction::Select)
    }

    /// `[r,c]` with `_` wildcards, or `[r1,c1,r2,c2]` with `-` wildcards on the end
    fn parse_selection(&self, text: &str) -> ParseResult<Selection> {
        let inner = text
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| format!("expected a bracketed selection, got {:?}", text))?;
        let parts: Vec<&str> = inner.split(',').collect();

        let selection = match parts.as_slice() {
            [row, col] => {
                let (r1, r2) = match *row {
                    "_" => (1, self.rows),
                    r => {
                        let r = parse_index(r)?;
                        (r, r)
                    }
                };
                let (c1, c2) = match *col {
                    "_" => (1, self.cols),
                    c => {
                        let c = parse_index(c)?;
                        (c, c)
                    }
                };
                Selection::new(r1, c1, r2, c2)
            }
            [r1, c1, r2, c2] => {
                let r1 = parse_index(r1)?;
                let c1 = parse_index(c1)?;
                let r2 = match *r2 {
                    "-" => self.rows,
                    r => parse_index(r)?,
                };
                let c2 = match *c2 {
                    "-" => self.cols,
                    c => parse_index(c)?,
                };
                Selection::new(r1, c1, r2, c2)
            }
            _ => return Err(format!("selection {:?} needs 2 or 4 fields", text)),
        };

        selection.map_err(|e| e.to_string())
    }
}

/// Strictly positive decimal index
fn parse_index(text: &str) -> ParseResult<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid index {:?}", text));
    }
    match text.parse::<usize>() {
        Ok(0) => Err("indices start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("index {} is too large", text)),
    }
}

/// `_D` with a single digit
fn parse_register(text: &str) -> ParseResult<usize> {
    let digits = text
        .strip_prefix('_')
        .ok_or_else(|| format!("expected a register `_N`, got {:?}", text))?;
    match digits.as_bytes() {
        [d] if d.is_ascii_digit() => Ok(usize::from(d - b'0')),
        _ => Err(format!("register {:?} must be a single digit", text)),
    }
}

/// Signed offset with a mandatory `+` or `-`
fn parse_offset(text: &str) -> ParseResult<isize> {
    let (negative, digits) = if let Some(d) = text.strip_prefix('+') {
        (false, d)
    } else if let Some(d) = text.strip_prefix('-') {
        (true, d)
    } else {
        return Err(format!("offset {:?} needs an explicit sign", text));
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid offset {:?}", text));
    }
    let magnitude: isize = digits
        .parse()
        .map_err(|_| format!("offset {} is too large", text))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Unescape a string argument: `"` toggles quoting, `\` takes the next char literally
fn parse_literal(text: &str) -> ParseResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut in_quotes = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err("dangling `\\` at end of string".to_string()),
            },
            '"' => in_quotes = !in_quotes,
            c => out.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        Table::from_rows(vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]).unwrap()
    }

    fn parse(commands: &str) -> Vec<Instruction> {
        parse_commands(commands, &table())
            .unwrap()
            .instructions()
            .to_vec()
    }

    fn sel(r1: usize, c1: usize, r2: usize, c2: usize) -> Selection {
        Selection::new(r1, c1, r2, c2).unwrap()
    }

    fn parse_error(commands: &str) -> (usize, String) {
        match parse_commands(commands, &table()) {
            Err(CommandError::Parse { index, command, .. }) => (index, command),
            other => panic!("expected parse error for {:?}, got {:?}", commands, other),
        }
    }

    #[test]
    fn test_split_commands() {
        assert_eq!(split_commands("a;b;c"), vec!["a", "b", "c"]);
        assert_eq!(split_commands("a;;b;"), vec!["a", "b"]);
        assert_eq!(split_commands("set \"x;y\";b"), vec!["set \"x;y\"", "b"]);
        assert_eq!(split_commands("set x\\;y;b"), vec!["set x\\;y", "b"]);
        assert!(split_commands("").is_empty());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            parse("irow;arow;drow;icol;acol;dcol;clear"),
            vec![
                Instruction::InsertRow,
                Instruction::AppendRow,
                Instruction::DeleteRows,
                Instruction::InsertCol,
                Instruction::AppendCol,
                Instruction::DeleteCols,
                Instruction::Clear,
            ]
        );
        assert_eq!(
            parse("[min];[max];[set];[_]"),
            vec![
                Instruction::SelectMin,
                Instruction::SelectMax,
                Instruction::SaveSelection,
                Instruction::RestoreSelection,
            ]
        );
        assert_eq!(
            parse("tolower;toupper;round;int"),
            vec![
                Instruction::Transform(Transform::ToLower),
                Instruction::Transform(Transform::ToUpper),
                Instruction::Transform(Transform::Round),
                Instruction::Transform(Transform::Int),
            ]
        );
    }

    #[test]
    fn test_parse_selections() {
        assert_eq!(parse("[2,3]"), vec![Instruction::Select(sel(2, 3, 2, 3))]);
        assert_eq!(
            parse("[1,2,5,7]"),
            vec![Instruction::Select(sel(1, 2, 5, 7))]
        );
        assert_eq!(parse("[9,9]"), vec![Instruction::Select(sel(9, 9, 9, 9))]);
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(parse("[_,1]"), vec![Instruction::Select(sel(1, 1, 2, 1))]);
        assert_eq!(parse("[2,_]"), vec![Instruction::Select(sel(2, 1, 2, 3))]);
        assert_eq!(parse("[_,_]"), vec![Instruction::Select(sel(1, 1, 2, 3))]);
        assert_eq!(
            parse("[1,2,-,-]"),
            vec![Instruction::Select(sel(1, 2, 2, 3))]
        );
        assert_eq!(
            parse("[2,1,2,-]"),
            vec![Instruction::Select(sel(2, 1, 2, 3))]
        );
    }

    #[test]
    fn test_wildcards_resolve_at_parse_time() {
        let program = parse_commands("irow;[_,1]", &table()).unwrap();
        assert_eq!(program.get(1), Some(&Instruction::Select(sel(1, 1, 2, 1))));
    }

    #[test]
    fn test_parse_find() {
        assert_eq!(parse("[find abc]"), vec![Instruction::Find("abc".into())]);
        assert_eq!(
            parse("[find \"a b\"]"),
            vec![Instruction::Find("a b".into())]
        );
        assert_eq!(parse("[find ]"), vec![Instruction::Find(String::new())]);
    }

    #[test]
    fn test_parse_set_literals() {
        assert_eq!(parse("set abc"), vec![Instruction::Set("abc".into())]);
        assert_eq!(
            parse("set \"hello world\""),
            vec![Instruction::Set("hello world".into())]
        );
        assert_eq!(
            parse("set \"say \\\"hi\\\"\""),
            vec![Instruction::Set("say \"hi\"".into())]
        );
        assert_eq!(
            parse("set a\\\\b"),
            vec![Instruction::Set("a\\b".into())]
        );
        assert_eq!(parse("set \"\""), vec![Instruction::Set(String::new())]);
    }

    #[test]
    fn test_parse_content_commands() {
        assert_eq!(
            parse("swap [2,3];sum [1,3];avg [1,1,2,2];count [_,1];len [2,_]"),
            vec![
                Instruction::Swap(sel(2, 3, 2, 3)),
                Instruction::Aggregate {
                    kind: Aggregate::Sum,
                    target: sel(1, 3, 1, 3)
                },
                Instruction::Aggregate {
                    kind: Aggregate::Avg,
                    target: sel(1, 1, 2, 2)
                },
                Instruction::Aggregate {
                    kind: Aggregate::Count,
                    target: sel(1, 1, 2, 1)
                },
                Instruction::Aggregate {
                    kind: Aggregate::Len,
                    target: sel(2, 1, 2, 3)
                },
            ]
        );
    }

    #[test]
    fn test_parse_registers_and_jumps() {
        assert_eq!(
            parse("def _0;use _9;inc _3;goto +2;goto -10;iszero _1 -3;sub _2 _4"),
            vec![
                Instruction::Def(0),
                Instruction::Use(9),
                Instruction::Inc(3),
                Instruction::Goto(2),
                Instruction::Goto(-10),
                Instruction::IsZero {
                    register: 1,
                    offset: -3
                },
                Instruction::Sub {
                    target: 2,
                    operand: 4
                },
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_error("bogus"), (1, "bogus".to_string()));
        assert_eq!(parse_error("[1,1];[0,1]"), (2, "[0,1]".to_string()));
        assert_eq!(parse_error("[2,1,1,1]").0, 1);
        assert_eq!(parse_error("[a,1]").0, 1);
        assert_eq!(parse_error("[1,1,1]").0, 1);
        assert_eq!(parse_error("[+1,1]").0, 1);
        assert_eq!(parse_error("[1,1").0, 1);
        assert_eq!(parse_error("[find abc").0, 1);
        assert_eq!(parse_error("irow ").0, 1);
        assert_eq!(parse_error(" irow").0, 1);
        assert_eq!(parse_error("set \"open").0, 1);
        assert_eq!(parse_error("set abc\\").0, 1);
        assert_eq!(parse_error("swap [1,1,2,2]").0, 1);
        assert_eq!(parse_error("def 0").0, 1);
        assert_eq!(parse_error("def _10").0, 1);
        assert_eq!(parse_error("goto 1").0, 1);
        assert_eq!(parse_error("goto +").0, 1);
        assert_eq!(parse_error("goto +1x").0, 1);
        assert_eq!(parse_error("iszero _1").0, 1);
        assert_eq!(parse_error("sub _1").0, 1);
        assert_eq!(parse_error("sum").0, 1);
    }

    #[test]
    fn test_display_reparses() {
        let program =
            parse_commands("[1,2];set \"a;b\\\\c\";[find \"q\\\"\"];sum [1,1,2,2];goto -2", &table())
                .unwrap();
        let reparsed = parse_commands(&program.to_string(), &table()).unwrap();
        assert_eq!(reparsed, program);
    }
}
