//! File-based editing and table properties

use std::fs;

use gridedit::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_edit_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    fs::write(&path, "1 2\n3 4\n").unwrap();

    edit_file(
        &path,
        "[_,2];sum [1,3]",
        &TextOptions::default(),
        &RunOptions::default(),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1 2 6\n3 4 \n");
}

#[test]
fn test_failed_edit_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    fs::write(&path, "keep me\n").unwrap();

    let result = edit_file(
        &path,
        "set x;goto +9",
        &TextOptions::default(),
        &RunOptions::default(),
    );

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
}

#[test]
fn test_edit_file_to_other_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "a,b\n").unwrap();
    let options = TextOptions::new(",").unwrap();

    edit_file_to(&input, &output, "[1,1];swap [1,2]", &options, &RunOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), "a,b\n");
    assert_eq!(fs::read_to_string(&output).unwrap(), "b,a\n");
}

#[test]
fn test_open_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.txt");
    fs::write(&path, "x \"y z\"\n").unwrap();
    let options = TextOptions::default();

    let mut table = Table::open(&path, &options).unwrap();
    assert_eq!(table.text_at(0, 1), "y z");

    table.run_commands("[1,1];set w", &RunOptions::default()).unwrap();
    table.save(&path, &options).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "w \"y z\"\n");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = edit_file(
        dir.path().join("nope.txt"),
        "clear",
        &TextOptions::default(),
        &RunOptions::default(),
    );
    assert!(matches!(result, Err(Error::Text(_))));
}

fn grid() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z0-9]{0,3}", 1..5), 1..6)
}

proptest! {
    #[test]
    fn prop_single_cell_selection(rows in grid(), r in 1usize..6, c in 1usize..5) {
        let mut table = Table::from_rows(rows).unwrap();
        prop_assume!(r <= table.row_count() && c <= table.col_count());

        let commands = format!("[{},{}]", r, c);
        table.run_commands(&commands, &RunOptions::default()).unwrap();
        prop_assert_eq!(table.selection(), Selection::new(r, c, r, c).unwrap());
    }

    #[test]
    fn prop_delete_rows_past_end(rows in grid(), first in 1usize..8, extra in 0usize..5) {
        let mut table = Table::from_rows(rows).unwrap();
        let before = table.row_count();
        let last = before + extra;
        prop_assume!(first <= last);

        let commands = format!("[{},1,{},1];drow", first, last);
        table.run_commands(&commands, &RunOptions::default()).unwrap();

        let expected = if first <= before { first - 1 } else { before };
        prop_assert_eq!(table.row_count(), expected);
    }

    #[test]
    fn prop_write_then_read(rows in grid()) {
        let options = TextOptions::default();
        let table = Table::from_rows(rows).unwrap();

        let text = TextWriter::write_string(&table, &options);
        let reread = TextReader::read_str(&text, &options).unwrap();
        prop_assert_eq!(reread.rows(), table.rows());
    }
}
