// tests/save_files.rs
//
// CSV/TXT output: paths, contents, quoting, per-file failures.
//
use std::fs;

use table_scrape::cells;
use table_scrape::csv::{write_row, write_rows, SEP};
use table_scrape::file::{ensure_directory, save_table, timestamp, TablePaths};
use table_scrape::table::{format_table, Table};

fn sample() -> Table {
    Table::new(
        cells!["Player", "Team"],
        vec![cells!["LeBron James", "Lakers"], cells!["Curry, Stephen", "Warriors \"GSW\""]],
    )
}

#[test]
fn paths_use_index_sanitized_title_and_stamp() {
    let dir = tempfile::tempdir().unwrap();
    let p = TablePaths::new(dir.path(), 2, Some("Points: per game"), "20240101_120000");
    assert_eq!(p.csv, dir.path().join("table_2_Points per game_20240101_120000.csv"));
    assert_eq!(p.txt, dir.path().join("table_2_Points per game_20240101_120000.txt"));

    let p = TablePaths::new(dir.path(), 7, None, "X");
    assert_eq!(p.csv, dir.path().join("table_7_table_7_X.csv"));
}

#[test]
fn timestamp_shape() {
    let ts = timestamp();
    assert_eq!(ts.len(), 15);
    assert_eq!(&ts[8..9], "_");
    assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
}

#[test]
fn csv_quotes_only_when_needed() {
    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &cells!["plain", "a,b", "say \"hi\"", "two\nlines", ""], SEP).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\",\n"
    );
}

#[test]
fn save_writes_csv_and_txt() {
    let dir = tempfile::tempdir().unwrap();
    let table = sample();
    let lines = format_table(&table, 10, 30);
    let paths = TablePaths::new(&dir.path().join("nested/out"), 1, Some("Roster"), "stamp");

    let report = save_table(&paths, &table, &lines);
    assert!(report.csv.is_ok());
    assert!(report.txt.is_ok());
    assert_eq!(report.written().len(), 2);

    let csv = fs::read_to_string(&paths.csv).unwrap();
    let mut expected = Vec::new();
    write_rows(&mut expected, &table.csv_rows(), SEP).unwrap();
    assert_eq!(csv, String::from_utf8(expected).unwrap());
    assert!(csv.starts_with("Player,Team\nLeBron James,Lakers\n"));
    assert!(csv.contains("\"Curry, Stephen\",\"Warriors \"\"GSW\"\"\""));

    let txt = fs::read_to_string(&paths.txt).unwrap();
    assert_eq!(txt, lines.join("\n"));
    assert!(!txt.ends_with('\n'));
}

#[test]
fn csv_without_declared_headers_has_rows_only() {
    let dir = tempfile::tempdir().unwrap();
    let table = Table::new(Vec::new(), vec![cells!["A", "B"], cells!["1", "2"]]);
    let paths = TablePaths::new(dir.path(), 1, None, "s");
    let report = save_table(&paths, &table, &format_table(&table, 10, 30));
    assert!(report.csv.is_ok());
    assert_eq!(fs::read_to_string(&paths.csv).unwrap(), "A,B\n1,2\n");
}

#[test]
fn failure_on_one_file_does_not_block_the_other() {
    let dir = tempfile::tempdir().unwrap();
    let table = sample();
    let lines = format_table(&table, 10, 30);
    let mut paths = TablePaths::new(dir.path(), 1, Some("t"), "s");

    // a directory where the CSV file should go
    fs::create_dir_all(&paths.csv).unwrap();
    let report = save_table(&paths, &table, &lines);
    assert!(report.csv.is_err());
    assert!(report.txt.is_ok());
    assert_eq!(report.written(), vec![paths.txt.as_path()]);

    // parent is a regular file
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    paths.txt = blocker.join("out.txt");
    let report = save_table(&paths, &table, &lines);
    assert!(report.txt.is_err());
}

#[test]
fn ensure_directory_rejects_files() {
    let dir = tempfile::tempdir().unwrap();
    let f = dir.path().join("f");
    fs::write(&f, "x").unwrap();
    assert!(ensure_directory(&f).is_err());

    let d = dir.path().join("a/b/c");
    ensure_directory(&d).unwrap();
    assert!(d.is_dir());
    ensure_directory(&d).unwrap();
}

#[test]
fn single_empty_cell_row_survives_as_quoted_field() {
    let table = Table::new(cells!["H"], vec![cells!["a"], cells![""], cells!["b"]]);
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, &table.csv_rows(), SEP).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "H\na\n\"\"\nb\n");

    // wider rows with empty cells stay unquoted
    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &cells!["", ""], SEP).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), ",\n");
}
