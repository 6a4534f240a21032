//! Integration tests for csvline

use csvline::{read_csv_file, CsvError, CsvReader, QuoteMode, TablePrinter};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(contents.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_read_file_and_print() {
    let temp = write_csv("id,item,price\n1,\"Bread, Butter\",91.89\n2,\"word \"\"apple\"\"\",3\n");

    let table = read_csv_file(temp.path()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[1], vec!["1", "Bread, Butter", "91.89"]);
    assert_eq!(table[2], vec!["2", "word \"apple\"", "3"]);

    let mut printer = TablePrinter::new(Vec::new());
    printer.print_table(&table).unwrap();
    let output = String::from_utf8(printer.into_inner().unwrap()).unwrap();
    assert_eq!(
        output,
        "id\titem\tprice\t\n1\tBread, Butter\t91.89\t\n2\tword \"apple\"\t3\t\n"
    );
}

#[test]
fn test_every_row_has_at_least_one_field() {
    let temp = write_csv("\n\n\"\"\n,\n");
    let table = read_csv_file(temp.path()).unwrap();
    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|row| !row.is_empty()));
    assert_eq!(table[3], vec!["", ""]);
}

#[test]
fn test_uniform_width_rejects_ragged_file() {
    let temp = write_csv("a,b,c\n1,2,3\n4,5\n");

    let err = CsvReader::open(temp.path())
        .unwrap()
        .uniform_width(true)
        .read_table()
        .unwrap_err();
    assert!(matches!(
        err,
        CsvError::RowLengthMismatch {
            line: 3,
            expected: 3,
            found: 2
        }
    ));

    // Same file without the policy
    let table = read_csv_file(temp.path()).unwrap();
    assert_eq!(table[2], vec!["4", "5"]);
}

#[test]
fn test_no_escape_reader() {
    let temp = write_csv("1,\"a,b\",2\na\"b\"c\n");
    let table = CsvReader::open(temp.path())
        .unwrap()
        .quote_mode(QuoteMode::NoEscape)
        .read_table()
        .unwrap();
    assert_eq!(table, vec![vec!["1", "a,b", "2"], vec!["abc"]]);
}

#[test]
fn test_missing_file_reports_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    match read_csv_file(&path) {
        Err(CsvError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected open error, got {:?}", other),
    }
}
