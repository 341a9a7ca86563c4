//! Reader and writer behavior against real files.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use recast_ingest::{RowReader, RowWriter};

fn write_table(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create table");
    file.write_all(bytes).expect("write table");
    path
}

#[test]
fn reads_rows_as_header_keyed_maps() {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, "t.csv", b"ID,Name\n1,alpha\n2,beta\n");

    let mut reader = RowReader::open(&path).expect("open");
    assert_eq!(reader.headers(), ["ID", "Name"]);

    let first = reader.next_row().expect("first row");
    assert_eq!(first.get("ID").map(String::as_str), Some("1"));
    assert_eq!(first.get("Name").map(String::as_str), Some("alpha"));

    let second = reader.next_row().expect("second row");
    assert_eq!(second.get("Name").map(String::as_str), Some("beta"));

    assert!(reader.next_row().is_none());
    assert_eq!(reader.skipped(), 0);
}

#[test]
fn strips_bom_and_surrounding_whitespace() {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, "t.csv", "\u{feff}ID, Name\n 1 , alpha \n".as_bytes());

    let mut reader = RowReader::open(&path).expect("open");
    assert_eq!(reader.headers(), ["ID", "Name"]);
    let row = reader.next_row().expect("row");
    assert_eq!(row.get("ID").map(String::as_str), Some("1"));
    assert_eq!(row.get("Name").map(String::as_str), Some("alpha"));
}

#[test]
fn skips_rows_with_wrong_field_count() {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, "t.csv", b"A,B\n1,2\nonly-one\n3,4,5\n6,7\n");

    let mut reader = RowReader::open(&path).expect("open");
    let mut rows = Vec::new();
    while let Some(row) = reader.next_row() {
        rows.push(row);
    }
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("A").map(String::as_str), Some("6"));
    assert_eq!(reader.skipped(), 2);
}

#[test]
fn skips_undecodable_records() {
    let dir = TempDir::new().unwrap();
    let mut bytes = b"A,B\n1,2\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);
    bytes.extend_from_slice(b"3,4\n");
    let path = write_table(&dir, "t.csv", &bytes);

    let mut reader = RowReader::open(&path).expect("open");
    let mut rows = Vec::new();
    while let Some(row) = reader.next_row() {
        rows.push(row);
    }
    assert_eq!(rows.len(), 2);
    assert_eq!(reader.skipped(), 1);
}

#[test]
fn open_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(RowReader::open(&dir.path().join("absent.csv")).is_err());
}

#[test]
fn writer_emits_header_then_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let columns = vec!["id".to_string(), "status".to_string()];

    let mut writer = RowWriter::create(&path, &columns).expect("create");
    writer
        .write_row(&["42".to_string(), "active".to_string()])
        .expect("write row");
    writer
        .write_row(&["43".to_string(), String::new()])
        .expect("write row");
    writer.finish().expect("finish");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, "id,status\n42,active\n43,\n");
}
