//! Delimited input reader.
//!
//! Reads a UTF-8, semicolon-separated file whose first record is the header.
//! Records of the wrong length are not rejected here; [`Table::with_lines`]
//! reports them with the line the record starts on, as tracked by the csv
//! reader across quoted line breaks.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::row::Table;

/// Read `path` into a [`Table`].
#[instrument(fields(subsystem = "input", op = "read_table"))]
pub fn read_table(path: &Path, delimiter: u8) -> Result<Table> {
    let file = File::open(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_from(file, delimiter)?;
    info!(
        path = %path.display(),
        row_count = table.len(),
        column_count = table.header().len(),
        "Read input"
    );
    Ok(table)
}

/// Read a table from any byte source.
pub fn read_from<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    let mut header: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(String::from).collect(),
        None => return Err(Error::Header("input is empty".to_string())),
    };
    if let Some(first) = header.first_mut() {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();
    for record in records {
        let record = record?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(rows.len() + 2);
        rows.push((line, record.iter().map(String::from).collect()));
    }

    Table::with_lines(header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_semicolon_input() {
        let data = "id;parent;nl;fr\nA;;Alpha;Alpha-fr\nB;A;Beta;\"Bêta; deux\"\n";
        let table = read_from(data.as_bytes(), b';').unwrap();
        assert_eq!(table.header(), &["id", "parent", "nl", "fr"]);
        let rows: Vec<_> = table.records().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].parent(), "");
        assert_eq!(rows[1].field(3), "Bêta; deux");
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let data = "\u{feff}id;parent\nA;\n";
        let table = read_from(data.as_bytes(), b';').unwrap();
        assert_eq!(table.header()[0], "id");
    }

    #[test]
    fn test_row_length_mismatch_is_fatal() {
        let data = "id;parent;nl\nA;;Alpha\nB;A\n";
        let err = read_from(data.as_bytes(), b';').unwrap_err();
        assert!(matches!(
            err,
            Error::RowLength {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_line_numbers_follow_multiline_fields() {
        let data = "id;parent;nl\nA;;\"two\nlines\"\n;A;Orphan\n";
        let table = read_from(data.as_bytes(), b';').unwrap();
        let lines: Vec<_> = table.records().map(|r| r.line()).collect();
        assert_eq!(lines, vec![2, 4]);

        let data = "id;parent;nl\nA;;\"two\nlines\"\nB;A\n";
        let err = read_from(data.as_bytes(), b';').unwrap_err();
        assert!(matches!(err, Error::RowLength { line: 4, .. }));
    }

    #[test]
    fn test_empty_input_is_header_error() {
        let err = read_from("".as_bytes(), b';').unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn test_custom_delimiter() {
        let table = read_from("id\tparent\nA\t\n".as_bytes(), b'\t').unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_read_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id;parent;en").unwrap();
        writeln!(file, "A;;Alpha").unwrap();
        let table = read_table(file.path(), b';').unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let err = read_table(Path::new("/nonexistent/vocab.csv"), b';').unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }
}
