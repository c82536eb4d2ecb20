use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Read a UTF-8 CSV file (a leading BOM is allowed). The first non-blank
/// row is the header.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let csv_error = |source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        records.push(record.iter().map(str::to_string).collect());
    }
    SourceTable::from_records(path.display().to_string(), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn header_is_first_non_blank_row() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("Structure.csv");
        fs::write(
            &path,
            "\u{feff},,\n Parent , Child  Key ,Name\nUNIT,ASSY1\nUNIT,ASSY2,Cover,extra\n",
        )
        .expect("write csv");

        let table = read_csv_table(&path).expect("read");

        assert_eq!(table.headers, vec!["Parent", "Child Key", "Name"]);
        assert_eq!(table.rows[0], vec!["UNIT", "ASSY1", ""]);
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.location, path.display().to_string());
    }

    #[test]
    fn blank_file_has_no_header() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("Parts.csv");
        fs::write(&path, "\n,,\n").expect("write csv");

        assert!(matches!(
            read_csv_table(&path),
            Err(IngestError::EmptyHeader { .. })
        ));
    }

    #[test]
    fn non_utf8_file_is_a_read_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("Parts.csv");
        // "品番" in Shift_JIS
        fs::write(&path, b"\x95\x69\x94\xd4,Maker\nP1,ACME\n").expect("write csv");

        assert!(matches!(
            read_csv_table(&path),
            Err(IngestError::CsvRead { .. })
        ));
    }
}
