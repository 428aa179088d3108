//! CSV file I/O with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RentalError;

/// Read all rows of a headed CSV file
///
/// Returns `Ok(None)` if the file doesn't exist; any other failure is an error.
pub fn read_csv<T, P>(path: P) -> Result<Option<Vec<T>>, RentalError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(RentalError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result
            .map_err(|e| RentalError::Csv(format!("Failed to parse {}: {}", path.display(), e)))?;
        rows.push(row);
    }

    Ok(Some(rows))
}

/// Write a header row and data rows to a CSV file atomically
///
/// The header is always written, even when there are no rows. Data is
/// written to a temp file in the same directory and renamed into place.
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], rows: &[T]) -> Result<(), RentalError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RentalError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| RentalError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| RentalError::Io(format!("Failed to flush data: {}", e.error())))?;

    file.sync_all()
        .map_err(|e| RentalError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        RentalError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Value")]
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let rows: Option<Vec<Row>> = read_csv(&path).unwrap();
        assert!(rows.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![
            Row {
                name: "a".into(),
                value: 1,
            },
            Row {
                name: "b".into(),
                value: 2,
            },
        ];

        write_csv_atomic(&path, &["Name", "Value"], &rows).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\na,1\nb,2\n");

        let loaded: Vec<Row> = read_csv(&path).unwrap().unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_header_written_without_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        write_csv_atomic::<Row, _>(&path, &["Name", "Value"], &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\n");

        let loaded: Vec<Row> = read_csv(&path).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic::<Row, _>(&path, &["Name", "Value"], &[]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.csv.tmp").exists());
    }

    #[test]
    fn test_malformed_row_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, "Name,Value\na,not-a-number\n").unwrap();

        let result: Result<Option<Vec<Row>>, _> = read_csv(&path);
        assert!(matches!(result, Err(RentalError::Csv(_))));
    }
}
