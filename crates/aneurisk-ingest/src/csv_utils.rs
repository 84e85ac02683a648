//! Lightweight CSV row readers for the lookup-style tables.
//!
//! The patients and reference-points files are only ever consulted as
//! by-key lookups while assembling the cases table, so they are read into
//! string maps instead of DataFrames.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// One CSV row as a header-to-value map.
pub type CsvRow = BTreeMap<String, String>;

/// Read a CSV file into a map keyed by the values of `key_column`.
///
/// Cell values are trimmed; a leading BOM on the first header is stripped.
/// Rows with an empty key are skipped.
pub fn read_rows_indexed(path: &Path, key_column: &str) -> Result<BTreeMap<String, CsvRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    if !headers.iter().any(|h| h == key_column) {
        return Err(IngestError::MissingColumn {
            column: key_column.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut rows = BTreeMap::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut row = CsvRow::new();
        for (idx, value) in record.iter().enumerate() {
            if let Some(header) = headers.get(idx) {
                row.insert(header.clone(), value.trim().to_string());
            }
        }
        let key = row.get(key_column).cloned().unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        rows.insert(key, row);
    }
    Ok(rows)
}

/// Get an optional field value from a row (`None` if empty or missing).
pub fn get_optional(row: &CsvRow, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn rows_index_by_key_column() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "id,sex,age\n12,female,54\n13,male,61\n").unwrap();
        let rows = read_rows_indexed(file.path(), "id").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(get_optional(&rows["12"], "sex").as_deref(), Some("female"));
        assert_eq!(get_optional(&rows["13"], "missing"), None);
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "sex,age\nfemale,54\n").unwrap();
        let err = read_rows_indexed(file.path(), "id").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { .. }));
    }
}
