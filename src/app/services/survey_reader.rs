//! Tabular reader for delimited survey data
//!
//! Parses a comma-delimited text file with a header row into a [`RecordSet`].
//! Header names are normalized (trimmed, upper-cased) so downstream lookups
//! by the fixed column names succeed regardless of the source file's casing
//! or surrounding whitespace. The same normalization is applied to the
//! reference file and every survey file.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::app::models::{Record, RecordSet};
use crate::{Error, Result};

/// Read a delimited file into a record set.
///
/// Values are stored raw; numeric coercion happens at comparison time.
/// Fails with [`Error::FileFormat`] when the content is not parseable as
/// tabular text (missing header, ragged rows, non-UTF-8 encoding) and
/// [`Error::Io`] when the file cannot be read at all.
pub fn read_record_set(path: &Path) -> Result<RecordSet> {
    debug!("Reading survey data from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            Error::file_format(
                path.display().to_string(),
                "file is not valid UTF-8 text",
                None,
            )
        } else {
            Error::io(format!("Failed to read file {}", path.display()), e)
        }
    })?;

    parse_content(path, &content)
}

/// Parse already-loaded file content. Split out for testability.
fn parse_content(path: &Path, content: &str) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| {
        Error::file_format(
            path.display().to_string(),
            "failed to read CSV header row",
            Some(e),
        )
    })?;

    // Normalize header names; the first occurrence wins on duplicates and
    // later positions with the same name are dropped from every row.
    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    let mut position_names: Vec<Option<String>> = Vec::with_capacity(headers.len());
    for raw in headers.iter() {
        let name = raw.trim().to_uppercase();
        if columns.contains(&name) {
            debug!(
                "Duplicate column '{}' in {}; keeping first occurrence",
                name,
                path.display()
            );
            position_names.push(None);
        } else {
            columns.push(name.clone());
            position_names.push(Some(name));
        }
    }

    if columns.is_empty() || columns.iter().all(|name| name.is_empty()) {
        return Err(Error::file_format(
            path.display().to_string(),
            "missing or empty header row",
            None,
        ));
    }

    let mut records = Vec::new();
    for (row_number, result) in reader.records().enumerate() {
        let row = result.map_err(|e| {
            Error::file_format(
                path.display().to_string(),
                format!("malformed row {}", row_number + 2),
                Some(e),
            )
        })?;

        let mut record = Record::new();
        for (position, value) in row.iter().enumerate() {
            if let Some(Some(name)) = position_names.get(position) {
                record.insert(name.clone(), value);
            }
        }
        records.push(record);
    }

    debug!(
        "Read {} records with {} columns from {}",
        records.len(),
        columns.len(),
        path.display()
    );

    Ok(RecordSet::new(path.to_path_buf(), columns, records))
}
