//! Test utilities for the cross-check engine
//!
//! Shared helpers for building records and fixture CSV files used across the
//! comparator, report, and end-to-end test modules.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::app::models::Record;

mod comparator_tests;

/// Build a record from column/value pairs
pub fn record(pairs: &[(&str, &str)]) -> Record {
    let mut record = Record::new();
    for (column, value) in pairs {
        record.insert(*column, *value);
    }
    record
}

/// Write CSV content to a temp file that lives for the test's duration
pub fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Comparison column lists as owned strings, matching the config shape
pub fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
