//! Data model for one cross-check run
//!
//! All structures here are built fresh per invocation and are read-only after
//! construction. `Record` column names are already normalized (trimmed,
//! upper-cased) by the reader; values are stored raw and only coerced during
//! comparison.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// One data row: an ordered mapping from normalized column name to raw value.
///
/// Column names are unique within a record. Rows are small (a handful of
/// survey columns), so lookup is a linear scan over the field list, which
/// also preserves file column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Insert a field, keeping the first value on a duplicate column name.
    ///
    /// Returns false if the column was already present.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) -> bool {
        let column = column.into();
        if self.get(&column).is_some() {
            return false;
        }
        self.fields.push((column, value.into()));
        true
    }

    /// Look up a value by normalized column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a value, failing with a missing column error naming `file`
    pub fn require(&self, column: &str, file: &Path) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| Error::missing_column(file.display().to_string(), column))
    }

    /// Column names in field order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of records sharing one schema, sourced from one file
#[derive(Debug, Clone)]
pub struct RecordSet {
    path: PathBuf,
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(path: PathBuf, columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            path,
            columns,
            records,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalized header names, duplicates removed
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The first and last record of a group (reference) or file (survey).
///
/// Both boundaries always come from the same source; for a single-row group
/// start and end are the same record.
#[derive(Debug, Clone)]
pub struct PipelineEntry {
    pub start: Record,
    pub end: Record,
}

/// Reference boundaries keyed by pipeline identifier.
///
/// Built once per run from the reference file and read-only afterward. Key
/// iteration order is not significant downstream; lookups are by identifier.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    entries: HashMap<String, PipelineEntry>,
}

impl ReferenceIndex {
    pub fn new(entries: HashMap<String, PipelineEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&PipelineEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A successfully indexed survey file
#[derive(Debug, Clone)]
pub struct IndexedFile {
    /// Segment identifier taken from the first row's ID column
    pub id: String,
    /// Boundary records of the whole file
    pub entry: PipelineEntry,
    /// Source file path, carried through to the report
    pub source: PathBuf,
}

/// Outcome of indexing one survey file.
///
/// Failures are isolated per file so one malformed input does not abort the
/// others; they surface as inline entries in the report.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Indexed(IndexedFile),
    Failed { source: PathBuf, error: String },
}

/// Per-file outcomes in the order the input files were supplied.
///
/// The report iterates this order, which keeps repeated runs on the same
/// inputs byte-identical.
#[derive(Debug, Default)]
pub struct FileIndex {
    outcomes: Vec<FileOutcome>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_indexed(&mut self, file: IndexedFile) {
        self.outcomes.push(FileOutcome::Indexed(file));
    }

    pub fn push_failure(&mut self, source: PathBuf, error: String) {
        self.outcomes.push(FileOutcome::Failed { source, error });
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn indexed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Indexed(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }
}
