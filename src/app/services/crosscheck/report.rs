//! Report assembly
//!
//! Walks the file index in supply order, looks up each segment in the
//! reference index, and collects typed report entries. Rendering to the
//! final newline-delimited text is a separate step so the same entries can
//! back the JSON output format.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::comparator::{compare_records, Discrepancy};
use crate::app::models::{FileIndex, FileOutcome, ReferenceIndex};
use crate::config::Config;

/// One per-file entry of the cross-check report
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEntry {
    /// Segment matched its reference with no discrepancies
    Clean { id: String },
    /// Segment matched its reference but start and/or end boundaries differ
    Discrepant {
        id: String,
        start: Vec<Discrepancy>,
        end: Vec<Discrepancy>,
    },
    /// Segment identifier has no entry in the reference data
    NotFound { id: String, source: PathBuf },
    /// Survey file could not be indexed (isolated per-file failure)
    FileError { source: PathBuf, error: String },
}

/// Cross-check report as typed entries, one per supplied survey file
#[derive(Debug, Default, Serialize)]
pub struct CrosscheckReport {
    pub entries: Vec<ReportEntry>,
}

/// Build the report from the two indexes.
///
/// Entry order follows the file index, i.e. the order the input files were
/// supplied, so repeated runs over the same inputs produce identical output.
/// Pure transformation; no I/O.
pub fn build_report(
    file_index: &FileIndex,
    reference_index: &ReferenceIndex,
    config: &Config,
) -> CrosscheckReport {
    let mut entries = Vec::with_capacity(file_index.len());

    for outcome in file_index.iter() {
        let entry = match outcome {
            FileOutcome::Failed { source, error } => ReportEntry::FileError {
                source: source.clone(),
                error: error.clone(),
            },
            FileOutcome::Indexed(file) => match reference_index.get(&file.id) {
                None => {
                    debug!("Segment '{}' not present in reference data", file.id);
                    ReportEntry::NotFound {
                        id: file.id.clone(),
                        source: file.source.clone(),
                    }
                }
                Some(reference) => {
                    let start = compare_records(
                        &file.entry.start,
                        &reference.start,
                        &config.file_columns,
                        &config.reference_columns,
                        config.tolerance,
                    );
                    let end = compare_records(
                        &file.entry.end,
                        &reference.end,
                        &config.file_columns,
                        &config.reference_columns,
                        config.tolerance,
                    );

                    if start.is_empty() && end.is_empty() {
                        ReportEntry::Clean {
                            id: file.id.clone(),
                        }
                    } else {
                        debug!(
                            "Segment '{}': {} start, {} end discrepancies",
                            file.id,
                            start.len(),
                            end.len()
                        );
                        ReportEntry::Discrepant {
                            id: file.id.clone(),
                            start,
                            end,
                        }
                    }
                }
            },
        };
        entries.push(entry);
    }

    CrosscheckReport { entries }
}

impl CrosscheckReport {
    /// Render the report as newline-delimited text.
    ///
    /// Entries are separated by blank lines; discrepancy lines sit under a
    /// per-boundary section header inside a per-segment wrapper.
    pub fn render(&self) -> String {
        let mut report = String::new();

        for entry in &self.entries {
            match entry {
                ReportEntry::Clean { id } => {
                    let _ = writeln!(report, "No discrepancies found for {}.\n", id);
                }
                ReportEntry::NotFound { id, source } => {
                    let _ = writeln!(
                        report,
                        "ID '{}' from file '{}' not found in reference data.\n",
                        id,
                        source.display()
                    );
                }
                ReportEntry::FileError { source, error } => {
                    let _ = writeln!(
                        report,
                        "Error processing file '{}': {}\n",
                        source.display(),
                        error
                    );
                }
                ReportEntry::Discrepant { id, start, end } => {
                    let mut sections = Vec::new();
                    if !start.is_empty() {
                        sections.push(format!(
                            "Start point discrepancies for {}:\n{}",
                            id,
                            join_lines(start)
                        ));
                    }
                    if !end.is_empty() {
                        sections.push(format!(
                            "End point discrepancies for {}:\n{}",
                            id,
                            join_lines(end)
                        ));
                    }
                    let _ = writeln!(
                        report,
                        "Discrepancies for {}:\n{}\n",
                        id,
                        sections.join("\n")
                    );
                }
            }
        }

        report
    }

    /// Total discrepancy lines across all segments
    pub fn discrepancy_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                ReportEntry::Discrepant { start, end, .. } => start.len() + end.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn clean_count(&self) -> usize {
        self.count_kind(|e| matches!(e, ReportEntry::Clean { .. }))
    }

    pub fn discrepant_count(&self) -> usize {
        self.count_kind(|e| matches!(e, ReportEntry::Discrepant { .. }))
    }

    pub fn unmatched_count(&self) -> usize {
        self.count_kind(|e| matches!(e, ReportEntry::NotFound { .. }))
    }

    pub fn file_error_count(&self) -> usize {
        self.count_kind(|e| matches!(e, ReportEntry::FileError { .. }))
    }

    fn count_kind(&self, predicate: impl Fn(&ReportEntry) -> bool) -> usize {
        self.entries.iter().filter(|entry| predicate(entry)).count()
    }
}

fn join_lines(discrepancies: &[Discrepancy]) -> String {
    discrepancies
        .iter()
        .map(|discrepancy| discrepancy.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
