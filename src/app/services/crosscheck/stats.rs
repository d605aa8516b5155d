//! Run statistics for CLI summaries

use std::time::Duration;

use serde::Serialize;

use super::report::CrosscheckReport;
use crate::app::models::ReferenceIndex;

/// Counters describing one cross-check run, derived from the finished report
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrosscheckStats {
    /// Number of survey files supplied on the command line
    pub files_supplied: usize,
    /// Number of survey files indexed successfully
    pub files_indexed: usize,
    /// Number of survey files that failed to index
    pub files_failed: usize,
    /// Number of pipelines in the reference index
    pub reference_pipelines: usize,
    /// Segments that matched a reference pipeline
    pub segments_matched: usize,
    /// Segments with no reference entry
    pub segments_unmatched: usize,
    /// Segments whose boundaries all agreed within tolerance
    pub segments_clean: usize,
    /// Total discrepancy lines across all segments
    pub discrepancies_found: usize,
    /// Total processing time
    #[serde(serialize_with = "serialize_seconds")]
    pub processing_time: Duration,
}

impl CrosscheckStats {
    /// Derive run statistics from the report and reference index
    pub fn from_report(
        report: &CrosscheckReport,
        reference_index: &ReferenceIndex,
        processing_time: Duration,
    ) -> Self {
        let files_failed = report.file_error_count();
        let files_supplied = report.entries.len();
        let segments_clean = report.clean_count();
        let segments_unmatched = report.unmatched_count();

        Self {
            files_supplied,
            files_indexed: files_supplied - files_failed,
            files_failed,
            reference_pipelines: reference_index.len(),
            segments_matched: segments_clean + report.discrepant_count(),
            segments_unmatched,
            segments_clean,
            discrepancies_found: report.discrepancy_count(),
            processing_time,
        }
    }

    /// True when anything in the run needs operator attention
    pub fn has_issues(&self) -> bool {
        self.discrepancies_found > 0 || self.segments_unmatched > 0 || self.files_failed > 0
    }
}

fn serialize_seconds<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
