//! Cross-check engine for pipeline survey boundaries
//!
//! Compares the boundary records of each indexed survey file against the
//! matching reference pipeline and assembles the discrepancy report.
//!
//! ## Architecture
//!
//! - [`comparator`] - Column-pair comparison with numeric tolerance
//! - [`report`] - Report assembly from the file and reference indexes
//! - [`stats`] - Run statistics for CLI summaries
//!
//! The engine is a pure transformation: it takes the two indexes built by
//! the indexing service and produces a report value, with no I/O and no
//! state carried across runs.

pub mod comparator;
pub mod report;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use comparator::{compare_records, Discrepancy};
pub use report::{build_report, CrosscheckReport, ReportEntry};
pub use stats::CrosscheckStats;
