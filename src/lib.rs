//! Survey Cross-Check Library
//!
//! A Rust library for cross-checking pipeline survey CSV files against a
//! reference table of per-pipeline start and end coordinates.
//!
//! This library provides tools for:
//! - Parsing delimited survey files with normalized column names
//! - Grouping reference records by pipeline and extracting boundary rows
//! - Indexing survey files by their segment identifier
//! - Comparing coordinate columns with an absolute numeric tolerance
//! - Assembling a plain-text discrepancy report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod crosscheck;
        pub mod indexing;
        pub mod survey_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FileIndex, PipelineEntry, Record, RecordSet, ReferenceIndex};
pub use config::Config;

/// Result type alias for the survey cross-checker
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cross-check operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File cannot be parsed as delimited tabular data
    #[error("File format error in '{file}': {message}")]
    FileFormat {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A required column is absent from a file's schema
    #[error("Missing column '{column}' in '{file}'")]
    MissingColumn { file: String, column: String },

    /// An input file has no data rows, so boundary records are undefined
    #[error("File '{path}' contains no data rows")]
    EmptyFile { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file format error
    pub fn file_format(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::FileFormat {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create an empty file error
    pub fn empty_file(path: impl Into<String>) -> Self {
        Self::EmptyFile { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::FileFormat {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
