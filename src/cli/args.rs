//! Command-line argument definitions for the survey cross-checker
//!
//! Defines the CLI interface using the clap derive API. The argument structs
//! only carry values; path existence and numeric sanity are checked by the
//! `validate` methods before any file is read.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the pipeline survey cross-checker
///
/// Cross-checks pipeline survey CSV files against a reference table of
/// per-pipeline start and end coordinates and reports discrepancies beyond
/// a numeric tolerance.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "survey-crosscheck",
    version,
    about = "Cross-check pipeline survey files against reference start/end coordinates",
    long_about = "Reads a reference CSV containing per-pipeline start/end coordinates and \
                  compares them against individually supplied survey files (one per pipeline \
                  segment, identified by an ID column), reporting numeric and string \
                  discrepancies beyond a tolerance."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the cross-check and print or write the report
    Check(CheckArgs),
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Reference CSV file
    ///
    /// Must contain the PIPELINE, EASTING, NORTHING and KP_NEW columns
    /// (case-insensitive, whitespace-trimmed).
    #[arg(
        short = 'r',
        long = "reference",
        value_name = "FILE",
        help = "Reference CSV file with per-pipeline start/end coordinates"
    )]
    pub reference: PathBuf,

    /// Survey files to check, one per pipeline segment
    ///
    /// Each must contain the ID, EASTING, NORTHING and KP columns. The
    /// report lists segments in the order the files are supplied.
    #[arg(
        value_name = "SURVEY_FILE",
        required = true,
        num_args = 1..,
        help = "Survey files to cross-check (one per segment)"
    )]
    pub inputs: Vec<PathBuf>,

    /// Maximum absolute numeric difference before two values are discrepant
    #[arg(
        short = 't',
        long = "tolerance",
        value_name = "VALUE",
        help = "Numeric comparison tolerance (default 0.001)"
    )]
    pub tolerance: Option<f64>,

    /// Path to configuration file
    ///
    /// TOML file overriding the comparison schema and tolerance. If not
    /// specified, looks for ~/.config/survey-crosscheck/config.toml.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Write the report to a file instead of stdout"
    )]
    pub output_file: Option<PathBuf>,

    /// Output format for the report and run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except the report and errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress summary and progress output",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report plus a human-readable summary
    Human,
    /// Single JSON document with report entries and run statistics
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.reference.exists() {
            return Err(Error::configuration(format!(
                "Reference file does not exist: {}",
                self.reference.display()
            )));
        }
        if !self.reference.is_file() {
            return Err(Error::configuration(format!(
                "Reference path is not a file: {}",
                self.reference.display()
            )));
        }

        if let Some(tolerance) = self.tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(Error::configuration(format!(
                    "Tolerance must be a non-negative finite number, got {}",
                    tolerance
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            reference: PathBuf::new(),
            inputs: Vec::new(),
            tolerance: None,
            config_file: None,
            output_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn reference_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"PIPELINE,EASTING,NORTHING,KP_NEW\n").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validation_accepts_existing_reference() {
        let reference = reference_file();
        let args = CheckArgs {
            reference: reference.path().to_path_buf(),
            inputs: vec![PathBuf::from("survey.csv")],
            ..Default::default()
        };

        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_missing_reference() {
        let args = CheckArgs {
            reference: PathBuf::from("/nonexistent/reference.csv"),
            inputs: vec![PathBuf::from("survey.csv")],
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_directory_reference() {
        let dir = TempDir::new().unwrap();
        let args = CheckArgs {
            reference: dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_tolerance() {
        let reference = reference_file();
        let args = CheckArgs {
            reference: reference.path().to_path_buf(),
            tolerance: Some(-0.001),
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_missing_config_file() {
        let reference = reference_file();
        let args = CheckArgs {
            reference: reference.path().to_path_buf(),
            config_file: Some(PathBuf::from("/nonexistent/config.toml")),
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_output_in_missing_directory() {
        let reference = reference_file();
        let args = CheckArgs {
            reference: reference.path().to_path_buf(),
            output_file: Some(PathBuf::from("/nonexistent/dir/report.txt")),
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let mut args = CheckArgs::default();

        assert_eq!(args.get_log_level(), "warn");
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress_respects_quiet() {
        let mut args = CheckArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_cli_parsing_round_trip() {
        let args = Args::parse_from([
            "survey-crosscheck",
            "check",
            "--reference",
            "ref.csv",
            "--tolerance",
            "0.01",
            "a.csv",
            "b.csv",
        ]);

        let Commands::Check(check) = args.get_command();
        assert_eq!(check.reference, PathBuf::from("ref.csv"));
        assert_eq!(check.tolerance, Some(0.01));
        assert_eq!(
            check.inputs,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
    }
}
