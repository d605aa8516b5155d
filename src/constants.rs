//! Application constants for the survey cross-checker
//!
//! This module contains the fixed column names, comparison schema, and
//! default values used throughout the cross-check application.

// =============================================================================
// Column Names
// =============================================================================

/// Column identifying the pipeline in the reference file
pub const PIPELINE_COLUMN: &str = "PIPELINE";

/// Column identifying the pipeline segment in a survey file
pub const ID_COLUMN: &str = "ID";

/// Survey-file columns compared against the reference, in order
pub const FILE_COMPARE_COLUMNS: &[&str] = &["EASTING", "NORTHING", "KP"];

/// Reference-file columns compared against the survey files, in order.
///
/// The two sources name the chainage column differently: survey files use
/// "KP", the reference uses "KP_NEW". The pairing is positional.
pub const REFERENCE_COMPARE_COLUMNS: &[&str] = &["EASTING", "NORTHING", "KP_NEW"];

// =============================================================================
// Comparison Defaults
// =============================================================================

/// Maximum absolute numeric difference before two values are discrepant
pub const DEFAULT_TOLERANCE: f64 = 0.001;

// =============================================================================
// Configuration File Locations
// =============================================================================

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "survey-crosscheck";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
