//! Configuration management and validation
//!
//! Holds the comparison schema and tolerance for one cross-check run.
//! Defaults come from [`crate::constants`]; a TOML file can override them,
//! and CLI flags override the file (layered loading, applied by the CLI
//! command layer).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TOLERANCE, FILE_COMPARE_COLUMNS, ID_COLUMN,
    PIPELINE_COLUMN, REFERENCE_COMPARE_COLUMNS,
};
use crate::{Error, Result};

/// Comparison settings for one cross-check run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum absolute numeric difference before two values are discrepant
    pub tolerance: f64,

    /// Column grouping the reference file by pipeline
    pub pipeline_column: String,

    /// Column identifying the segment in a survey file
    pub id_column: String,

    /// Survey-file columns to compare, in order
    pub file_columns: Vec<String>,

    /// Reference columns to compare, paired positionally with `file_columns`
    pub reference_columns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            pipeline_column: PIPELINE_COLUMN.to_string(),
            id_column: ID_COLUMN.to_string(),
            file_columns: FILE_COMPARE_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            reference_columns: REFERENCE_COMPARE_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Default config file location (~/.config/survey-crosscheck/config.toml)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Layered loading: explicit file if given, else the default location if
    /// it exists, else built-in defaults.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        if let Ok(default_path) = Self::default_config_path() {
            if default_path.exists() {
                debug!("Loading config from {}", default_path.display());
                return Self::load(&default_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Override the tolerance, e.g. from a CLI flag
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Normalize column names the same way the reader normalizes headers
    /// (trim, uppercase), so config-supplied names match parsed schemas.
    pub fn normalized(mut self) -> Self {
        self.pipeline_column = self.pipeline_column.trim().to_uppercase();
        self.id_column = self.id_column.trim().to_uppercase();
        for column in self
            .file_columns
            .iter_mut()
            .chain(self.reference_columns.iter_mut())
        {
            *column = column.trim().to_uppercase();
        }
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::configuration(format!(
                "Tolerance must be a non-negative finite number, got {}",
                self.tolerance
            )));
        }

        if self.file_columns.is_empty() {
            return Err(Error::configuration(
                "Comparison column lists cannot be empty",
            ));
        }

        if self.file_columns.len() != self.reference_columns.len() {
            return Err(Error::configuration(format!(
                "Comparison column lists must have equal length: {} file columns, {} reference columns",
                self.file_columns.len(),
                self.reference_columns.len()
            )));
        }

        if self.pipeline_column.is_empty() || self.id_column.is_empty() {
            return Err(Error::configuration(
                "Pipeline and ID column names cannot be empty",
            ));
        }

        Ok(())
    }
}
