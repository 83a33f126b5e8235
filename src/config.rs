//! Configuration management and validation.
//!
//! Holds input/output locations, the fallback values substituted during
//! cleaning, and the null-token table used by the CSV loader.

use crate::constants::{
    CATEGORY_DELIMITER, DEFAULT_DESCRIPTION, DEFAULT_INPUT_PATH, DEFAULT_NA_VALUES,
    DEFAULT_OUTPUT_PATH, UNKNOWN_LABEL,
};
use crate::error::{CleanerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a cleaning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// CSV catalog export to read
    pub input_path: PathBuf,

    /// JSON file to write the cleaned records to
    pub output_path: PathBuf,

    /// Label used for a missing brand or an unparsable category tree
    pub unknown_label: String,

    /// Description used when the input has none
    pub default_description: String,

    /// Separator between category path levels
    pub category_delimiter: String,

    /// Cell values treated as null (exact match)
    pub na_values: Vec<String>,

    /// Clean and report without writing the output file
    pub dry_run: bool,

    /// Show a progress bar while cleaning rows
    pub show_progress: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            unknown_label: UNKNOWN_LABEL.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            category_delimiter: CATEGORY_DELIMITER.to_string(),
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
            show_progress: true,
        }
    }
}

impl CleanerConfig {
    /// Set the CSV input path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the JSON output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Replace the label used for unknown brands and categories
    pub fn with_unknown_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_label = label.into();
        self
    }

    /// Replace the category path delimiter
    pub fn with_category_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.category_delimiter = delimiter.into();
        self
    }

    /// Replace the null-token table
    pub fn with_na_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.na_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Enable dry-run mode
    pub fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check whether a raw cell value should be treated as null
    pub fn is_na(&self, value: &str) -> bool {
        self.na_values.iter().any(|na| na == value)
    }

    /// Reject settings that would make the run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.category_delimiter.is_empty() {
            return Err(CleanerError::configuration(
                "Category delimiter must not be empty",
            ));
        }

        if !self.dry_run && self.input_path == self.output_path {
            return Err(CleanerError::configuration(format!(
                "Output path must differ from input path: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanerConfig::default();

        assert_eq!(config.input_path, PathBuf::from("data/flipkart.csv"));
        assert_eq!(
            config.output_path,
            PathBuf::from("data/processed_products.json")
        );
        assert_eq!(config.unknown_label, "Unknown");
        assert_eq!(config.default_description, "");
        assert_eq!(config.category_delimiter, ">>");
        assert!(!config.dry_run);
        assert!(config.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = CleanerConfig::default()
            .with_input_path("in.csv")
            .with_output_path("out.json")
            .with_unknown_label("n/a")
            .with_category_delimiter("/")
            .with_dry_run()
            .without_progress();

        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.unknown_label, "n/a");
        assert_eq!(config.category_delimiter, "/");
        assert!(config.dry_run);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_is_na_uses_exact_match() {
        let config = CleanerConfig::default();

        assert!(config.is_na(""));
        assert!(config.is_na("NA"));
        assert!(config.is_na("null"));
        assert!(config.is_na("None"));
        assert!(!config.is_na(" NA"));
        assert!(!config.is_na("No rating available"));
        assert!(!config.is_na("0"));
    }

    #[test]
    fn test_custom_na_values() {
        let config = CleanerConfig::default().with_na_values(["-"]);

        assert!(config.is_na("-"));
        assert!(!config.is_na(""));
    }

    #[test]
    fn test_validate_rejects_empty_delimiter() {
        let config = CleanerConfig::default().with_category_delimiter("");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CleanerError::Configuration { .. }));
    }

    #[test]
    fn test_validate_rejects_same_input_and_output() {
        let config = CleanerConfig::default()
            .with_input_path("catalog.csv")
            .with_output_path("catalog.csv");
        assert!(config.validate().is_err());

        // Nothing is written in dry-run mode, so the clash is harmless
        assert!(config.with_dry_run().validate().is_ok());
    }
}
