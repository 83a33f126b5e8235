//! Catalog cleaning pipeline.
//!
//! Orchestrates a single batch run: load the CSV export, clean every row,
//! and write the cleaned record set as JSON. Each stage lives in its own
//! module:
//! - [`reader`] - CSV loading and null detection
//! - [`column_mapping`] - header validation and column lookup
//! - [`field_parsers`] - per-field parsing helpers
//! - [`category_tree`] - category hierarchy literal parsing
//! - [`cleaner`] - the row-wise cleaning transform
//! - [`writer`] - pretty-printed JSON output

pub mod category_tree;
pub mod cleaner;
pub mod column_mapping;
pub mod field_parsers;
pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{cleaner::RecordCleaner, writer::JsonWriter};

use crate::config::CleanerConfig;
use crate::constants::{PROGRESS_CHARS, PROGRESS_TEMPLATE};
use crate::error::{CleanerError, Result};
use crate::models::CleaningStats;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::info;

/// Main processor for a catalog cleaning run
#[derive(Debug)]
pub struct CatalogProcessor {
    config: CleanerConfig,
    cleaner: RecordCleaner,
    writer: JsonWriter,
}

impl CatalogProcessor {
    /// Create a processor, validating the configuration and the input path
    pub fn new(config: CleanerConfig) -> Result<Self> {
        config.validate()?;

        if !config.input_path.exists() {
            return Err(CleanerError::InputNotFound {
                path: config.input_path.clone(),
            });
        }

        Ok(Self {
            cleaner: RecordCleaner::new(&config),
            writer: JsonWriter::new(config.output_path.clone()),
            config,
        })
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Run load, clean and write; returns the run statistics
    pub fn process(&self) -> Result<CleaningStats> {
        let start_time = Instant::now();

        info!("Reading catalog from {}", self.config.input_path.display());
        let raw_records = reader::read_catalog(&self.config.input_path, &self.config)?;

        let progress_bar = self.create_progress_bar(raw_records.len() as u64);
        let (cleaned, mut stats) = self.cleaner.clean(raw_records, progress_bar.as_ref());
        if let Some(pb) = &progress_bar {
            pb.finish_and_clear();
        }

        info!(
            "Cleaned {} of {} rows ({} dropped)",
            stats.records_written,
            stats.total_rows,
            stats.dropped()
        );

        if self.config.dry_run {
            info!("Dry run: skipping write to {}", self.writer.output_path().display());
        } else {
            stats.output_bytes = self.writer.write(&cleaned)?;
            info!(
                "Saved {} records to {}",
                cleaned.len(),
                self.writer.output_path().display()
            );
        }

        stats.processing_time = start_time.elapsed();
        Ok(stats)
    }

    fn create_progress_bar(&self, total: u64) -> Option<ProgressBar> {
        if !self.config.show_progress {
            return None;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars(PROGRESS_CHARS),
        );
        pb.set_message("Cleaning rows");
        Some(pb)
    }
}
