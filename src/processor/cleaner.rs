//! Row-wise record cleaning
//!
//! Each raw row is filtered on its price, then coerced field by field into a
//! [`CleanedRecord`]. Every per-field step is total: a parse failure
//! substitutes the configured default and is only reflected in the stats.

use super::field_parsers::{leaf_category, parse_price, parse_rating};
use crate::config::CleanerConfig;
use crate::constants::DEFAULT_RATING;
use crate::models::{CleanedRecord, CleaningStats, RawRecord};
use indicatif::ProgressBar;
use tracing::{debug, warn};

/// Why a row was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Price cell was null
    MissingPrice,
    /// Price cell held something other than a finite number
    InvalidPrice(String),
}

/// Which fields fell back to their defaults for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallbacks {
    pub rating: bool,
    pub category: bool,
    pub brand: bool,
    pub description: bool,
}

/// Result of cleaning a single row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Kept(CleanedRecord, Fallbacks),
    Dropped(DropReason),
}

/// Stateless row cleaner holding the configured fallback values
#[derive(Debug, Clone)]
pub struct RecordCleaner {
    unknown_label: String,
    default_description: String,
    category_delimiter: String,
}

impl RecordCleaner {
    pub fn new(config: &CleanerConfig) -> Self {
        Self {
            unknown_label: config.unknown_label.clone(),
            default_description: config.default_description.clone(),
            category_delimiter: config.category_delimiter.clone(),
        }
    }

    /// Clean one row
    pub fn clean_record(&self, raw: RawRecord) -> RowOutcome {
        let discounted_price = match raw.discounted_price.as_deref() {
            None => return RowOutcome::Dropped(DropReason::MissingPrice),
            Some(text) => match parse_price(Some(text)) {
                Some(price) => price,
                None => return RowOutcome::Dropped(DropReason::InvalidPrice(text.to_string())),
            },
        };

        let mut fallbacks = Fallbacks::default();

        let overall_rating = parse_rating(raw.overall_rating.as_deref()).unwrap_or_else(|| {
            fallbacks.rating = true;
            DEFAULT_RATING
        });

        let product_category =
            leaf_category(raw.product_category_tree.as_deref(), &self.category_delimiter)
                .unwrap_or_else(|| {
                    fallbacks.category = true;
                    self.unknown_label.clone()
                });

        let brand = raw.brand.unwrap_or_else(|| {
            fallbacks.brand = true;
            self.unknown_label.clone()
        });

        let description = raw.description.unwrap_or_else(|| {
            fallbacks.description = true;
            self.default_description.clone()
        });

        let record = CleanedRecord {
            product_name: raw.product_name.unwrap_or_default(),
            product_category,
            discounted_price,
            overall_rating,
            brand,
            description,
            product_url: raw.product_url.unwrap_or_default(),
            image: raw.image.unwrap_or_default(),
        };

        RowOutcome::Kept(record, fallbacks)
    }

    /// Clean a batch, preserving input order and tallying the outcome of each row
    pub fn clean(
        &self,
        records: Vec<RawRecord>,
        progress_bar: Option<&ProgressBar>,
    ) -> (Vec<CleanedRecord>, CleaningStats) {
        let mut stats = CleaningStats {
            total_rows: records.len(),
            ..Default::default()
        };
        let mut cleaned = Vec::with_capacity(records.len());

        for (index, raw) in records.into_iter().enumerate() {
            match self.clean_record(raw) {
                RowOutcome::Kept(record, fallbacks) => {
                    stats.rating_defaults += usize::from(fallbacks.rating);
                    stats.category_defaults += usize::from(fallbacks.category);
                    stats.brand_defaults += usize::from(fallbacks.brand);
                    stats.description_defaults += usize::from(fallbacks.description);
                    cleaned.push(record);
                }
                RowOutcome::Dropped(DropReason::MissingPrice) => {
                    stats.missing_price += 1;
                    debug!("Dropped row {}: no discounted price", index + 1);
                }
                RowOutcome::Dropped(DropReason::InvalidPrice(text)) => {
                    stats.invalid_price += 1;
                    warn!(
                        "Dropped row {}: unparsable discounted price '{}'",
                        index + 1,
                        text
                    );
                }
            }

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        stats.records_written = cleaned.len();
        (cleaned, stats)
    }
}
