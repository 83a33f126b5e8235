//! Core data structures for catalog cleaning.
//!
//! Defines the raw row read from the CSV export, the cleaned record written
//! to JSON, the numeric price type, and the run statistics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One unprocessed catalog row
///
/// `None` marks a null cell: an empty or NA-token value, or a trailing cell
/// omitted from a short row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub product_name: Option<String>,
    pub product_category_tree: Option<String>,
    pub discounted_price: Option<String>,
    pub overall_rating: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub image: Option<String>,
}

/// One cleaned catalog record, serialized with fields in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub product_name: String,
    pub product_category: String,
    pub discounted_price: Price,
    pub overall_rating: f64,
    pub brand: String,
    pub description: String,
    pub product_url: String,
    pub image: String,
}

/// Numeric product price
///
/// Integral input keeps its integer form in the output (`499`, not `499.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Integer(i64),
    Float(f64),
}

impl Price {
    /// Parse a price cell; `None` if the text is not a finite number
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();

        if let Ok(integer) = trimmed.parse::<i64>() {
            return Some(Price::Integer(integer));
        }

        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Price::Float)
    }
}

/// Statistics for a cleaning run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningStats {
    /// Data rows read from the CSV (header excluded)
    pub total_rows: usize,
    /// Records emitted by the cleaner
    pub records_written: usize,
    /// Rows dropped because the price cell was null
    pub missing_price: usize,
    /// Rows dropped because the price cell was not a finite number
    pub invalid_price: usize,
    /// Records whose rating fell back to the default
    pub rating_defaults: usize,
    /// Records whose category fell back to the unknown label
    pub category_defaults: usize,
    /// Records whose brand fell back to the unknown label
    pub brand_defaults: usize,
    /// Records whose description fell back to the default
    pub description_defaults: usize,
    /// Size of the written JSON file (0 in dry-run mode)
    pub output_bytes: u64,
    /// Wall-clock time for load, clean and write
    pub processing_time: Duration,
}

impl CleaningStats {
    /// Total rows removed by the price filter
    pub fn dropped(&self) -> usize {
        self.missing_price + self.invalid_price
    }

    /// Percentage of input rows that made it into the output
    pub fn retention_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.records_written as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}
