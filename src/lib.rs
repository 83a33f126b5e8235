//! Catalog Cleaner Library
//!
//! Turns a flat product-catalog CSV export into a cleaned JSON record set.
//!
//! This library provides tools for:
//! - Loading catalog exports with null-token detection and header validation
//! - Parsing string-encoded category hierarchies into a leaf category
//! - Coercing ratings and prices with total, default-substituting parsers
//! - Writing the cleaned records as a pretty-printed JSON array
//!
//! ## Usage
//!
//! ```no_run
//! use catalog_cleaner::{CatalogProcessor, CleanerConfig};
//!
//! # fn example() -> catalog_cleaner::Result<()> {
//! let config = CleanerConfig::default()
//!     .with_input_path("data/flipkart.csv")
//!     .with_output_path("data/processed_products.json");
//!
//! let stats = CatalogProcessor::new(config)?.process()?;
//! println!("Wrote {} of {} rows", stats.records_written, stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;

// Re-export commonly used types
pub use config::CleanerConfig;
pub use error::{CleanerError, Result};
pub use models::{CleanedRecord, CleaningStats, Price, RawRecord};
pub use processor::CatalogProcessor;
pub use processor::cleaner::RecordCleaner;
