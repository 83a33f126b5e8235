//! Catalog CSV loading
//!
//! Reads the whole export into memory as [`RawRecord`]s. Structural problems
//! (unreadable file, bad UTF-8, missing columns, over-long rows) are fatal;
//! cell contents are never interpreted here beyond null detection.

use super::column_mapping::ColumnMapping;
use super::field_parsers::get_optional_field;
use crate::config::CleanerConfig;
use crate::constants::columns;
use crate::error::{CleanerError, Result};
use crate::models::RawRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load every data row of a catalog CSV file
///
/// The caller checks that the file exists; open failures surface as `Io`.
pub fn read_catalog(path: &Path, config: &CleanerConfig) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let records = read_catalog_from(file, path, config)?;

    info!(
        "Loaded {} rows from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Load catalog rows from any reader; `source` names it in errors
pub fn read_catalog_from<R: Read>(
    reader: R,
    source: &Path,
    config: &CleanerConfig,
) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CleanerError::csv(source, e))?
        .clone();

    let mapping = ColumnMapping::analyze(&headers, source)?;
    debug!(
        "Column mapping: {} columns, {} ignored",
        mapping.width,
        mapping.extra_columns()
    );

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| CleanerError::csv(source, e))?;

        if record.len() > mapping.width {
            return Err(CleanerError::MalformedRow {
                path: source.to_path_buf(),
                row: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: mapping.width,
                found: record.len(),
            });
        }

        let field = |name: &str| get_optional_field(&record, &mapping, config, name);
        records.push(RawRecord {
            product_name: field(columns::PRODUCT_NAME),
            product_category_tree: field(columns::PRODUCT_CATEGORY_TREE),
            discounted_price: field(columns::DISCOUNTED_PRICE),
            overall_rating: field(columns::OVERALL_RATING),
            brand: field(columns::BRAND),
            description: field(columns::DESCRIPTION),
            product_url: field(columns::PRODUCT_URL),
            image: field(columns::IMAGE),
        });
    }

    Ok(records)
}
