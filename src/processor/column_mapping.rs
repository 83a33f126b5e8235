//! Column mapping for the catalog CSV header
//!
//! Maps header names to field indices and checks that every column the
//! cleaner reads is present.

use crate::constants::columns;
use crate::error::{CleanerError, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;

/// Column name to index mapping for one CSV file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Number of columns declared in the header
    pub width: usize,
}

impl ColumnMapping {
    /// Build the mapping from a header row, failing if required columns are absent
    pub fn analyze(headers: &StringRecord, path: &Path) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim_start_matches('\u{feff}').trim().to_string();
            // Duplicate names resolve to the first occurrence
            name_to_index.entry(column_name).or_insert(index);
        }

        let missing: Vec<String> = columns::REQUIRED
            .iter()
            .filter(|name| !name_to_index.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CleanerError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }

        Ok(ColumnMapping {
            name_to_index,
            width: headers.len(),
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Number of header columns the cleaner ignores
    pub fn extra_columns(&self) -> usize {
        self.width.saturating_sub(columns::REQUIRED.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_analyze_full_header() {
        let headers = header(&[
            "uniq_id",
            "product_name",
            "product_category_tree",
            "discounted_price",
            "overall_rating",
            "brand",
            "description",
            "product_url",
            "image",
        ]);

        let mapping = ColumnMapping::analyze(&headers, Path::new("test.csv")).unwrap();
        assert_eq!(mapping.get_index("product_name"), Some(1));
        assert_eq!(mapping.get_index("image"), Some(8));
        assert_eq!(mapping.get_index("uniq_id"), Some(0));
        assert_eq!(mapping.extra_columns(), 1);
    }

    #[test]
    fn test_analyze_strips_bom_and_whitespace() {
        let headers = header(&[
            "\u{feff}product_name",
            " product_category_tree ",
            "discounted_price",
            "overall_rating",
            "brand",
            "description",
            "product_url",
            "image",
        ]);

        let mapping = ColumnMapping::analyze(&headers, Path::new("test.csv")).unwrap();
        assert_eq!(mapping.get_index("product_name"), Some(0));
        assert_eq!(mapping.get_index("product_category_tree"), Some(1));
    }

    #[test]
    fn test_analyze_reports_missing_columns() {
        let headers = header(&["product_name", "brand", "image"]);

        let err = ColumnMapping::analyze(&headers, Path::new("test.csv")).unwrap_err();
        match err {
            CleanerError::MissingColumns { columns, .. } => {
                assert_eq!(
                    columns,
                    vec![
                        "product_category_tree",
                        "discounted_price",
                        "overall_rating",
                        "description",
                        "product_url",
                    ]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_columns_use_first() {
        let headers = header(&[
            "product_name",
            "product_category_tree",
            "discounted_price",
            "overall_rating",
            "brand",
            "description",
            "product_url",
            "image",
            "brand",
        ]);

        let mapping = ColumnMapping::analyze(&headers, Path::new("test.csv")).unwrap();
        assert_eq!(mapping.get_index("brand"), Some(4));
    }
}
