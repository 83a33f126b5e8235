//! Field parsing utilities for catalog records
//!
//! Cell extraction with null detection, plus the fallible per-field parsers
//! the cleaner turns into total functions by substituting defaults.

use super::category_tree::CategoryTree;
use super::column_mapping::ColumnMapping;
use crate::config::CleanerConfig;
use crate::models::Price;
use csv::StringRecord;
use tracing::debug;

/// Get a cell value, `None` if absent from a short row or an NA token
pub fn get_optional_field(
    record: &StringRecord,
    mapping: &ColumnMapping,
    config: &CleanerConfig,
    field_name: &str,
) -> Option<String> {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .filter(|value| !config.is_na(value))
        .map(str::to_string)
}

/// Parse a rating as a finite float
pub fn parse_rating(value: Option<&str>) -> Option<f64> {
    let value = value?;
    match value.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() => Some(rating),
        _ => {
            debug!("Unparsable rating '{}'", value);
            None
        }
    }
}

/// Parse a price cell into a numeric price
pub fn parse_price(value: Option<&str>) -> Option<Price> {
    value.and_then(Price::parse)
}

/// Extract the leaf category of the first path in a category tree literal
pub fn leaf_category(value: Option<&str>, delimiter: &str) -> Option<String> {
    let value = value?;
    match CategoryTree::parse(value) {
        Ok(tree) => {
            let leaf = tree.leaf_category(delimiter).map(str::to_string);
            if leaf.is_none() {
                debug!(
                    "Category tree with {} entries has no leaf: '{}'",
                    tree.len(),
                    value
                );
            }
            leaf
        }
        Err(e) => {
            debug!("Unparsable category tree '{}': {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_get_optional_field() {
        let headers = StringRecord::from(vec![
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
        let config = CleanerConfig::default();
        let record = StringRecord::from(vec!["Shirt", "[]", "499", "NA", ""]);

        assert_eq!(
            get_optional_field(&record, &mapping, &config, "product_name"),
            Some("Shirt".to_string())
        );
        assert_eq!(
            get_optional_field(&record, &mapping, &config, "overall_rating"),
            None
        );
        assert_eq!(get_optional_field(&record, &mapping, &config, "brand"), None);
        // Short row: trailing cells are null
        assert_eq!(get_optional_field(&record, &mapping, &config, "image"), None);
        // Unknown column
        assert_eq!(get_optional_field(&record, &mapping, &config, "sku"), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some("4.2")), Some(4.2));
        assert_eq!(parse_rating(Some(" 5 ")), Some(5.0));
        assert_eq!(parse_rating(Some("No rating available")), None);
        assert_eq!(parse_rating(Some("NaN")), None);
        assert_eq!(parse_rating(Some("inf")), None);
        assert_eq!(parse_rating(None), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("499")), Some(Price::Integer(499)));
        assert_eq!(parse_price(Some("12.99")), Some(Price::Float(12.99)));
        assert_eq!(parse_price(Some("call us")), None);
        assert_eq!(parse_price(None), None);
    }

    #[test]
    fn test_leaf_category() {
        assert_eq!(
            leaf_category(Some(r#"["Clothing >> Women >> Dresses"]"#), ">>"),
            Some("Dresses".to_string())
        );
        assert_eq!(leaf_category(Some("not a list"), ">>"), None);
        assert_eq!(leaf_category(Some("[]"), ">>"), None);
        assert_eq!(leaf_category(None, ">>"), None);
    }

    #[test]
    fn test_leaf_category_decodes_escapes_and_tuples() {
        assert_eq!(
            leaf_category(Some(r#"["Home >> Caf\u00e9"]"#), ">>"),
            Some("Café".to_string())
        );
        assert_eq!(
            leaf_category(Some(r#"("Men >> Shirts",)"#), ">>"),
            Some("Shirts".to_string())
        );
        assert_eq!(
            leaf_category(Some(r#"["Men >> Shirts", 5]"#), ">>"),
            Some("Shirts".to_string())
        );
    }
}
