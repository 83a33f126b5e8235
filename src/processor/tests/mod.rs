//! Integration tests for the processor module
//!
//! Tests the complete cleaning pipeline against small catalog exports
//! written to temporary directories.


use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header row of a catalog export, including columns the cleaner ignores
pub const CATALOG_HEADER: &str = "uniq_id,product_url,product_name,product_category_tree,retail_price,discounted_price,image,description,overall_rating,brand";

/// Helper to write a catalog export and pick an output path next to it
pub fn create_catalog(temp_dir: &TempDir, rows: &[&str]) -> (PathBuf, PathBuf) {
    let input_path = temp_dir.path().join("data").join("flipkart.csv");
    fs::create_dir_all(input_path.parent().unwrap()).unwrap();

    let mut content = String::from(CATALOG_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&input_path, content).unwrap();

    let output_path = temp_dir.path().join("data").join("processed_products.json");
    (input_path, output_path)
}

/// Helper to read the written JSON back as generic values
pub fn read_output(path: &Path) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
