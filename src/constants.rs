//! Application constants for the catalog cleaner
//!
//! Default paths, column names, fallback values and the null-token table
//! used when reading the catalog export.

// =============================================================================
// Default Paths
// =============================================================================

/// Catalog export read when no input path is given
pub const DEFAULT_INPUT_PATH: &str = "data/flipkart.csv";

/// Cleaned record set written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "data/processed_products.json";

// =============================================================================
// Fallback Values
// =============================================================================

/// Substituted for a missing brand or an unparsable category tree
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Substituted for a missing description
pub const DEFAULT_DESCRIPTION: &str = "";

/// Substituted for an unparsable rating
pub const DEFAULT_RATING: f64 = 0.0;

/// Separator between levels of a category path ("Men >> Shirts")
pub const CATEGORY_DELIMITER: &str = ">>";

// =============================================================================
// Column Names
// =============================================================================

/// Input column names as they appear in the CSV header
pub mod columns {
    pub const PRODUCT_NAME: &str = "product_name";
    pub const PRODUCT_CATEGORY_TREE: &str = "product_category_tree";
    pub const DISCOUNTED_PRICE: &str = "discounted_price";
    pub const OVERALL_RATING: &str = "overall_rating";
    pub const BRAND: &str = "brand";
    pub const DESCRIPTION: &str = "description";
    pub const PRODUCT_URL: &str = "product_url";
    pub const IMAGE: &str = "image";

    /// Every column the cleaner reads; all must be present in the header
    pub const REQUIRED: &[&str] = &[
        PRODUCT_NAME,
        PRODUCT_CATEGORY_TREE,
        DISCOUNTED_PRICE,
        OVERALL_RATING,
        BRAND,
        DESCRIPTION,
        PRODUCT_URL,
        IMAGE,
    ];
}

// =============================================================================
// Null Detection
// =============================================================================

/// Cell values treated as null when reading the CSV (exact match)
///
/// Matches the default NA token set of common dataframe CSV readers, so a
/// catalog that was previously loaded with one of them cleans identically.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// =============================================================================
// Progress Reporting
// =============================================================================

/// Progress bar template for the row cleaning stage
pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Progress bar fill characters
pub const PROGRESS_CHARS: &str = "#>-";
