//! JSON output for cleaned records
//!
//! Serializes the whole record set as one pretty-printed JSON array and
//! writes it in a single call once serialization has succeeded.

use crate::error::{CleanerError, Result};
use crate::models::CleanedRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer for the cleaned record set
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_path: PathBuf,
}

impl JsonWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write all records, returning the number of bytes written
    pub fn write(&self, records: &[CleanedRecord]) -> Result<u64> {
        let json = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = self
            .output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|source| CleanerError::OutputWrite {
                path: self.output_path.clone(),
                source,
            })?;
        }

        fs::write(&self.output_path, &json).map_err(|source| CleanerError::OutputWrite {
            path: self.output_path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} records ({} bytes) to {}",
            records.len(),
            json.len(),
            self.output_path.display()
        );

        Ok(json.len() as u64)
    }
}
