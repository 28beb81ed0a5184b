//! JSON output formatter for duplicate reports.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "digest": "0000000000003132333435363738393031323334",
//!       "size": 1024,
//!       "count": 2,
//!       "total_size": 2048,
//!       "files": ["/path/to/file1.txt", "/path/to/file2.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "duplicate_groups": 1,
//!     "duplicate_files": 1,
//!     "total_size": 2048,
//!     "reclaimable_space": 1024
//!   }
//! }
//! ```
//!
//! Groups appear in report order (largest footprint first). Paths are
//! emitted exactly as recorded in the index.

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, Report};

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Digest token, exactly as written to the index file
    pub digest: String,
    /// File size in bytes
    pub size: u64,
    /// Number of files in the group
    pub count: usize,
    /// count * size
    pub total_size: u64,
    /// Paths in discovery order
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            digest: group.digest.to_string(),
            size: group.size,
            count: group.len(),
            total_size: group.total_size(),
            files: group.files.clone(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Number of duplicate groups
    pub duplicate_groups: usize,
    /// Total number of duplicate files (excluding originals)
    pub duplicate_files: usize,
    /// Bytes occupied by all files in all groups
    pub total_size: u64,
    /// Total space that can be reclaimed by removing duplicates (bytes)
    pub reclaimable_space: u64,
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from a report.
    ///
    /// # Example
    ///
    /// ```
    /// use hashdir::duplicates::{Index, Report};
    /// use hashdir::output::json::JsonOutput;
    /// use hashdir::scanner::Digest;
    ///
    /// let mut index = Index::new();
    /// index.put(Digest::new(1), 10, "/a");
    /// index.put(Digest::new(1), 10, "/b");
    ///
    /// let output = JsonOutput::new(&Report::from_index(&index));
    /// assert_eq!(output.duplicates.len(), 1);
    /// assert_eq!(output.summary.reclaimable_space, 10);
    /// ```
    #[must_use]
    pub fn new(report: &Report) -> Self {
        Self {
            duplicates: report
                .groups()
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
            summary: JsonSummary {
                duplicate_groups: report.groups().len(),
                duplicate_files: report.duplicate_files(),
                total_size: report.total_size(),
                reclaimable_space: report.reclaimable_space(),
            },
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write JSON to a writer.
    ///
    /// # Arguments
    ///
    /// * `writer` - The writer to output to (e.g., stdout)
    /// * `pretty` - Whether to pretty-print the output
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
