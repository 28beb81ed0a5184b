//! Output formatters for duplicate reports.
//!
//! This module provides different output formats for reports:
//! - Plain text for people (the default)
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use hashdir::duplicates::{DuplicateFinder, FinderConfig};
//! use hashdir::output::TextOutput;
//!
//! let mut finder = DuplicateFinder::new(FinderConfig::new("checksum.txt"));
//! finder.load_index().unwrap();
//!
//! let report = finder.report();
//! print!("{}", TextOutput::new(&report).render());
//! ```

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonOutput;
pub use text::{format_size, TextOutput, NO_DUPLICATES};
