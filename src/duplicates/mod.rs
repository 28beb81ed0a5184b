//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Grouping files under a `(digest, size)` key
//! - The in-memory index of all groups
//! - Scan / load / report orchestration
//! - Ranking duplicate groups by footprint

pub mod finder;
pub mod groups;
pub mod index;
pub mod report;

pub use finder::{DuplicateFinder, FinderConfig, FinderError, ScanSummary};
pub use groups::{DuplicateGroup, GroupKey};
pub use index::Index;
pub use report::Report;
