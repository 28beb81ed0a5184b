//! Ranked duplicate report.

use super::groups::DuplicateGroup;
use super::index::Index;

/// Duplicate groups ranked by total footprint, largest first.
///
/// Only groups with two or more files are included. Rendering lives in
/// [`crate::output`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    groups: Vec<DuplicateGroup>,
}

impl Report {
    /// Build a report from the current state of an index.
    #[must_use]
    pub fn from_index(index: &Index) -> Self {
        Self {
            groups: index.ranked_duplicates(),
        }
    }

    /// Ranked groups.
    #[must_use]
    pub fn groups(&self) -> &[DuplicateGroup] {
        &self.groups
    }

    /// True when no duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of files that are copies of another (excluding one original per group).
    #[must_use]
    pub fn duplicate_files(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::duplicate_count).sum()
    }

    /// Bytes occupied by every file in every group.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.groups
            .iter()
            .fold(0u64, |acc, g| acc.saturating_add(g.total_size()))
    }

    /// Bytes that removing every copy but one would free.
    #[must_use]
    pub fn reclaimable_space(&self) -> u64 {
        self.groups
            .iter()
            .fold(0u64, |acc, g| acc.saturating_add(g.wasted_space()))
    }
}
