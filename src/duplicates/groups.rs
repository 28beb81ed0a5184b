//! Duplicate group records and their composite key.
//!
//! # Overview
//!
//! Every indexed file lands in exactly one [`DuplicateGroup`], selected by
//! a [`GroupKey`] built from its content digest and its byte size. Two
//! files share a group only when both halves of the key match, so equal
//! sizes with different content never collide.
//!
//! # Example
//!
//! ```
//! use hashdir::duplicates::{DuplicateGroup, GroupKey};
//! use hashdir::scanner::Digest;
//!
//! let mut group = DuplicateGroup::new(Digest::new(7), 1024);
//! group.push("/a.txt".to_string());
//! group.push("/b.txt".to_string());
//!
//! assert_eq!(group.key(), GroupKey::new(Digest::new(7), 1024));
//! assert_eq!(group.total_size(), 2048);
//! assert_eq!(group.wasted_space(), 1024);
//! ```

use crate::scanner::Digest;

/// Composite index key: content digest plus byte size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Content digest
    pub digest: Digest,
    /// File size in bytes
    pub size: u64,
}

impl GroupKey {
    /// Create a new key.
    #[must_use]
    pub fn new(digest: Digest, size: u64) -> Self {
        Self { digest, size }
    }
}

/// All files sharing one `(digest, size)` key, in discovery order.
///
/// The same literal path may appear more than once (for example when two
/// scanned roots overlap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Content digest shared by every file in the group
    pub digest: Digest,
    /// File size in bytes (shared by all files in the group)
    pub size: u64,
    /// Paths in insertion order
    pub files: Vec<String>,
}

impl DuplicateGroup {
    /// Create an empty group for the given key parts.
    #[must_use]
    pub fn new(digest: Digest, size: u64) -> Self {
        Self {
            digest,
            size,
            files: Vec::new(),
        }
    }

    /// Key this group is stored under.
    #[must_use]
    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.digest.clone(), self.size)
    }

    /// Append a path to the group.
    pub fn push(&mut self, path: String) {
        self.files.push(path);
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check if this group holds duplicates (2+ files).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.files.len() > 1
    }

    /// Total bytes occupied by all files in this group, original included.
    ///
    /// This is the ranking key for reports.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.size.saturating_mul(self.files.len() as u64)
    }

    /// Bytes that removing every copy but one would free.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size
            .saturating_mul(self.files.len().saturating_sub(1) as u64)
    }

    /// Number of duplicate copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }
}
