//! In-memory duplicate index.
//!
//! The [`Index`] maps each [`GroupKey`] to exactly one [`DuplicateGroup`].
//! It only grows: there is no removal. Groups are kept in the order their
//! key was first seen, and files inside a group in the order they were put.

use std::collections::HashMap;

use super::groups::{DuplicateGroup, GroupKey};
use crate::scanner::Digest;

/// Keyed container of duplicate groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    /// Groups in first-seen order
    groups: Vec<DuplicateGroup>,
    /// Position of each key's group in `groups`
    slots: HashMap<GroupKey, usize>,
    /// Total number of paths across all groups
    file_count: usize,
}

impl Index {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under the `(digest, size)` key.
    ///
    /// Creates the group on first sight of the key, then appends.
    pub fn put(&mut self, digest: Digest, size: u64, path: impl Into<String>) {
        let key = GroupKey::new(digest, size);
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                self.groups.push(DuplicateGroup::new(key.digest.clone(), size));
                let slot = self.groups.len() - 1;
                self.slots.insert(key, slot);
                slot
            }
        };

        self.groups[slot].push(path.into());
        self.file_count += 1;
    }

    /// Look up the group stored under `key`.
    #[must_use]
    pub fn get(&self, key: &GroupKey) -> Option<&DuplicateGroup> {
        self.slots.get(key).map(|&slot| &self.groups[slot])
    }

    /// Iterate over all groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &DuplicateGroup> {
        self.groups.iter()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether nothing has been put yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of paths recorded.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Groups holding more than one file, in first-seen order.
    pub fn duplicate_groups(&self) -> impl Iterator<Item = &DuplicateGroup> {
        self.groups.iter().filter(|g| g.has_duplicates())
    }

    /// Duplicate groups ranked by [`DuplicateGroup::total_size`], largest first.
    ///
    /// The sort is stable, so equal-ranked groups keep first-seen order.
    #[must_use]
    pub fn ranked_duplicates(&self) -> Vec<DuplicateGroup> {
        let mut ranked: Vec<DuplicateGroup> = self.duplicate_groups().cloned().collect();
        ranked.sort_by(|a, b| b.total_size().cmp(&a.total_size()));
        ranked
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a DuplicateGroup;
    type IntoIter = std::slice::Iter<'a, DuplicateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
