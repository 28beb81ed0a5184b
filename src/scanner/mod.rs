//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Sequential depth-first directory walking using walkdir
//! - Content hashing with xxHash64
//! - Classification of traversal errors into skippable and fatal
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: xxHash64 file hashing (streaming)
//!
//! # Example
//!
//! ```no_run
//! use hashdir::scanner::{Hasher, Walker};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! for entry in Walker::new(Path::new(".")).walk() {
//!     match entry {
//!         Ok(file) => {
//!             if let Some(digest) = hasher.hash_file(&file.path) {
//!                 println!("{} {} {}", digest, file.size, file.path.display());
//!             }
//!         }
//!         Err(e) if e.is_skippable() => eprintln!("Warning: {}", e),
//!         Err(e) => panic!("{}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::io;
use std::path::{Path, PathBuf};

// Re-export main types
pub use hasher::{Digest, Hasher, BUFFER_SIZE, TOKEN_WIDTH};
pub use walker::Walker;

/// A regular file discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file, as produced by the walker (root-relative roots stay relative)
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A per-entry error that is reported and then stepped over.
    #[error("{path}: {source}")]
    Skippable {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O error that aborts the walk.
    #[error("Cannot walk {path}: {source}")]
    Fatal {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A traversal error with no underlying I/O error (e.g. a symlink loop).
    #[error("Cannot walk {path}: {message}")]
    Walk {
        /// Path where the error occurred
        path: PathBuf,
        /// Description from the walker
        message: String,
    },
}

impl ScanError {
    /// Whether traversal may continue past this error.
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Skippable { .. })
    }

    /// Path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Skippable { path, .. } | Self::Fatal { path, .. } | Self::Walk { path, .. } => {
                path
            }
        }
    }
}

/// Whether an I/O error kind is one traversal steps over.
///
/// The skippable set is: invalid input, permission denied, already exists,
/// and not found. Everything else is fatal.
#[must_use]
pub fn is_skippable_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::InvalidInput
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::AlreadyExists
            | io::ErrorKind::NotFound
    )
}

/// Turn an I/O error met while visiting `path` into a [`ScanError`].
#[must_use]
pub fn classify_io_error(path: PathBuf, source: io::Error) -> ScanError {
    if is_skippable_kind(source.kind()) {
        ScanError::Skippable { path, source }
    } else {
        ScanError::Fatal { path, source }
    }
}
