//! Index file persistence.
//!
//! The index file is a flat, human-readable text file with one line per
//! indexed file. It is written during a scan, line by line as files are
//! hashed, and can be read back later to rebuild the same
//! [`Index`](crate::duplicates::Index) without touching the scanned trees.
//!
//! # Format
//!
//! ```text
//! <digest-token> <size, 10-digit zero-padded> <path>
//! ```
//!
//! See [`Digest::to_token`](crate::scanner::Digest::to_token) for the
//! token encoding.
//!
//! # Architecture
//!
//! * [`line`]: Encoding and decoding of a single line.
//! * [`writer`]: Write-through appender used while scanning.
//! * [`loader`]: Line-by-line reader that feeds an index.

pub mod line;
pub mod loader;
pub mod writer;

use std::io;
use std::path::PathBuf;

pub use line::{IndexLine, LineError, ParsedLine};
pub use loader::{load_index, LoadSummary};
pub use writer::IndexWriter;

/// Errors reading or writing the index file.
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    /// The index file could not be created.
    #[error("Cannot create index file {path}: {source}")]
    Create {
        /// Index file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The index file could not be opened for reading.
    #[error("Cannot load index {path}: {source}")]
    Open {
        /// Index file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Appending to the index file failed.
    #[error("Cannot write index file {path}: {source}")]
    Write {
        /// Index file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading the index file failed partway.
    #[error("Error reading index file {path}: {source}")]
    Read {
        /// Index file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}
