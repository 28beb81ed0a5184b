//! Duplicate finder: the scan, load and report entry points.
//!
//! # Overview
//!
//! [`DuplicateFinder`] owns the in-memory [`Index`] and drives the other
//! components:
//! 1. **Scan** - walk each root in order, hash every regular file, record it
//!    in the index and append it to the index file in the same pass
//! 2. **Load** - rebuild the index from an index file written earlier
//! 3. **Report** - rank the duplicate groups by total footprint
//!
//! Everything runs on the calling thread.
//!
//! # Example
//!
//! ```no_run
//! use hashdir::duplicates::{DuplicateFinder, FinderConfig};
//! use std::path::PathBuf;
//!
//! let mut finder = DuplicateFinder::new(FinderConfig::new("checksum.txt"));
//! let summary = finder.scan(&[PathBuf::from("/photos")]).unwrap();
//! println!("Indexed {} files", summary.files_indexed);
//!
//! for group in finder.report().groups() {
//!     println!("{} copies of {} bytes", group.len(), group.size);
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::index::Index;
use super::report::Report;
use crate::logging::DIAGNOSTIC_TARGET;
use crate::persist::{self, IndexLine, IndexWriter, LoadSummary, PersistError};
use crate::progress::ProgressCallback;
use crate::scanner::{FileEntry, Hasher, ScanError, Walker};

/// Configuration for the duplicate finder.
///
/// The index file path is the only option. It is where [`DuplicateFinder::scan`]
/// writes and where [`DuplicateFinder::load_index`] reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Location of the index file.
    pub index_path: PathBuf,
}

impl FinderConfig {
    /// Create a configuration pointing at `index_path`.
    #[must_use]
    pub fn new(index_path: impl Into<PathBuf>) -> Self {
        Self {
            index_path: index_path.into(),
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INDEX_FILE)
    }
}

/// Summary statistics from a scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Roots walked to completion
    pub roots_scanned: usize,
    /// Files hashed and recorded
    pub files_indexed: usize,
    /// Regular files that produced no digest (empty or unreadable)
    pub files_skipped: usize,
    /// Bytes of all indexed files
    pub bytes_indexed: u64,
    /// Skippable errors that were reported and stepped over
    pub scan_errors: Vec<ScanError>,
    /// Duration of the entire scan
    pub scan_duration: Duration,
}

/// Errors that can occur while scanning or loading.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// A fatal traversal error.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The index file could not be written or read.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Scanner, index owner and report source.
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
    index: Index,
    progress: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for DuplicateFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuplicateFinder")
            .field("config", &self.config)
            .field("index_groups", &self.index.len())
            .field("progress", &self.progress.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl DuplicateFinder {
    /// Create a finder with an empty index.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self {
            config,
            hasher: Hasher::new(),
            index: Index::new(),
            progress: None,
        }
    }

    /// Attach a progress callback.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Configuration this finder was built with.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Read-only view of the index.
    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Consume the finder and return its index.
    #[must_use]
    pub fn into_index(self) -> Index {
        self.index
    }

    /// Scan `roots` in order, writing the index file as files are hashed.
    ///
    /// The index file is truncated first. Skippable traversal errors are
    /// logged, collected in the summary and stepped over. The first fatal
    /// error stops the scan: remaining roots are not visited, and the index
    /// file keeps every line written before the failure.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Persist`] if the index file cannot be created
    /// or written, and [`FinderError::Scan`] on a fatal traversal error.
    pub fn scan(&mut self, roots: &[PathBuf]) -> Result<ScanSummary, FinderError> {
        let start_time = Instant::now();
        let mut summary = ScanSummary::default();
        let mut writer = IndexWriter::create(&self.config.index_path)?;

        for root in roots {
            log::info!("Scanning {}", root.display());
            if let Some(progress) = &self.progress {
                progress.on_root_start(root);
            }

            if let Err(err) = self.scan_root(root, &mut writer, &mut summary) {
                if let Err(flush_err) = writer.finish() {
                    log::warn!("{}", flush_err);
                }
                if let Some(progress) = &self.progress {
                    progress.on_finish();
                }
                return Err(err);
            }
            summary.roots_scanned += 1;
        }

        writer.finish()?;
        if let Some(progress) = &self.progress {
            progress.on_finish();
        }

        summary.scan_duration = start_time.elapsed();
        log::info!(
            "Scan complete: {} files indexed, {} skipped, {} errors in {:.2?}",
            summary.files_indexed,
            summary.files_skipped,
            summary.scan_errors.len(),
            summary.scan_duration
        );

        Ok(summary)
    }

    /// Walk one root until it is exhausted or a fatal error occurs.
    fn scan_root(
        &mut self,
        root: &Path,
        writer: &mut IndexWriter,
        summary: &mut ScanSummary,
    ) -> Result<(), FinderError> {
        let walker = Walker::new(root);

        for entry in walker.walk() {
            match entry {
                Ok(file) => self.index_file(file, writer, summary)?,
                Err(err) if err.is_skippable() => {
                    log::warn!(target: DIAGNOSTIC_TARGET, "{}", err);
                    summary.scan_errors.push(err);
                }
                Err(err) => {
                    log::error!("{}", err);
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }

    /// Hash one file and, if it produced a digest, record and persist it.
    fn index_file(
        &mut self,
        file: FileEntry,
        writer: &mut IndexWriter,
        summary: &mut ScanSummary,
    ) -> Result<(), FinderError> {
        let Some(digest) = self.hasher.hash_file(&file.path) else {
            summary.files_skipped += 1;
            return Ok(());
        };

        let line = IndexLine::new(digest, file.size, file.path.to_string_lossy());
        writer.append(&line)?;

        if let Some(progress) = &self.progress {
            progress.on_file_indexed(&line.path, line.size);
        }
        log::trace!("Indexed {} ({} bytes)", line.path, line.size);

        summary.files_indexed += 1;
        summary.bytes_indexed = summary.bytes_indexed.saturating_add(line.size);
        self.index.put(line.digest, line.size, line.path);

        Ok(())
    }

    /// Rebuild the index from the configured index file.
    ///
    /// Entries are added to whatever the index already holds.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Persist`] if the file is missing or unreadable.
    pub fn load_index(&mut self) -> Result<LoadSummary, FinderError> {
        let summary = persist::load_index(&self.config.index_path, &mut self.index)?;
        log::info!(
            "Loaded {} entries from {}",
            summary.entries_loaded,
            self.config.index_path.display()
        );
        Ok(summary)
    }

    /// Ranked duplicate groups for the current index.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::from_index(&self.index)
    }
}
