//! Directory walker implementation using walkdir for sequential traversal.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree depth-first and yielding every regular file it contains.
//! Entries are visited in the order the filesystem returns them; no
//! sorting is applied.
//!
//! # Behavior
//!
//! - Directories are descended into and never yielded
//! - Regular files are yielded as [`FileEntry`] values with their size
//! - Symlinks, devices, sockets and FIFOs are skipped silently
//! - Errors are yielded as [`ScanError`] values, already classified as
//!   skippable or fatal; the caller decides whether to keep iterating
//!
//! # Example
//!
//! ```no_run
//! use hashdir::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{classify_io_error, FileEntry, ScanError};

/// Directory walker for sequential file discovery.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hashdir::scanner::Walker;
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."));
    /// ```
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Root this walker starts from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the directory tree, yielding regular files.
    ///
    /// Errors do not stop iteration by themselves. A caller that wants to
    /// abort on a fatal error just stops pulling from the iterator.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hashdir::scanner::Walker;
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."));
    /// let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
    /// println!("Found {} files", files.len());
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();

                    if file_type.is_dir() {
                        return None;
                    }

                    if !file_type.is_file() {
                        log::trace!("Skipping non-regular file: {}", entry.path().display());
                        return None;
                    }

                    match entry.metadata() {
                        Ok(metadata) => {
                            Some(Ok(FileEntry::new(entry.into_path(), metadata.len())))
                        }
                        Err(e) => Some(Err(self.handle_walkdir_error(e))),
                    }
                }
                Err(e) => Some(Err(self.handle_walkdir_error(e))),
            })
    }

    /// Convert a walkdir error into a classified [`ScanError`].
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        let message = error.to_string();
        match error.into_io_error() {
            Some(source) => classify_io_error(path, source),
            None => ScanError::Walk { path, message },
        }
    }
}
