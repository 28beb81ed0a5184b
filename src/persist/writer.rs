//! Write-through index file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{IndexLine, PersistError};

/// Appends index lines to a freshly truncated file as files are hashed.
#[derive(Debug)]
pub struct IndexWriter {
    path: PathBuf,
    out: BufWriter<File>,
    lines_written: usize,
}

impl IndexWriter {
    /// Create (or truncate) the index file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Create`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, PersistError> {
        let file = File::create(path).map_err(|source| PersistError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Writing index to {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            lines_written: 0,
        })
    }

    /// Append one entry.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Write`] on I/O failure.
    pub fn append(&mut self, line: &IndexLine) -> Result<(), PersistError> {
        write!(self.out, "{line}").map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines appended so far.
    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush buffered lines and close the file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Write`] if the flush fails.
    pub fn finish(mut self) -> Result<usize, PersistError> {
        self.out.flush().map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "Wrote {} index lines to {}",
            self.lines_written,
            self.path.display()
        );
        Ok(self.lines_written)
    }
}
