//! Rebuild an [`Index`] from a previously written index file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{IndexLine, PersistError};
use crate::duplicates::Index;

/// Counters from a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Non-empty lines read
    pub lines_read: usize,
    /// Entries fed into the index
    pub entries_loaded: usize,
    /// Lines skipped because they could not be decoded
    pub malformed_lines: usize,
    /// Entries loaded with size 0 because the size field did not parse
    pub bad_sizes: usize,
}

/// Read `path` line by line and `put` every usable entry into `index`.
///
/// Malformed lines are logged and skipped. Lines are decoded lossily, so
/// invalid UTF-8 never aborts the load.
///
/// # Errors
///
/// Returns [`PersistError::Open`] if the file cannot be opened and
/// [`PersistError::Read`] if reading fails partway.
pub fn load_index(path: &Path, index: &mut Index) -> Result<LoadSummary, PersistError> {
    let file = File::open(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut summary = LoadSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| PersistError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&buf);
        let text = text.trim_end_matches('\n').trim_end_matches('\r');
        if text.is_empty() {
            continue;
        }
        summary.lines_read += 1;

        match IndexLine::parse(text) {
            Ok(parsed) => {
                if !parsed.size_valid {
                    log::warn!(
                        "{}:{}: unreadable size, loading as 0",
                        path.display(),
                        line_no
                    );
                    summary.bad_sizes += 1;
                }
                let line = parsed.line;
                index.put(line.digest, line.size, line.path);
                summary.entries_loaded += 1;
            }
            Err(e) => {
                log::warn!("{}:{}: skipping line: {}", path.display(), line_no, e);
                summary.malformed_lines += 1;
            }
        }
    }

    log::debug!(
        "Loaded {} entries from {} ({} malformed)",
        summary.entries_loaded,
        path.display(),
        summary.malformed_lines
    );
    Ok(summary)
}
