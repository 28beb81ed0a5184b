//! One line of the index file.
//!
//! Layout: `<token> <size:010> <path>\n`, single-space separated. Only the
//! first two spaces are delimiters, so the path may contain spaces.

use std::fmt;

use thiserror::Error;

use crate::scanner::Digest;

/// A `(digest, size, path)` triple as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLine {
    /// Content digest
    pub digest: Digest,
    /// File size in bytes
    pub size: u64,
    /// Path as text.
    ///
    /// Scanned paths are converted with `Path::to_string_lossy`, so a name
    /// that is not valid UTF-8 is stored with replacement characters and no
    /// longer names the file on disk. Grouping and reporting still work.
    pub path: String,
}

/// Result of parsing a line that was usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The decoded entry
    pub line: IndexLine,
    /// False when the size field did not parse and was replaced with 0
    pub size_valid: bool,
}

/// Why a line could not be used at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Fewer than three space-separated fields.
    #[error("expected 3 fields, found {0}")]
    MissingFields(usize),

    /// The digest token is empty or contains whitespace.
    #[error("invalid digest token '{0}'")]
    BadToken(String),
}

impl IndexLine {
    /// Create a new line.
    #[must_use]
    pub fn new(digest: Digest, size: u64, path: impl Into<String>) -> Self {
        Self {
            digest,
            size,
            path: path.into(),
        }
    }

    /// Parse one line (without its trailing newline).
    ///
    /// A size that is not a base-10 `u64` becomes 0 rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`LineError`] if there are fewer than three fields or the
    /// digest token is empty or contains whitespace. The token is kept as
    /// text and never decoded.
    ///
    /// ```
    /// use hashdir::persist::IndexLine;
    /// use hashdir::scanner::Digest;
    ///
    /// let text = IndexLine::new(Digest::new(5), 12, "/my docs/a b.txt").to_string();
    /// let parsed = IndexLine::parse(text.trim_end()).unwrap();
    /// assert_eq!(parsed.line.path, "/my docs/a b.txt");
    /// assert_eq!(parsed.line.size, 12);
    /// ```
    pub fn parse(text: &str) -> Result<ParsedLine, LineError> {
        let mut fields = text.splitn(3, ' ');
        let (token, size, path) = match (fields.next(), fields.next(), fields.next()) {
            (Some(token), Some(size), Some(path)) => (token, size, path),
            (_, Some(_), None) => return Err(LineError::MissingFields(2)),
            _ => return Err(LineError::MissingFields(1)),
        };

        let digest =
            Digest::from_token(token).ok_or_else(|| LineError::BadToken(token.to_string()))?;

        let (size, size_valid) = match size.parse::<u64>() {
            Ok(size) => (size, true),
            Err(_) => (0, false),
        };

        Ok(ParsedLine {
            line: Self::new(digest, size, path),
            size_valid,
        })
    }
}

impl fmt::Display for IndexLine {
    /// Renders the full line including the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {:010} {}", self.digest, self.size, self.path)
    }
}
