//! xxHash64 file hasher with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing a 64-bit
//! content digest of a file using memory-efficient streaming, and the
//! [`Digest`] value object used as half of every index key.
//!
//! xxHash64 is chosen for throughput, not collision resistance: two files
//! with equal digests and equal sizes are treated as identical content.
//!
//! # Example
//!
//! ```no_run
//! use hashdir::scanner::Hasher;
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! match hasher.hash_file(Path::new("photo.jpg")) {
//!     Some(digest) => println!("{}", digest.to_token()),
//!     None => println!("unreadable or empty"),
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use xxhash_rust::xxh64::Xxh64;

/// Buffer size used when streaming file contents (64 KiB).
pub const BUFFER_SIZE: usize = 64 * 1024;

/// Seed passed to xxHash64. Changing it invalidates every existing index file.
const SEED: u64 = 0;

/// Width of the on-disk digest token.
pub const TOKEN_WIDTH: usize = 40;

/// Content digest, held as its on-disk index token.
///
/// Digests produced by [`Hasher`] encode the 64-bit xxHash64 value (see
/// [`Digest::new`]). Digests read back from an index file keep the token
/// text exactly as written, so two entries share a digest only when their
/// tokens are byte-for-byte equal. Nothing is normalized on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(Box<str>);

impl Digest {
    /// Digest of a 64-bit hash value.
    ///
    /// The token is the lowercase hex encoding of the ASCII bytes of the
    /// decimal rendering of the value, left-padded with `0` to
    /// [`TOKEN_WIDTH`] characters. This matches index files written by
    /// earlier releases.
    ///
    /// ```
    /// use hashdir::scanner::Digest;
    ///
    /// let token = Digest::new(42).to_token();
    /// assert_eq!(token.len(), 40);
    /// assert!(token.ends_with("3432"));
    /// ```
    #[must_use]
    pub fn new(value: u64) -> Self {
        let decimal = value.to_string();
        let mut hex = String::with_capacity(TOKEN_WIDTH);
        for byte in decimal.bytes() {
            hex.push_str(&format!("{byte:02x}"));
        }
        Self(format!("{hex:0>width$}", width = TOKEN_WIDTH).into_boxed_str())
    }

    /// Digest read from an index file.
    ///
    /// Any non-empty token without whitespace is accepted and kept
    /// verbatim. Returns `None` otherwise.
    ///
    /// ```
    /// use hashdir::scanner::Digest;
    ///
    /// assert!(Digest::from_token("deadbeef").is_some());
    /// assert_ne!(Digest::from_token("3031"), Digest::from_token("31"));
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(token.into()))
    }

    /// The token as written to the index file.
    #[must_use]
    pub fn as_token(&self) -> &str {
        &self.0
    }

    /// Owned copy of the token.
    #[must_use]
    pub fn to_token(&self) -> String {
        self.0.to_string()
    }

    /// The 64-bit hash value, when the token is the exact encoding
    /// produced by [`Digest::new`].
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        // Every encoded byte is an ASCII digit (0x30..=0x39), so the first
        // significant character is always '3' and all leading '0's are padding.
        let hex = self.0.trim_start_matches('0');
        if hex.is_empty() || hex.len() % 2 != 0 || !hex.is_ascii() {
            return None;
        }

        let mut decimal = String::with_capacity(hex.len() / 2);
        for pair in hex.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(pair).ok()?;
            let byte = u8::from_str_radix(pair, 16).ok()?;
            if !byte.is_ascii_digit() {
                return None;
            }
            decimal.push(char::from(byte));
        }

        let value = decimal.parse::<u64>().ok()?;
        (Self::new(value) == *self).then_some(value)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Streaming xxHash64 hasher.
///
/// Reads files in fixed-size chunks so memory use does not depend on
/// file size.
#[derive(Debug, Clone)]
pub struct Hasher {
    buffer_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher with the default buffer size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer_size: BUFFER_SIZE,
        }
    }

    /// Create a hasher with a custom read buffer size (minimum 1 byte).
    #[must_use]
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Hash the full content of a file.
    ///
    /// Returns `None` when the file cannot be opened, a read fails midway,
    /// or the file is empty. None of these are errors: the file is simply
    /// left out of the index. The file handle is dropped on every path.
    #[must_use]
    pub fn hash_file(&self, path: &Path) -> Option<Digest> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("Cannot open {} for hashing: {}", path.display(), e);
                return None;
            }
        };

        match self.hash_reader(file) {
            Ok(Some(digest)) => Some(digest),
            Ok(None) => {
                log::debug!("Skipping empty file: {}", path.display());
                None
            }
            Err(e) => {
                log::debug!("Read error while hashing {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Hash everything readable from `reader`.
    ///
    /// Returns `Ok(None)` if the reader yields zero bytes.
    ///
    /// # Errors
    ///
    /// Propagates any read error other than [`io::ErrorKind::Interrupted`].
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<Option<Digest>> {
        let mut state = Xxh64::new(SEED);
        let mut buffer = vec![0u8; self.buffer_size];
        let mut total: u64 = 0;

        loop {
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            state.update(&buffer[..n]);
            total += n as u64;
        }

        if total == 0 {
            return Ok(None);
        }
        Ok(Some(Digest::new(state.digest())))
    }
}
