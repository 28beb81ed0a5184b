//! Plain-text report formatter.
//!
//! One header line per ranked group followed by its paths, indented:
//!
//! ```text
//! 3 files occupy 3.0 MiB
//!   /photos/a.jpg
//!   /backup/a.jpg
//!   /backup/old/a.jpg
//! ```
//!
//! When there is nothing to report a single line says so.

use std::io::{self, Write};

use bytesize::ByteSize;

use crate::duplicates::Report;

/// Message printed when the report has no groups.
pub const NO_DUPLICATES: &str = "No duplicates file found";

/// Text output formatter.
pub struct TextOutput<'a> {
    report: &'a Report,
}

impl<'a> TextOutput<'a> {
    /// Create a new text output formatter.
    #[must_use]
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Write the report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.report.is_empty() {
            writeln!(writer, "{NO_DUPLICATES}")?;
            return Ok(());
        }

        for group in self.report.groups() {
            writeln!(
                writer,
                "{} files occupy {}",
                group.len(),
                format_size(group.total_size())
            )?;
            for file in &group.files {
                writeln!(writer, "  {file}")?;
            }
        }
        Ok(())
    }

    /// Render the report into a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Human-readable byte size.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    ByteSize::b(bytes).to_string()
}
