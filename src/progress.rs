//! Progress reporting utilities using indicatif.
//!
//! This module provides the [`Progress`] struct which implements
//! [`ProgressCallback`] to show a spinner on stderr while a scan runs.
//! The spinner never writes to stdout, so report output stays clean.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress callback for scans.
///
/// Implement this trait to receive updates while
/// [`DuplicateFinder::scan`](crate::duplicates::DuplicateFinder::scan) runs.
pub trait ProgressCallback: Send + Sync {
    /// Called before each root directory is walked.
    ///
    /// # Arguments
    ///
    /// * `root` - The root about to be walked
    fn on_root_start(&self, root: &Path);

    /// Called after a file has been hashed and recorded.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the indexed file
    /// * `bytes` - Size of the file in bytes
    fn on_file_indexed(&self, path: &str, bytes: u64);

    /// Called once when the scan ends, successfully or not.
    fn on_finish(&self) {}
}

/// Spinner-based progress reporter.
pub struct Progress {
    spinner: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl Progress {
    /// Create a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - If true, nothing is drawn.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashdir::progress::Progress;
    ///
    /// let progress = Progress::new(true);
    /// ```
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet,
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {pos} files {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }
}

impl ProgressCallback for Progress {
    fn on_root_start(&self, root: &Path) {
        if self.quiet {
            return;
        }

        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_message(format!("scanning {}", root.display()));
    }

    fn on_file_indexed(&self, path: &str, _bytes: u64) {
        if self.quiet {
            return;
        }

        self.with_spinner(|pb| {
            pb.inc(1);
            pb.set_message(truncate_path(path, 40));
        });
    }

    fn on_finish(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

/// Truncate a path for display next to the spinner.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }

    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let name_len = file_name.chars().count();
    if name_len + 4 > max_len {
        let tail: String = file_name
            .chars()
            .skip(name_len.saturating_sub(max_len.saturating_sub(3)))
            .collect();
        return format!("...{tail}");
    }

    format!(".../{file_name}")
}
