//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. Built-in defaults
//! 2. `config.toml` in the platform config directory
//! 3. `HASHDIR_*` environment variables (e.g. `HASHDIR_INDEX_FILE`)
//! 4. Command-line flags, applied by the caller
//!
//! Only the index file path reaches the scanning core, through
//! [`Config::finder_config`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::duplicates::FinderConfig;

/// Index file name used when nothing else is configured.
pub const DEFAULT_INDEX_FILE: &str = "checksum.txt";

/// Prefix of environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "HASHDIR_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Index file written by `scan` and read by `stats`.
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,

    /// Default report format.
    #[serde(default)]
    pub output: OutputFormat,

    /// Show a progress spinner while scanning.
    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_index_file() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_FILE)
}

fn default_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            output: OutputFormat::default(),
            progress: default_progress(),
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path and
    /// the environment.
    ///
    /// Any failure falls back to defaults.
    pub fn load() -> Self {
        let result = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::figment().extract().context("Invalid configuration"),
        };

        match result {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from a specific TOML file plus the environment.
    ///
    /// A missing file is not an error; figment simply skips it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment value is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::figment_with_file(path)
            .extract()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    fn figment_with_file(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Write the configuration as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default platform-specific configuration path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "hashdir", "hashdir")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Override the index file when a flag supplied one.
    #[must_use]
    pub fn with_index_file(mut self, index_file: Option<PathBuf>) -> Self {
        if let Some(index_file) = index_file {
            self.index_file = index_file;
        }
        self
    }

    /// Override the output format when a flag supplied one.
    #[must_use]
    pub fn with_output(mut self, output: Option<OutputFormat>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// Core configuration derived from these settings.
    #[must_use]
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig::new(self.index_file.clone())
    }
}
