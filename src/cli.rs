//! Command-line interface definitions for hashdir.
//!
//! This module defines all CLI arguments, subcommands, and options using the clap derive API.
//! Global options control verbosity; subcommands either scan directories or reload a
//! previously written index.
//!
//! # Example
//!
//! ```bash
//! # Scan two trees, writing checksum.txt in the current directory
//! hashdir scan ~/Photos /mnt/backup/Photos
//!
//! # Print the report again later without rescanning
//! hashdir stats --index checksum.txt
//!
//! # JSON output for scripting
//! hashdir stats --output json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Very fast duplicate file finder.
///
/// hashdir checksums every file under the given directories with xxHash64,
/// records the result in a flat index file, and reports groups of files
/// with identical content ranked by the space they occupy.
#[derive(Debug, Parser)]
#[command(name = "hashdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors and skipped-entry warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for hashdir.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan directories, write the index file and print duplicates
    Scan(ScanArgs),
    /// Load an existing index file and print duplicates
    Stats(StatsArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directories to scan, in order
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub roots: Vec<PathBuf>,

    /// Index file to write (truncated if it exists)
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Do not show a progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the stats subcommand.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Index file to read
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
