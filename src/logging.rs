//! Logging infrastructure for hashdir.
//!
//! This module provides structured logging using the `log` facade and `env_logger` backend.
//! Everything is written to stderr, which doubles as the diagnostic stream for
//! entries skipped during a scan; reports go to stdout.
//!
//! Log levels are determined by (in priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. CLI flags: `--quiet` (error only) or `--verbose` (debug/trace)
//! 3. Default: info level
//!
//! Entries skipped during a scan are logged under [`DIAGNOSTIC_TARGET`],
//! which stays at warn level even with `--quiet`.
//!
//! # Build-specific Formatting
//!
//! - **Debug builds**: Include timestamp, level, and module path when verbose
//! - **Release builds**: Compact format with level and message only
//!
//! # Example
//!
//! ```rust,no_run
//! use hashdir::logging::init_logging;
//!
//! // Initialize with verbose mode (-v)
//! init_logging(1, false);
//! log::debug!("Debug info here");
//! ```

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Log target for per-entry scan diagnostics (unreadable or vanished entries).
pub const DIAGNOSTIC_TARGET: &str = "hashdir::diagnostics";

/// Initialize the logging subsystem based on CLI verbosity flags.
///
/// Only the first call installs a logger; later calls are ignored and
/// return `false`.
///
/// # Arguments
///
/// * `verbose` - Verbosity count from CLI (0=normal, 1=debug, 2+=trace)
/// * `quiet` - If true, only show errors (overridden by RUST_LOG)
pub fn init_logging(verbose: u8, quiet: bool) -> bool {
    let use_env = env::var("RUST_LOG").is_ok();
    let mut builder = build_logger(verbose, quiet, use_env);

    if builder.try_init().is_err() {
        return false;
    }

    if use_env {
        log::debug!(
            "Logging initialized from RUST_LOG environment variable: {:?}",
            env::var("RUST_LOG").ok()
        );
    } else {
        log::debug!(
            "Logging initialized at level: {:?}",
            determine_level(verbose, quiet)
        );
    }
    true
}

/// Builder with filters and format applied.
fn build_logger(verbose: u8, quiet: bool, use_env: bool) -> Builder {
    let mut builder = Builder::new();

    if use_env {
        builder.parse_default_env();
    } else {
        let level = determine_level(verbose, quiet);
        builder
            .filter_level(level)
            .filter_module(DIAGNOSTIC_TARGET, level.max(LevelFilter::Warn));
    }

    configure_format(&mut builder, verbose);
    builder
}

/// Determine the log level from CLI flags.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Configure the log format based on build type and verbosity.
fn configure_format(builder: &mut Builder, verbose: u8) {
    #[cfg(debug_assertions)]
    {
        builder.format(move |buf, record| {
            let timestamp = buf.timestamp_seconds();
            let level = record.level();
            let level_style = buf.default_level_style(level);

            if verbose >= 1 {
                writeln!(
                    buf,
                    "{} {level_style}{:<5}{level_style:#} [{}] {}",
                    timestamp,
                    level,
                    record.module_path().unwrap_or("unknown"),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "{} {level_style}{:<5}{level_style:#} {}",
                    timestamp,
                    level,
                    record.args()
                )
            }
        });
    }

    #[cfg(not(debug_assertions))]
    {
        let _ = verbose;
        builder.format(|buf, record| {
            let level = record.level();
            let level_style = buf.default_level_style(level);
            writeln!(
                buf,
                "{level_style}{:<5}{level_style:#} {}",
                level,
                record.args()
            )
        });
    }
}
