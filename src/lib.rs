//! hashdir - Very fast duplicate file finder
//!
//! Checksums every regular file under one or more directories with xxHash64,
//! writes each result to a flat index file as it goes, and reports groups of
//! identical files ranked by the space they occupy. A saved index can be
//! reloaded later to print the report again without rescanning.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod persist;
pub mod progress;
pub mod scanner;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, OutputFormat, ScanArgs, StatsArgs};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, Report};
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};
use crate::progress::Progress;

/// Run the application, printing the report on stdout.
///
/// # Errors
///
/// Returns an error when a fatal scan error occurs, or when the index file
/// cannot be written or read.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Run the application, writing the report to `out`.
///
/// # Errors
///
/// See [`run_app`].
pub fn run_with_output<W: Write>(cli: Cli, out: &mut W) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Scan(args) => handle_scan(args, cli.quiet, out),
        Commands::Stats(args) => handle_stats(args, out),
    }
}

fn handle_scan<W: Write>(args: ScanArgs, quiet: bool, out: &mut W) -> Result<ExitCode> {
    let config = Config::load()
        .with_index_file(args.index)
        .with_output(args.output);
    log::debug!("Using configuration: {:?}", config);

    let mut finder = DuplicateFinder::new(config.finder_config());
    if config.progress && !args.no_progress && !quiet {
        finder = finder.with_progress(Arc::new(Progress::new(false)));
    }

    let summary = finder.scan(&args.roots).context("Scan failed")?;
    if !summary.scan_errors.is_empty() {
        log::warn!(
            "{} entries could not be read and were skipped",
            summary.scan_errors.len()
        );
    }

    write_report(&finder.report(), config.output, out)?;
    Ok(ExitCode::Success)
}

fn handle_stats<W: Write>(args: StatsArgs, out: &mut W) -> Result<ExitCode> {
    let config = Config::load()
        .with_index_file(args.index)
        .with_output(args.output);

    let mut finder = DuplicateFinder::new(config.finder_config());
    let summary = finder.load_index().context("Stats failed")?;
    if summary.malformed_lines > 0 {
        log::warn!(
            "{} malformed lines in {} were ignored",
            summary.malformed_lines,
            config.index_file.display()
        );
    }

    write_report(&finder.report(), config.output, out)?;
    Ok(ExitCode::Success)
}

fn write_report<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => TextOutput::new(report)
            .write_to(out)
            .context("Failed to write report")?,
        OutputFormat::Json => JsonOutput::new(report)
            .write_to(out, true)
            .context("Failed to write report")?,
    }
    out.flush().context("Failed to write report")?;
    Ok(())
}
