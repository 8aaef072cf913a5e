//! CLI entry point for the empty-file auditor.
//!
//! Finds zero-byte files in a project tree, prints a categorized summary,
//! and writes `empty_files_report.json` plus an `EMPTY_FILES_TODO.md`
//! checklist.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for the directory (Enter scans the current directory)
//! empty-audit
//!
//! # Scan a directory, writing reports into ./reports
//! empty-audit ./my-project --output-dir reports
//!
//! # Skip an extra directory and load settings from a file
//! empty-audit ./my-project --skip-dir vendor --config audit.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{self, BufRead, IsTerminal, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use color_eyre::eyre::eyre;
use ea_core::Config;
use ea_report::{ConsoleReport, write_banner, write_next_steps};
use ea_scanner::Scanner;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Find empty files in a project and write a report plus a TODO checklist.
#[derive(Parser, Debug)]
#[command(name = "empty-audit", version, about, long_about = None)]
struct Cli {
    /// Directory to scan.
    ///
    /// When omitted, the directory is asked for interactively; a blank answer
    /// (or a non-interactive stdin) scans the current directory.
    #[arg(env = "EMPTY_AUDIT_PATH")]
    path: Option<Utf8PathBuf>,

    /// JSON configuration file.
    #[arg(short, long, env = "EMPTY_AUDIT_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// File name of the JSON report.
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Directory receiving the JSON report and the TODO checklist.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<Utf8PathBuf>,

    /// Extra directory name to skip (repeatable).
    #[arg(long = "skip-dir", value_name = "NAME")]
    skip_dirs: Vec<String>,

    /// Follow symbolic links while walking.
    #[arg(long)]
    follow_links: bool,

    /// Paths listed per location category in the console report.
    #[arg(long, value_name = "N")]
    preview_limit: Option<usize>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` so the report on stdout
/// stays readable. Logs go to stderr.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`Config`] from an optional config file and CLI overrides.
///
/// The scan root is left untouched here; see [`resolve_root`].
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).map_err(|e| eyre!("{}", e))?,
        None => Config::default(),
    };

    config
        .scan
        .extra_skip_dirs
        .extend(cli.skip_dirs.iter().cloned());
    config.scan.follow_links |= cli.follow_links;

    if let Some(output) = &cli.output {
        config.output.report_file.clone_from(output);
    }
    if let Some(dir) = &cli.output_dir {
        config.output.output_dir.clone_from(dir);
    }
    if let Some(limit) = cli.preview_limit {
        config.output.preview_limit = limit;
    }

    Ok(config)
}

/// Picks the directory to scan.
///
/// An explicit path wins, then a root set in the config file, then the
/// interactive prompt. Without a terminal the current directory is used.
fn resolve_root(cli: &Cli, config: &Config) -> io::Result<Utf8PathBuf> {
    if let Some(root) = configured_root(cli, config) {
        return Ok(root);
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(Utf8PathBuf::from("."));
    }

    let stdout = io::stdout();
    prompt_for_root(stdin.lock(), stdout.lock())
}

/// Root given on the command line or in the config file, if any.
fn configured_root(cli: &Cli, config: &Config) -> Option<Utf8PathBuf> {
    cli.path.clone().or_else(|| config.scan.root_path.clone())
}

/// Asks for the directory to scan. A blank answer means the current directory.
fn prompt_for_root<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<Utf8PathBuf> {
    write!(
        out,
        "Enter directory to scan (press Enter for current directory): "
    )?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    Ok(Utf8PathBuf::from(if answer.is_empty() { "." } else { answer }))
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// Runs the scan, prints the report, and writes both output files.
///
/// # Errors
///
/// Returns an error if the root cannot be scanned, the configuration is
/// invalid, or an output file could not be written.
fn run(cli: &Cli) -> color_eyre::Result<()> {
    let mut config = build_config(cli)?;

    write_banner(&mut io::stdout().lock())?;
    config.scan.root_path = Some(resolve_root(cli, &config)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Missing root: stop before any traversal or output.
    let scanner = Scanner::new(&config.scan).map_err(|e| eyre!("{}", e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration: {}", e))?;

    writeln!(out, "Scanning directory: {}", display_root(scanner.root()))?;
    let result = scanner.scan()?;

    writeln!(out)?;
    ConsoleReport::new(&result)
        .with_preview_limit(config.output.preview_limit)
        .write_to(&mut out)?;

    if result.is_empty() {
        info!("No empty files found, skipping report files");
        return Ok(());
    }

    writeln!(out)?;
    let persisted = ea_report::persist(&result, &config.output);

    if let Ok(path) = &persisted.report {
        writeln!(out, "Report saved to: {path}")?;
    }
    if let Ok(path) = &persisted.checklist {
        writeln!(out, "TODO list created: {path}")?;
    }

    if !persisted.is_complete() {
        let reasons: Vec<String> = [&persisted.report, &persisted.checklist]
            .into_iter()
            .filter_map(|written| written.as_ref().err())
            .inspect(|err| error!(error = %err, "Failed to write output file"))
            .map(ToString::to_string)
            .collect();
        return Err(eyre!(
            "{} output file(s) could not be written: {}",
            reasons.len(),
            reasons.join("; ")
        ));
    }

    write_next_steps(
        &mut out,
        &config.output.report_path(),
        &config.output.todo_path(),
    )?;

    Ok(())
}

/// Absolute form of the root for display, falling back to the path as given.
fn display_root(root: &Utf8Path) -> Utf8PathBuf {
    root.canonicalize_utf8().unwrap_or_else(|_| root.to_owned())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    run(&cli)
}
