//! CLI argument parsing and report orchestration.
//!
//! Entry point for the `copy-helper` binary. Parses arguments with `clap`,
//! sets up `tracing` on stderr, builds the config, and hands the section
//! manifest to the selected reporter. Run bare, it prints the decorated
//! report for the current directory to stdout.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Report written (missing files included) |
//! | 2    | Fatal error (unreadable file, stdout failure, bad flag value) |

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{self, CliOverrides, HelperConfig, ReportFormat};
use crate::models::Reporter;
use crate::reporting::{JsonReporter, TerminalReporter};
use crate::sections::SECTIONS;
use crate::HelperError;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_CLEAN: i32 = 0;
const EXIT_ERROR: i32 = 2;

// ---------------------------------------------------------------------------
// Clap argument definitions
// ---------------------------------------------------------------------------

/// Print the motocross project's scripts, ready to paste into Roblox Studio
#[derive(Parser)]
#[command(
    name = "copy-helper",
    version,
    about = "Print the motocross project's scripts, ready to paste into Roblox Studio"
)]
struct Cli {
    /// Project directory the script paths are relative to
    #[arg(short = 'C', long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output format [terminal|json]
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_overrides(&self) -> Result<CliOverrides, HelperError> {
        let format = self
            .format
            .as_deref()
            .map(config::parse_format)
            .transpose()?;
        Ok(CliOverrides {
            root: self.root.clone(),
            format,
            verbose: self.verbose,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse CLI arguments and write the report. Returns an exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_with(&cli, &mut out) {
        Ok(()) => EXIT_CLEAN,
        Err(e) => {
            eprintln!("copy-helper error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_with(cli: &Cli, out: &mut dyn Write) -> Result<(), HelperError> {
    let overrides = cli.to_overrides()?;
    let config = HelperConfig::from_overrides(&overrides);
    debug!(root = %config.root.display(), format = ?config.report.format, "config resolved");

    let reporter = reporter_for(&config.report.format);
    reporter.report(&SECTIONS, &config, out)?;
    debug!(format = reporter.format_name(), "report written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn reporter_for(format: &ReportFormat) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Terminal => Box::new(TerminalReporter),
        ReportFormat::Json => Box::new(JsonReporter),
    }
}

/// Sets up the stderr subscriber. Stdout carries only the report.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
