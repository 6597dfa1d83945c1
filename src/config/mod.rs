//! Run configuration: built-in defaults with CLI overrides applied on top.
//!
//! The helper reads no config files and no environment variables, so there is
//! exactly one override layer.

use std::path::PathBuf;

use crate::HelperError;

// ─── Public config types ──────────────────────────────────────────────────────

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct HelperConfig {
    /// Directory the section paths are resolved against.
    pub root: PathBuf, // default: "."
    pub report: ReportConfig,
    pub verbose: bool, // default: false
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format: ReportFormat, // default: Terminal
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Terminal,
    Json,
}

/// CLI-provided values that override the defaults.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub verbose: bool,
}

// ─── Default implementations ──────────────────────────────────────────────────

impl Default for HelperConfig {
    fn default() -> Self {
        HelperConfig {
            root: PathBuf::from("."),
            report: ReportConfig::default(),
            verbose: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            format: ReportFormat::Terminal,
        }
    }
}

// ─── Overrides ────────────────────────────────────────────────────────────────

impl HelperConfig {
    /// Builds the config for one run from CLI overrides.
    pub fn from_overrides(overrides: &CliOverrides) -> Self {
        let mut config = HelperConfig::default();
        config.apply_overrides(overrides);
        config
    }

    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(root) = &overrides.root {
            self.root = root.clone();
        }
        if let Some(fmt) = &overrides.format {
            self.report.format = fmt.clone();
        }
        if overrides.verbose {
            self.verbose = true;
        }
    }
}

/// Parses a `--format` value, case-insensitively.
pub fn parse_format(s: &str) -> Result<ReportFormat, HelperError> {
    match s.to_lowercase().as_str() {
        "terminal" => Ok(ReportFormat::Terminal),
        "json" => Ok(ReportFormat::Json),
        other => Err(HelperError::Config(format!(
            "Unknown format '{other}': expected terminal or json"
        ))),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
