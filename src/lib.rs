pub mod cli;
pub mod config;
pub mod models;
pub mod reporting;
pub mod sections;

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the copy helper.
///
/// A missing section file is not an error: it becomes
/// [`models::SectionBody::Missing`]. Everything here ends the run.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),
}
