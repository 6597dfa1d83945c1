//! Machine-readable JSON reporter.
//!
//! Emits a single object with the tool `version`, the `root` the paths were
//! resolved against, and a `sections` array in manifest order. A missing file
//! has `"found": false` and `"content": null`. No timestamps, so repeated runs
//! over unchanged files are byte-identical.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::config::HelperConfig;
use crate::models::{Reporter, ScriptKind, SectionBody, SectionDescriptor};
use crate::sections;
use crate::HelperError;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    version: &'a str,
    root: String,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSection<'a> {
    title: &'a str,
    kind: ScriptKind,
    path: &'a str,
    found: bool,
    content: Option<String>,
}

impl<'a> JsonSection<'a> {
    fn new(section: &'a SectionDescriptor, body: SectionBody) -> Self {
        let found = body.is_found();
        let content = match body {
            SectionBody::Text(text) => Some(text),
            SectionBody::Missing => None,
        };
        JsonSection {
            title: section.title,
            kind: section.kind,
            path: section.path,
            found,
            content,
        }
    }
}

/// Reads every section and renders the report as pretty-printed JSON.
pub(crate) fn format_json(
    sections: &[SectionDescriptor],
    config: &HelperConfig,
) -> Result<String, HelperError> {
    let mut entries = Vec::with_capacity(sections.len());
    for section in sections {
        let body = sections::load(&config.root, section)?;
        entries.push(JsonSection::new(section, body));
    }

    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        root: config.root.to_string_lossy().into_owned(),
        sections: entries,
    };
    debug!(sections = report.sections.len(), "json report built");

    serde_json::to_string_pretty(&report).map_err(|e| HelperError::Report(e.to_string()))
}

/// JSON output for editor plugins and scripts.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn format_name(&self) -> &str {
        "json"
    }

    fn report(
        &self,
        sections: &[SectionDescriptor],
        config: &HelperConfig,
        out: &mut dyn Write,
    ) -> Result<(), HelperError> {
        let json = format_json(sections, config)?;
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
