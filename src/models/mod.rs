use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::config::HelperConfig;
use crate::HelperError;

// ---------------------------------------------------------------------------
// ScriptKind
// ---------------------------------------------------------------------------

/// Roblox script category a section is pasted in as. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptKind {
    Script,
    ModuleScript,
    LocalScript,
}

impl ScriptKind {
    /// Label exactly as Studio names the object type.
    pub fn label(&self) -> &'static str {
        match self {
            ScriptKind::Script => "Script",
            ScriptKind::ModuleScript => "ModuleScript",
            ScriptKind::LocalScript => "LocalScript",
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SectionDescriptor
// ---------------------------------------------------------------------------

/// One printed block: what to call it, where the file lives (relative to the
/// project root), and what kind of script it becomes in Studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub title: &'static str,
    pub path: &'static str,
    pub kind: ScriptKind,
}

// ---------------------------------------------------------------------------
// SectionBody
// ---------------------------------------------------------------------------

/// Result of reading a section's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Exact file contents, untouched.
    Text(String),
    /// Nothing exists at the path.
    Missing,
}

impl SectionBody {
    pub fn is_found(&self) -> bool {
        matches!(self, SectionBody::Text(_))
    }

    /// The text printed between the copy markers.
    pub fn display_text(&self, path: &str) -> String {
        match self {
            SectionBody::Text(text) => text.clone(),
            SectionBody::Missing => format!("File not found: {path}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Reporter trait
// ---------------------------------------------------------------------------

/// An output format for the section list.
///
/// Implementations read each section's file themselves (through
/// [`crate::sections::load`]) in list order and write to `out`.
pub trait Reporter {
    fn format_name(&self) -> &str;

    fn report(
        &self,
        sections: &[SectionDescriptor],
        config: &HelperConfig,
        out: &mut dyn Write,
    ) -> Result<(), HelperError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
