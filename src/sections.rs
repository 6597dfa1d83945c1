//! The fixed section manifest and the read-or-placeholder routine.
//!
//! Paths are relative to the project root. A missing file becomes
//! [`SectionBody::Missing`]; any other read failure (permissions, invalid
//! UTF-8, a directory at the path) is returned as [`HelperError::Read`] and
//! ends the run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::models::{ScriptKind, SectionBody, SectionDescriptor};
use crate::HelperError;

/// Every script in the project, in the order it should be pasted.
pub const SECTIONS: [SectionDescriptor; 8] = [
    // Server
    SectionDescriptor {
        title: "Main Server Script",
        path: "src/server/Main.server.lua",
        kind: ScriptKind::Script,
    },
    SectionDescriptor {
        title: "Game Manager Module",
        path: "src/server/GameManager.lua",
        kind: ScriptKind::ModuleScript,
    },
    SectionDescriptor {
        title: "Dirt Bike Module",
        path: "src/server/DirtBike.lua",
        kind: ScriptKind::ModuleScript,
    },
    SectionDescriptor {
        title: "Race Track Module",
        path: "src/server/RaceTrack.lua",
        kind: ScriptKind::ModuleScript,
    },
    // Client
    SectionDescriptor {
        title: "Main Client Script",
        path: "src/client/Main.client.lua",
        kind: ScriptKind::LocalScript,
    },
    SectionDescriptor {
        title: "Input Controller Module",
        path: "src/client/InputController.lua",
        kind: ScriptKind::ModuleScript,
    },
    SectionDescriptor {
        title: "UI Manager Module",
        path: "src/client/UIManager.lua",
        kind: ScriptKind::ModuleScript,
    },
    // Shared
    SectionDescriptor {
        title: "Game Config Module",
        path: "src/shared/GameConfig.lua",
        kind: ScriptKind::ModuleScript,
    },
];

/// Reads the file behind `section`, resolved against `root`.
///
/// The file is read in one call, so its handle is closed before this returns.
pub fn load(root: &Path, section: &SectionDescriptor) -> Result<SectionBody, HelperError> {
    let full = root.join(section.path);
    match fs::read_to_string(&full) {
        Ok(text) => {
            debug!(path = section.path, bytes = text.len(), "section read");
            Ok(SectionBody::Text(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = section.path, "section file missing");
            Ok(SectionBody::Missing)
        }
        Err(e) => Err(HelperError::Read {
            path: full,
            source: e,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
