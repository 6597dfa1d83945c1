//! Decorated console output for pasting into Roblox Studio.
//!
//! Layout: a static banner with the expected Studio tree, one block per
//! section, then a static footer with testing instructions. Each block wraps
//! the file's exact text in `--- COPY FROM HERE ---` / `--- END COPY ---`
//! markers. Output is written as it is produced, so a fatal read error leaves
//! every earlier block in place.

use std::io::Write;
use std::path::Path;

use crate::config::HelperConfig;
use crate::models::{Reporter, SectionBody, SectionDescriptor};
use crate::sections;
use crate::HelperError;

// ---------------------------------------------------------------------------
// Static text
// ---------------------------------------------------------------------------

const RULE_WIDTH: usize = 60;

pub const COPY_START: &str = "--- COPY FROM HERE ---";
pub const COPY_END: &str = "--- END COPY ---";

const BANNER_TITLE: &str = "🏍️ ROBLOX MOTOCROSS RACING - COPY HELPER";

const STRUCTURE: &[&str] = &[
    "   ServerScriptService/",
    "   ├── Main (Script)",
    "   └── server/ (Folder)",
    "       ├── GameManager (ModuleScript)",
    "       ├── DirtBike (ModuleScript)",
    "       └── RaceTrack (ModuleScript)",
    "   StarterPlayer/StarterPlayerScripts/",
    "   ├── Main (LocalScript)",
    "   └── client/ (Folder)",
    "       ├── InputController (ModuleScript)",
    "       └── UIManager (ModuleScript)",
    "   ReplicatedStorage/",
    "   └── shared/ (Folder)",
    "       └── GameConfig (ModuleScript)",
];

const TESTING_STEPS: &[&str] = &[
    "1. Click ▶️ Play in Roblox Studio",
    "2. Press R to spawn your dirt bike",
    "3. Use WASD or Arrow Keys to control",
    "4. Use 'Start Server' for multiplayer testing",
];

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

fn write_banner(out: &mut dyn Write) -> Result<(), HelperError> {
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "\n📋 Copy each section below into Roblox Studio:")?;
    writeln!(out, "\n🔧 STRUCTURE SETUP:")?;
    for line in STRUCTURE {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_section_header(
    out: &mut dyn Write,
    section: &SectionDescriptor,
) -> Result<(), HelperError> {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "📄 {}", section.title)?;
    writeln!(out, "   Type: {}", section.kind)?;
    writeln!(out, "   File: {}", section.path)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "\n{COPY_START}")?;
    Ok(())
}

fn write_section_body(
    out: &mut dyn Write,
    section: &SectionDescriptor,
    body: &SectionBody,
) -> Result<(), HelperError> {
    writeln!(out, "{}", body.display_text(section.path))?;
    writeln!(out, "{COPY_END}\n")?;
    Ok(())
}

fn write_footer(out: &mut dyn Write) -> Result<(), HelperError> {
    writeln!(out, "\n🎮 TESTING INSTRUCTIONS:")?;
    for step in TESTING_STEPS {
        writeln!(out, "{step}")?;
    }
    writeln!(out, "\n✅ Setup complete! Happy racing! 🏁")?;
    Ok(())
}

/// Writes one section block, reading its file between header and body.
pub fn emit_section(
    out: &mut dyn Write,
    root: &Path,
    section: &SectionDescriptor,
) -> Result<(), HelperError> {
    write_section_header(out, section)?;
    let body = sections::load(root, section)?;
    write_section_body(out, section, &body)
}

/// Writes the banner, every section in order, and the footer.
pub fn write_report(
    out: &mut dyn Write,
    root: &Path,
    sections: &[SectionDescriptor],
) -> Result<(), HelperError> {
    write_banner(out)?;
    for section in sections {
        emit_section(out, root, section)?;
    }
    write_footer(out)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// TerminalReporter
// ---------------------------------------------------------------------------

/// The default, human-oriented format.
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn format_name(&self) -> &str {
        "terminal"
    }

    fn report(
        &self,
        sections: &[SectionDescriptor],
        config: &HelperConfig,
        out: &mut dyn Write,
    ) -> Result<(), HelperError> {
        write_report(out, &config.root, sections)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SECTIONS;
    use std::fs;
    use std::path::PathBuf;

    fn tmp(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("copy_helper_test_terminal_{suffix}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write test file");
    }

    fn render(root: &Path) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, root, &SECTIONS).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Text between the copy markers of the block titled `title`.
    fn copy_block<'a>(output: &'a str, title: &str) -> &'a str {
        let header = format!("📄 {title}\n");
        let at = output.find(&header).expect("section header present");
        let start_marker = format!("{COPY_START}\n");
        let start = at + output[at..].find(&start_marker).unwrap() + start_marker.len();
        let end_marker = format!("\n{COPY_END}\n");
        let end = start + output[start..].find(&end_marker).unwrap();
        &output[start..end]
    }

    #[test]
    fn section_block_layout() {
        let mut buf = Vec::new();
        let section = SECTIONS[0];
        write_section_header(&mut buf, &section).unwrap();
        write_section_body(&mut buf, &section, &SectionBody::Text("print(1)".into())).unwrap();
        let rule = "=".repeat(60);
        let expected = format!(
            "\n{rule}\n📄 Main Server Script\n   Type: Script\n   File: src/server/Main.server.lua\n{rule}\n\n--- COPY FROM HERE ---\nprint(1)\n--- END COPY ---\n\n"
        );
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn every_section_shows_title_kind_and_path() {
        let dir = tmp("labels");
        let output = render(&dir);
        for s in &SECTIONS {
            assert!(output.contains(&format!("📄 {}\n", s.title)), "{}", s.title);
            assert!(output.contains(&format!("   File: {}\n", s.path)), "{}", s.path);
        }
        assert!(output.contains("   Type: Script\n"));
        assert!(output.contains("   Type: ModuleScript\n"));
        assert!(output.contains("   Type: LocalScript\n"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn existing_file_is_copied_verbatim() {
        let dir = tmp("verbatim");
        let content = "local Config = {}\n\tConfig.MaxSpeed = 80  \n\nreturn Config\n";
        write_file(&dir.join("src/shared/GameConfig.lua"), content);
        let output = render(&dir);
        assert_eq!(copy_block(&output, "Game Config Module"), content);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_files_get_placeholder_and_run_continues() {
        let dir = tmp("missing");
        write_file(&dir.join("src/client/UIManager.lua"), "-- ui");
        let output = render(&dir);
        for s in &SECTIONS {
            let block = copy_block(&output, s.title);
            if s.path == "src/client/UIManager.lua" {
                assert_eq!(block, "-- ui");
            } else {
                assert_eq!(block, format!("File not found: {}", s.path));
            }
        }
        assert!(output.ends_with("✅ Setup complete! Happy racing! 🏁\n"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn sections_appear_in_manifest_order() {
        let dir = tmp("order");
        write_file(&dir.join("src/shared/GameConfig.lua"), "return {}");
        let output = render(&dir);
        let positions: Vec<usize> = SECTIONS
            .iter()
            .map(|s| output.find(&format!("📄 {}\n", s.title)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let banner = output.find("STRUCTURE SETUP").unwrap();
        let footer = output.find("TESTING INSTRUCTIONS").unwrap();
        assert!(banner < positions[0]);
        assert!(footer > positions[7]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn output_is_deterministic() {
        let dir = tmp("determinism");
        write_file(&dir.join("src/server/DirtBike.lua"), "local Bike = {}\n");
        assert_eq!(render(&dir), render(&dir));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn banner_starts_output() {
        let dir = tmp("banner");
        let output = render(&dir);
        assert!(output.starts_with(&format!("{BANNER_TITLE}\n{}\n", "=".repeat(60))));
        assert!(output.contains("   └── shared/ (Folder)\n       └── GameConfig (ModuleScript)\n"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn fatal_read_keeps_earlier_output() {
        let dir = tmp("fatal");
        write_file(&dir.join("src/server/Main.server.lua"), "print(\"hi\")");
        fs::write(
            dir.join("src/server/GameManager.lua"),
            [0xc3u8, 0x28], // invalid UTF-8
        )
        .unwrap();

        let mut buf = Vec::new();
        let err = write_report(&mut buf, &dir, &SECTIONS).unwrap_err();
        assert!(matches!(err, HelperError::Read { .. }));

        let partial = String::from_utf8(buf).unwrap();
        assert!(partial.contains("print(\"hi\")"));
        assert!(partial.contains("📄 Game Manager Module"));
        assert!(!partial.contains("Dirt Bike Module"));
        assert!(!partial.contains("TESTING INSTRUCTIONS"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn reporter_uses_config_root() {
        let dir = tmp("reporter");
        write_file(&dir.join("src/client/Main.client.lua"), "-- client");
        let config = HelperConfig {
            root: dir.clone(),
            ..HelperConfig::default()
        };
        let mut buf = Vec::new();
        TerminalReporter.report(&SECTIONS, &config, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(copy_block(&output, "Main Client Script"), "-- client");
        assert_eq!(TerminalReporter.format_name(), "terminal");
        let _ = fs::remove_dir_all(&dir);
    }
}
