//! Scratch SVG staging
//!
//! The external compiler derives each glyph's codepoint from its input
//! filename, so every configured SVG is copied into a temporary directory
//! under the `emoji_u<hex>.svg` convention before the compiler runs. The
//! directory is owned by [`StagedSvgs`] and removed when it drops, on every
//! exit path.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::core::config::FontConfig;
use crate::core::errors::BuildError;

/// A glyph entry with its codepoint resolved and its source file verified.
#[derive(Debug, Clone)]
pub struct ResolvedGlyph {
    pub codepoint: u32,
    pub source: PathBuf,
}

/// Scratch filename the external compiler expects for a codepoint:
/// lowercase hex, zero-padded to at least four digits.
pub fn scratch_file_name(codepoint: u32) -> String {
    format!("emoji_u{codepoint:04x}.svg")
}

/// Resolve every glyph entry against the SVG source directory.
///
/// Runs before any scratch state is created, so a bad entry aborts the
/// build without leaving a staging directory behind.
pub fn resolve_glyphs(
    config: &FontConfig,
    svg_dir: &Path,
) -> Result<Vec<ResolvedGlyph>, BuildError> {
    let mut resolved = Vec::with_capacity(config.glyphs.len());
    for entry in &config.glyphs {
        let codepoint = entry
            .codepoint
            .resolve()
            .map_err(|message| BuildError::glyph(&entry.name, message))?;
        let source = svg_dir.join(&entry.file);
        if !source.is_file() {
            return Err(BuildError::glyph(
                &entry.name,
                format!("SVG file not found: {}", source.display()),
            ));
        }
        resolved.push(ResolvedGlyph { codepoint, source });
    }
    Ok(resolved)
}

/// A temporary directory of renamed SVG copies, removed on drop.
pub struct StagedSvgs {
    _dir: TempDir,
    pub files: Vec<PathBuf>,
}

/// Copy the resolved SVGs into a fresh scratch directory.
pub fn stage(glyphs: &[ResolvedGlyph]) -> Result<StagedSvgs, BuildError> {
    let dir = TempDir::new().map_err(|e| BuildError::font_io("scratch dir", e.to_string()))?;
    let mut files = Vec::with_capacity(glyphs.len());
    for glyph in glyphs {
        let dest = dir.path().join(scratch_file_name(glyph.codepoint));
        fs::copy(&glyph.source, &dest).map_err(|e| {
            BuildError::font_io(&glyph.source, format!("failed to stage SVG: {e}"))
        })?;
        files.push(dest);
    }
    debug!(count = files.len(), dir = %dir.path().display(), "staged SVG sources");
    Ok(StagedSvgs { _dir: dir, files })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Codepoint;

    fn config_with_glyph(codepoint: Codepoint, file: &str) -> FontConfig {
        serde_json::from_str(&format!(
            r#"{{"font": {{"name": "T"}},
                "glyphs": [{{"codepoint": {}, "file": "{file}", "name": "g"}}]}}"#,
            match &codepoint {
                Codepoint::Scalar(v) => v.to_string(),
                Codepoint::Hex(s) => format!("\"{s}\""),
            }
        ))
        .unwrap()
    }

    #[test]
    fn hex_and_decimal_codepoints_stage_identically() {
        // "0x1F600" and 128512 are the same scalar and must produce the
        // same scratch filename
        assert_eq!(scratch_file_name(0x1F600), "emoji_u1f600.svg");
        assert_eq!(scratch_file_name(128512), "emoji_u1f600.svg");
        assert_eq!(scratch_file_name(0xE001), "emoji_ue001.svg");
        // pads short codepoints to four digits
        assert_eq!(scratch_file_name(0x41), "emoji_u0041.svg");
    }

    #[test]
    fn missing_svg_fails_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_glyph(Codepoint::Hex("0xE001".into()), "missing.svg");
        let err = resolve_glyphs(&config, dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::GlyphResolution { .. }));
    }

    #[test]
    fn unparsable_codepoint_fails_resolution() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        let config = config_with_glyph(Codepoint::Hex("xyzzy".into()), "a.svg");
        let err = resolve_glyphs(&config, dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::GlyphResolution { .. }));
    }

    #[test]
    fn stage_copies_under_codepoint_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        let config = config_with_glyph(Codepoint::Scalar(0xE001), "a.svg");

        let resolved = resolve_glyphs(&config, dir.path()).unwrap();
        let staged = stage(&resolved).unwrap();
        assert_eq!(staged.files.len(), 1);
        assert!(staged.files[0].ends_with("emoji_ue001.svg"));
        assert!(staged.files[0].is_file());

        let scratch_dir = staged.files[0].parent().unwrap().to_path_buf();
        drop(staged);
        // scratch directory is gone once the staging handle drops
        assert!(!scratch_dir.exists());
    }
}
