//! Font build configuration
//!
//! Deserializes the maintainer-supplied JSON document into [`FontConfig`].
//! The loader deliberately performs no schema validation beyond what serde
//! needs to build the structs; missing optional fields fall back to defaults
//! through the accessor methods, and bad glyph data is only rejected once
//! the compiler adapter resolves each entry.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::errors::BuildError;

/// Top-level build configuration, loaded once per run and read-only after.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    pub font: FontInfo,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub color_format: Option<String>,
    #[serde(default)]
    pub glyphs: Vec<GlyphEntry>,
}

/// Naming and attribution fields for the font being built.
///
/// Only `name` is required; everything else is optional and surfaces as an
/// empty naming-table entry (or a preview fallback) when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default)]
    pub designer_url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Vertical metrics passed through to the compiler's build description.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default)]
    pub units_per_em: Option<u32>,
    #[serde(default)]
    pub ascent: Option<i32>,
    #[serde(default)]
    pub descent: Option<i32>,
}

/// One glyph slot: which SVG goes at which codepoint, with a display label.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphEntry {
    pub codepoint: Codepoint,
    pub file: String,
    pub name: String,
}

/// A codepoint as configured: either a plain JSON integer (decimal) or a
/// string that is parsed as hexadecimal, with or without a `0x`/`U+` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Codepoint {
    Scalar(u32),
    Hex(String),
}

impl Codepoint {
    /// Resolve to a Unicode scalar value.
    pub fn resolve(&self) -> Result<u32, String> {
        let value = match self {
            Codepoint::Scalar(v) => *v,
            Codepoint::Hex(s) => {
                let digits = s
                    .trim()
                    .trim_start_matches("0x")
                    .trim_start_matches("0X")
                    .trim_start_matches("U+")
                    .trim_start_matches("u+");
                u32::from_str_radix(digits, 16)
                    .map_err(|_| format!("`{s}` is not a valid hexadecimal codepoint"))?
            }
        };
        if char::from_u32(value).is_none() {
            return Err(format!("0x{value:04X} is not a Unicode scalar value"));
        }
        Ok(value)
    }
}

impl FontConfig {
    /// Load the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let contents = fs::read_to_string(path).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn units_per_em(&self) -> u32 {
        self.metrics.units_per_em.unwrap_or(2048)
    }

    pub fn ascent(&self) -> i32 {
        self.metrics.ascent.unwrap_or(1800)
    }

    /// Descent as a positive magnitude; the build description negates it.
    pub fn descent(&self) -> i32 {
        self.metrics.descent.unwrap_or(248).abs()
    }

    pub fn color_format(&self) -> &str {
        self.color_format.as_deref().unwrap_or("glyf_colr_1")
    }

    pub fn version(&self) -> &str {
        self.font.version.as_deref().unwrap_or("1.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FontConfig {
        serde_json::from_str(json).expect("config should parse")
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = parse(r#"{"font": {"name": "Test Icons"}}"#);
        assert_eq!(config.font.name, "Test Icons");
        assert_eq!(config.version(), "1.0");
        assert_eq!(config.units_per_em(), 2048);
        assert_eq!(config.ascent(), 1800);
        assert_eq!(config.descent(), 248);
        assert_eq!(config.color_format(), "glyf_colr_1");
        assert!(config.glyphs.is_empty());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let config = parse(
            r#"{
                "font": {
                    "name": "Clip Icons",
                    "version": "2.0",
                    "vendorId": "CLIP",
                    "keywords": ["icons", "color"],
                    "designerUrl": "https://example.com"
                },
                "metrics": {"unitsPerEm": 1024, "ascent": 900, "descent": -100},
                "colorFormat": "picosvg",
                "glyphs": [
                    {"codepoint": "0xE001", "file": "a.svg", "name": "star"}
                ]
            }"#,
        );
        assert_eq!(config.units_per_em(), 1024);
        assert_eq!(config.ascent(), 900);
        // negative magnitudes in the config normalize to positive
        assert_eq!(config.descent(), 100);
        assert_eq!(config.color_format(), "picosvg");
        assert_eq!(config.glyphs.len(), 1);
        assert_eq!(config.glyphs[0].name, "star");
    }

    #[test]
    fn codepoint_accepts_decimal_and_hex_forms() {
        assert_eq!(Codepoint::Scalar(128512).resolve().unwrap(), 0x1F600);
        assert_eq!(
            Codepoint::Hex("0x1F600".into()).resolve().unwrap(),
            0x1F600
        );
        assert_eq!(Codepoint::Hex("1F600".into()).resolve().unwrap(), 0x1F600);
        assert_eq!(Codepoint::Hex("U+E001".into()).resolve().unwrap(), 0xE001);
    }

    #[test]
    fn codepoint_rejects_garbage_and_surrogates() {
        assert!(Codepoint::Hex("star".into()).resolve().is_err());
        assert!(Codepoint::Hex("".into()).resolve().is_err());
        // surrogate range is not a scalar value
        assert!(Codepoint::Scalar(0xD800).resolve().is_err());
        assert!(Codepoint::Scalar(0x110000).resolve().is_err());
    }

    #[test]
    fn load_reports_config_error_for_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = FontConfig::load(&path).unwrap_err();
        assert!(matches!(err, BuildError::Config { .. }));

        let missing = dir.path().join("nope.json");
        let err = FontConfig::load(&missing).unwrap_err();
        assert!(matches!(err, BuildError::Config { .. }));
    }
}
