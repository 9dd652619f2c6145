//! Preview page generator
//!
//! Renders a self-contained `preview.html` for visually inspecting the
//! built font. The page is derived entirely from the configuration; the
//! compiled font is only referenced by file name in the `@font-face` rule,
//! never read. Every configuration-sourced string is HTML-escaped on
//! insertion.

use std::fs;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::config::{FontConfig, GlyphEntry};
use crate::core::errors::BuildError;

/// Pixel sizes for the size-demonstration row.
const SAMPLE_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 96, 128];

/// How many glyphs pre-populate the test input.
const TEST_GLYPHS: usize = 5;

/// Render the preview and write it as `preview.html` into `out_dir`,
/// overwriting any existing file of that name.
pub fn write(
    config: &FontConfig,
    out_dir: &Path,
    font_file_name: &str,
) -> Result<PathBuf, BuildError> {
    let path = out_dir.join("preview.html");
    let html = render(config, font_file_name);
    fs::write(&path, html).map_err(|e| BuildError::font_io(&path, e.to_string()))?;
    info!(path = %path.display(), "wrote preview page");
    Ok(path)
}

/// Escape text for safe insertion into HTML content or attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Codepoint of a glyph entry, for display purposes only. Entries are
/// validated during compilation; anything unresolvable here renders as
/// U+FFFD rather than failing the preview.
fn display_codepoint(entry: &GlyphEntry) -> u32 {
    entry.codepoint.resolve().unwrap_or(0xFFFD)
}

fn char_ref(codepoint: u32) -> String {
    format!("&#x{codepoint:X};")
}

/// Human-readable label for a nanoemoji color format string.
fn color_format_label(format: &str) -> String {
    match format {
        "glyf_colr_0" => "COLR v0".to_string(),
        "glyf_colr_1" => "COLR v1".to_string(),
        "cff_colr_0" => "COLR v0 (CFF)".to_string(),
        "cff_colr_1" => "COLR v1 (CFF)".to_string(),
        "picosvg" | "picosvgz" | "untouchedsvg" | "untouchedsvgz" => "OT-SVG".to_string(),
        "cbdt" => "CBDT bitmap".to_string(),
        "sbix" => "sbix bitmap".to_string(),
        other => other.to_string(),
    }
}

fn render(config: &FontConfig, font_file_name: &str) -> String {
    let font = &config.font;
    let family = escape(&font.name);
    let designer = escape(font.designer.as_deref().unwrap_or("Unknown"));
    let designer_url = escape(font.designer_url.as_deref().unwrap_or("#"));
    let license = escape(font.license.as_deref().unwrap_or("Unknown"));
    let license_url = escape(font.license_url.as_deref().unwrap_or("#"));
    let format_label = escape(&color_format_label(config.color_format()));

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{family} preview</title>
<style>
@font-face {{
  font-family: "{family}";
  src: url("{src}");
}}
{css}.glyph, .sample, #test-output {{ font-family: "{family}", sans-serif; }}
</style>
</head>
<body>
<header>
<h1>{family}</h1>
<p class="meta">Version {version} &middot; {designer} &middot; {count} glyphs &middot; {format_label} &middot; {license}</p>
</header>
"#,
        src = escape(font_file_name),
        css = STYLE,
        version = escape(config.version()),
        count = config.glyphs.len(),
    );

    // glyph cards, one per entry, in configuration order
    html.push_str("<section>\n<h2>Glyphs</h2>\n<div class=\"cards\">\n");
    for entry in &config.glyphs {
        let codepoint = display_codepoint(entry);
        let code = format!("U+{codepoint:04X}");
        let _ = write!(
            html,
            r#"<div class="card" data-code="{code}" title="Click to copy codepoint">
<div class="glyph">{glyph}</div>
<div class="label">{label}</div>
<div class="code">{code}</div>
</div>
"#,
            glyph = char_ref(codepoint),
            label = escape(&entry.name),
        );
    }
    html.push_str("</div>\n</section>\n");

    // size samples use the first configured glyph
    if let Some(first) = config.glyphs.first() {
        let glyph = char_ref(display_codepoint(first));
        html.push_str("<section>\n<h2>Sizes</h2>\n<div class=\"sizes\">\n");
        for size in SAMPLE_SIZES {
            let _ = write!(
                html,
                "<span class=\"sample\" style=\"font-size: {size}px\">{glyph}</span>\n"
            );
        }
        html.push_str("</div>\n</section>\n");
    }

    // test area pre-populated with the first few glyphs
    let test_refs: String = config
        .glyphs
        .iter()
        .take(TEST_GLYPHS)
        .map(|g| char_ref(display_codepoint(g)))
        .collect();
    let test_hint: String = config
        .glyphs
        .iter()
        .take(TEST_GLYPHS)
        .map(|g| escape(&char_ref(display_codepoint(g))))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(
        html,
        r#"<section>
<h2>Test area</h2>
<input id="test-input" type="text" value="{test_refs}" spellcheck="false">
<p class="hint">Type character references such as {test_hint}</p>
<div id="test-output"></div>
</section>
"#
    );

    let _ = write!(
        html,
        r#"<footer>
<a href="{designer_url}">{designer}</a> &middot; <a href="{license_url}">{license}</a>
</footer>
<script>
{js}</script>
</body>
</html>
"#,
        js = SCRIPT,
    );
    html
}

/// Static page styling. Kept out of the format string so the braces do not
/// fight with `write!`.
const STYLE: &str = r#"body { font-family: sans-serif; margin: 2rem auto; max-width: 64rem; padding: 0 1rem; color: #222; }
header h1 { margin-bottom: 0.25rem; }
.meta { color: #666; }
.cards { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.card { border: 1px solid #ddd; border-radius: 0.5rem; padding: 0.75rem; text-align: center; min-width: 6rem; cursor: pointer; }
.card.copied { border-color: #4a9; }
.card .glyph { font-size: 2.5rem; }
.card .label { margin-top: 0.5rem; }
.card .code { color: #888; font-size: 0.8rem; }
.sizes { display: flex; align-items: baseline; gap: 1rem; flex-wrap: wrap; }
#test-input { width: 100%; font-size: 1rem; padding: 0.5rem; box-sizing: border-box; }
.hint { color: #888; font-size: 0.85rem; }
#test-output { font-size: 3rem; min-height: 4rem; margin-top: 0.5rem; }
footer { margin-top: 3rem; color: #666; }
"#;

/// Client-side behavior: click-to-copy on the cards, and live decoding of
/// `&#x...;` / `&#...;` references typed into the test input.
const SCRIPT: &str = r#"document.querySelectorAll('.card').forEach(function (card) {
  card.addEventListener('click', function () {
    if (navigator.clipboard) {
      navigator.clipboard.writeText(card.dataset.code);
    }
    card.classList.add('copied');
    setTimeout(function () { card.classList.remove('copied'); }, 600);
  });
});
var input = document.getElementById('test-input');
var output = document.getElementById('test-output');
function decodeRefs(text) {
  return text
    .replace(/&#x([0-9a-f]+);/gi, function (_, hex) {
      return String.fromCodePoint(parseInt(hex, 16));
    })
    .replace(/&#(\d+);/g, function (_, dec) {
      return String.fromCodePoint(parseInt(dec, 10));
    });
}
function sync() { output.textContent = decodeRefs(input.value); }
input.addEventListener('input', sync);
sync();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(json: &str) -> FontConfig {
        serde_json::from_str(json).unwrap()
    }

    const THREE_GLYPHS: &str = r#"{
        "font": {"name": "Test Icons", "version": "2.0"},
        "glyphs": [
            {"codepoint": "0xE001", "file": "a.svg", "name": "star"},
            {"codepoint": "0xE002", "file": "b.svg", "name": "moon"},
            {"codepoint": 57347, "file": "c.svg", "name": "sun"}
        ]
    }"#;

    #[test]
    fn one_card_per_glyph_in_config_order() {
        let config = test_config(THREE_GLYPHS);
        let html = render(&config, "TestIcons.ttf");

        assert_eq!(html.matches("class=\"card\"").count(), 3);
        let star = html.find("star").unwrap();
        let moon = html.find("moon").unwrap();
        let sun = html.find("sun").unwrap();
        assert!(star < moon && moon < sun);
        assert!(html.contains("U+E001"));
        // decimal codepoint 57347 renders the same as hex would
        assert!(html.contains("U+E003"));
    }

    #[test]
    fn renders_seven_size_samples_of_first_glyph() {
        let config = test_config(THREE_GLYPHS);
        let html = render(&config, "TestIcons.ttf");
        assert_eq!(html.matches("class=\"sample\"").count(), 7);
        assert!(html.contains("font-size: 16px"));
        assert!(html.contains("font-size: 128px"));
        assert_eq!(html.matches("font-size: 128px\">&#xE001;").count(), 1);
    }

    #[test]
    fn test_input_holds_first_five_glyphs() {
        let config = test_config(THREE_GLYPHS);
        let html = render(&config, "TestIcons.ttf");
        assert!(html.contains("value=\"&#xE001;&#xE002;&#xE003;\""));
        // hint shows the escaped entity form
        assert!(html.contains("&amp;#xE001;"));
    }

    #[test]
    fn escapes_config_sourced_text() {
        let config = test_config(
            r#"{"font": {"name": "Evil <b>\"Font\"</b> & Co",
                 "license": "<script>alert(1)</script>"}}"#,
        );
        let html = render(&config, "out.ttf");
        assert!(!html.contains("<b>"));
        assert!(html.contains("Evil &lt;b&gt;&quot;Font&quot;&lt;/b&gt; &amp; Co"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn missing_optional_fields_fall_back() {
        let config = test_config(r#"{"font": {"name": "Bare"}}"#);
        let html = render(&config, "Bare.ttf");
        assert!(html.contains("Unknown"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("Version 1.0"));
        assert!(html.contains("0 glyphs"));
        assert!(html.contains("COLR v1"));
        // no glyphs means no size-sample section
        assert!(!html.contains("class=\"sample\""));
    }

    #[test]
    fn write_overwrites_existing_preview() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(THREE_GLYPHS);

        std::fs::write(dir.path().join("preview.html"), "stale").unwrap();
        let path = write(&config, dir.path(), "TestIcons.ttf").unwrap();
        assert_eq!(path, dir.path().join("preview.html"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Test Icons"));
        assert!(!contents.contains("stale"));
    }
}
