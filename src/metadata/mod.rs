//! Metadata writer
//!
//! Stamps the compiled font with its naming metadata: 14 naming-table
//! fields, each written once for the Windows platform and once for the
//! Macintosh platform, plus the OS/2 vendor id. Everything is recomputed
//! from the configuration on every run; pre-existing records for the same
//! fields are dropped first.

pub mod names;

use std::path::Path;

use tracing::info;
use write_fonts::types::NameId;

use crate::core::config::FontConfig;
use crate::core::errors::BuildError;
use names::CompiledFont;

/// Naming strings derived from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub postscript_name: String,
    pub vendor_id: String,
    pub unique_id: String,
    pub version: String,
    pub full_description: String,
}

impl DerivedNames {
    pub fn from_config(config: &FontConfig) -> Self {
        let font = &config.font;
        let postscript_name: String =
            font.name.chars().filter(|c| *c != ' ').collect();
        let vendor_id: String = font
            .vendor_id
            .as_deref()
            .unwrap_or("NONE")
            .chars()
            .take(4)
            .collect();
        let version = config.version().to_string();
        let unique_id = format!("{vendor_id};{version};{postscript_name}");

        let mut full_description = font.description.clone().unwrap_or_default();
        if !font.keywords.is_empty() {
            full_description.push_str("\nKeywords: ");
            full_description.push_str(&font.keywords.join(", "));
        }

        Self {
            postscript_name,
            vendor_id,
            unique_id,
            version,
            full_description,
        }
    }
}

/// Rewrite the naming table and vendor id of the font at `artifact` and
/// save the result to `output`. All other tables pass through unchanged.
pub fn apply(artifact: &Path, config: &FontConfig, output: &Path) -> Result<(), BuildError> {
    let font_info = &config.font;
    let derived = DerivedNames::from_config(config);

    let mut font = CompiledFont::open(artifact)?;

    let opt = |value: &Option<String>| value.clone().unwrap_or_default();

    font.set_name(NameId::COPYRIGHT_NOTICE, &opt(&font_info.copyright));
    font.set_name(NameId::FAMILY_NAME, &font_info.name);
    font.set_name(NameId::SUBFAMILY_NAME, "Regular");
    font.set_name(NameId::UNIQUE_ID, &derived.unique_id);
    font.set_name(NameId::FULL_NAME, &font_info.name);
    font.set_name(
        NameId::VERSION_STRING,
        &format!("Version {}", derived.version),
    );
    font.set_name(NameId::POSTSCRIPT_NAME, &derived.postscript_name);
    font.set_name(NameId::MANUFACTURER, &opt(&font_info.vendor));
    font.set_name(NameId::DESIGNER, &opt(&font_info.designer));
    font.set_name(NameId::DESCRIPTION, &derived.full_description);
    font.set_name(NameId::VENDOR_URL, &opt(&font_info.designer_url));
    font.set_name(NameId::DESIGNER_URL, &opt(&font_info.designer_url));
    font.set_name(NameId::LICENSE_DESCRIPTION, &opt(&font_info.license));
    font.set_name(NameId::LICENSE_URL, &opt(&font_info.license_url));

    font.set_vendor_id(&derived.vendor_id);

    font.save(output)?;
    info!(output = %output.display(), "wrote font metadata");
    Ok(())
}
