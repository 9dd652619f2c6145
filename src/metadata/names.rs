//! Narrow editing interface over the compiled font
//!
//! The rest of the pipeline never touches the font library directly; it
//! goes through [`CompiledFont`], which knows how to open a font, replace
//! naming-table records by field id, set the OS/2 vendor id, and save to a
//! new path. Every table other than `name` and `OS/2` passes through
//! byte-identical.

use std::fs;
use std::path::{Path, PathBuf};

use write_fonts::from_obj::ToOwnedTable;
use write_fonts::read::{FontRef, TableProvider};
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::tables::os2::Os2;
use write_fonts::types::{NameId, Tag};
use write_fonts::FontBuilder;

use crate::core::errors::BuildError;

// Windows: platform 3, Unicode BMP encoding, US English.
const WINDOWS: (u16, u16, u16) = (3, 1, 0x409);
// Macintosh: platform 1, Roman encoding, English.
const MACINTOSH: (u16, u16, u16) = (1, 0, 0);

/// A compiled font opened for metadata editing.
#[derive(Debug)]
pub struct CompiledFont {
    data: Vec<u8>,
    source: PathBuf,
    name: Name,
    os2: Option<Os2>,
}

impl CompiledFont {
    /// Open a compiled font and pull its `name` and `OS/2` tables into
    /// editable form.
    pub fn open(path: &Path) -> Result<Self, BuildError> {
        let data = fs::read(path).map_err(|e| BuildError::font_io(path, e.to_string()))?;
        let font =
            FontRef::new(&data).map_err(|e| BuildError::font_io(path, e.to_string()))?;
        let name = font
            .name()
            .map(|t| t.to_owned_table())
            .unwrap_or_default();
        let os2 = font.os2().ok().map(|t| t.to_owned_table());
        Ok(Self {
            data,
            source: path.to_path_buf(),
            name,
            os2,
        })
    }

    /// Replace every record for `id` with one Windows and one Macintosh
    /// record carrying the same value.
    pub fn set_name(&mut self, id: NameId, value: &str) {
        self.name.name_record.retain(|record| record.name_id != id);
        for (platform, encoding, language) in [WINDOWS, MACINTOSH] {
            self.name.name_record.insert(NameRecord::new(
                platform,
                encoding,
                language,
                id,
                value.to_string().into(),
            ));
        }
    }

    /// Set the OS/2 `achVendID`, if the font carries an OS/2 table.
    pub fn set_vendor_id(&mut self, vendor_id: &str) {
        if let Some(os2) = self.os2.as_mut() {
            os2.ach_vend_id = vendor_tag(vendor_id);
        }
    }

    /// Write the edited font to `output`, copying all untouched tables from
    /// the source bytes.
    pub fn save(&self, output: &Path) -> Result<(), BuildError> {
        let font = FontRef::new(&self.data)
            .map_err(|e| BuildError::font_io(&self.source, e.to_string()))?;
        let mut builder = FontBuilder::default();
        builder
            .add_table(&self.name)
            .map_err(|e| BuildError::font_io(output, e.to_string()))?;
        if let Some(os2) = &self.os2 {
            builder
                .add_table(os2)
                .map_err(|e| BuildError::font_io(output, e.to_string()))?;
        }
        builder.copy_missing_tables(font);
        let bytes = builder.build();
        fs::write(output, bytes).map_err(|e| BuildError::font_io(output, e.to_string()))
    }

    /// Records currently present for a field id, in table order.
    pub fn name_records(&self, id: NameId) -> Vec<&NameRecord> {
        self.name
            .name_record
            .iter()
            .filter(|record| record.name_id == id)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(data: Vec<u8>, name: Name, os2: Option<Os2>) -> Self {
        Self {
            data,
            source: PathBuf::from("test"),
            name,
            os2,
        }
    }

    #[cfg(test)]
    pub(crate) fn os2(&self) -> Option<&Os2> {
        self.os2.as_ref()
    }
}

/// Space-pad (or truncate) a vendor id to the exact 4 bytes an OS/2
/// `achVendID` holds. Non-ASCII characters are dropped; the tag registry
/// only admits printable ASCII.
fn vendor_tag(vendor_id: &str) -> Tag {
    let mut bytes = [b' '; 4];
    for (slot, ch) in bytes
        .iter_mut()
        .zip(vendor_id.chars().filter(char::is_ascii))
    {
        *slot = ch as u8;
    }
    Tag::new(&bytes)
}
