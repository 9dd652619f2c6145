//! chromafont: build color fonts from SVG glyph sources.

pub mod compile;
pub mod core;
pub mod metadata;
pub mod preview;
