//! Command line interface for the chromafont build tool
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs before any build stage runs.

use std::path::PathBuf;

use clap::Parser;

use crate::core::errors::BuildError;

/// chromafont CLI arguments
///
/// Examples:
///   chromafont config.json ./svgs/ ClipIcons.ttf
///   NANOEMOJI=/opt/venv/bin/nanoemoji chromafont config.json ./svgs/ out.ttf
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "chromafont",
    version,
    about = "Build a color font from SVG glyph sources",
    long_about = "Builds a color font from a directory of SVG glyph images and a JSON \
configuration, stamps it with naming metadata for the Windows and Macintosh platforms, \
and writes a static preview.html next to the output font."
)]
pub struct CliArgs {
    /// Path to the JSON build configuration
    #[clap(help = "JSON configuration describing the font and its glyphs")]
    pub config: PathBuf,

    /// Directory containing the SVG files referenced by the configuration
    #[clap(help = "Directory of SVG glyph sources")]
    pub svg_dir: PathBuf,

    /// Where to write the compiled font
    #[clap(help = "Output font path, e.g. ClipIcons.ttf")]
    pub output: PathBuf,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing.
    ///
    /// This ensures the input paths exist before the pipeline starts,
    /// providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.config.is_file() {
            return Err(BuildError::Usage(format!(
                "config file does not exist: {}",
                self.config.display()
            )));
        }
        if !self.svg_dir.is_dir() {
            return Err(BuildError::Usage(format!(
                "SVG directory does not exist: {}",
                self.svg_dir.display()
            )));
        }
        Ok(())
    }
}
