//! Font compiler adapter
//!
//! Drives the external color-font compiler (nanoemoji). The adapter stages
//! renamed SVG copies in a scratch directory, writes the compiler's TOML
//! build description, and invokes the compiler as a subprocess, waiting
//! synchronously for it to finish. All scratch state lives in `tempfile`
//! handles, so it is removed on every exit path.

pub mod scratch;

use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::core::config::FontConfig;
use crate::core::errors::BuildError;

/// Environment variable that overrides the compiler executable.
const COMPILER_ENV: &str = "NANOEMOJI";

/// Default compiler executable, looked up on `PATH`.
const DEFAULT_COMPILER: &str = "nanoemoji";

/// Handle on the external compiler executable.
pub struct Compiler {
    program: String,
}

impl Compiler {
    /// Use the compiler named by `NANOEMOJI`, or `nanoemoji` from `PATH`.
    pub fn from_env() -> Self {
        let program =
            std::env::var(COMPILER_ENV).unwrap_or_else(|_| DEFAULT_COMPILER.to_string());
        Self { program }
    }

    /// Use a specific executable. Tests inject stub compilers through this.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Compile the configured glyphs into a color font at `output`.
    ///
    /// Glyph resolution runs first, so a missing SVG or a bad codepoint
    /// aborts before any scratch state exists or the compiler is spawned.
    /// No timeout is enforced on the subprocess.
    pub fn build(
        &self,
        config: &FontConfig,
        svg_dir: &Path,
        output: &Path,
    ) -> Result<(), BuildError> {
        let resolved = scratch::resolve_glyphs(config, svg_dir)?;
        let staged = scratch::stage(&resolved)?;

        let description = build_description(config, output);
        let mut toml_file = tempfile::Builder::new()
            .prefix("chromafont-")
            .suffix(".toml")
            .tempfile()
            .map_err(|e| BuildError::font_io("build description", e.to_string()))?;
        toml_file
            .write_all(description.as_bytes())
            .map_err(|e| BuildError::font_io(toml_file.path(), e.to_string()))?;
        toml_file
            .flush()
            .map_err(|e| BuildError::font_io(toml_file.path(), e.to_string()))?;

        info!(
            compiler = %self.program,
            glyphs = staged.files.len(),
            "invoking font compiler"
        );
        debug!(config = %description, "build description");

        let status = Command::new(&self.program)
            .arg(toml_file.path())
            .args(&staged.files)
            .status()
            .map_err(|source| BuildError::CompilerLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BuildError::Compilation { status });
        }
        Ok(())
    }
}

/// Render the declarative build description the compiler consumes.
///
/// Matches nanoemoji's config format: one weight axis and a single Regular
/// master, with the descender stored as a negative magnitude.
fn build_description(config: &FontConfig, output: &Path) -> String {
    // TOML string escapes; family names are the only field likely to need it
    let family = config.font.name.replace('\\', "\\\\").replace('"', "\\\"");
    let output_file = output.display().to_string().replace('\\', "/");
    format!(
        r#"family = "{family}"
upem = {upem}
ascender = {ascender}
descender = {descender}
color_format = "{color_format}"
output_file = "{output_file}"

[axis.wght]
name = "Weight"
default = 400

[master.default]
style_name = "Regular"

[master.default.position]
wght = 400
"#,
        upem = config.units_per_em(),
        ascender = config.ascent(),
        descender = -config.descent(),
        color_format = config.color_format(),
    )
}
