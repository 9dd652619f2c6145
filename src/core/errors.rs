//! Error types for the font build pipeline
//!
//! Every stage maps its failures onto one of these kinds. All of them are
//! fatal to the run: the pipeline never retries and never treats partial
//! output as valid.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the build pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration file could not be read or parsed as JSON.
    #[error("failed to load config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A glyph entry references a missing SVG file or carries a codepoint
    /// that cannot be resolved to a Unicode scalar value.
    #[error("glyph `{name}`: {message}")]
    GlyphResolution { name: String, message: String },

    /// The external font compiler exited with a non-zero status.
    #[error("font compiler failed ({status}); see its output above")]
    Compilation { status: ExitStatus },

    /// The external font compiler could not be spawned at all.
    #[error("failed to launch font compiler `{program}`: {source}")]
    CompilerLaunch {
        program: String,
        source: std::io::Error,
    },

    /// A font file (or the preview document) could not be opened or written.
    #[error("font I/O error on {path}: {message}")]
    FontIo { path: PathBuf, message: String },

    /// Invalid command line input that clap's arity checks cannot catch,
    /// such as a path argument that does not exist.
    #[error("{0}")]
    Usage(String),
}

impl BuildError {
    pub fn font_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FontIo {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn glyph(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GlyphResolution {
            name: name.into(),
            message: message.into(),
        }
    }
}
