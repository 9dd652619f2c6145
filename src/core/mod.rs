//! Core pipeline functionality
//!
//! This module contains the glue around the build stages:
//! - CLI parsing and validation
//! - Configuration loading
//! - Error types shared by every stage
//! - Logging and process-level error reporting
//! - The runner that sequences the stages

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod platform;
pub mod runner;

pub use cli::CliArgs;
pub use config::{Codepoint, FontConfig, FontInfo, GlyphEntry, Metrics};
pub use errors::BuildError;
