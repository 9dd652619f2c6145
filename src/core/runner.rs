//! Pipeline runner
//!
//! Sequences the four build stages: load config, compile with the external
//! compiler, rewrite metadata, write the preview page. Strictly linear and
//! synchronous; the intermediate font artifact is a named temp file owned
//! here, so it disappears on every exit path once the metadata writer has
//! consumed it.

use std::path::Path;

use tracing::info;

use crate::compile::Compiler;
use crate::core::cli::CliArgs;
use crate::core::config::FontConfig;
use crate::core::errors::BuildError;
use crate::{metadata, preview};

/// Run the full build with the compiler from the environment.
pub fn run(args: &CliArgs) -> Result<(), BuildError> {
    run_with_compiler(args, &Compiler::from_env())
}

/// Run the full build with a specific compiler executable.
pub fn run_with_compiler(args: &CliArgs, compiler: &Compiler) -> Result<(), BuildError> {
    args.validate()?;
    let config = FontConfig::load(&args.config)?;

    let artifact = tempfile::Builder::new()
        .prefix("chromafont-")
        .suffix(".ttf")
        .tempfile()
        .map_err(|e| BuildError::font_io("intermediate font", e.to_string()))?;

    info!(family = %config.font.name, "building color font");
    compiler.build(&config, &args.svg_dir, artifact.path())?;

    info!("applying metadata");
    metadata::apply(artifact.path(), &config, &args.output)?;

    let out_dir = args
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let font_file_name = args
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.output.display().to_string());
    preview::write(&config, out_dir, &font_file_name)?;

    info!(output = %args.output.display(), "done");
    Ok(())
}
