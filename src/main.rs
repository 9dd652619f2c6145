//! A build-time tool that turns SVG glyphs plus a JSON configuration into
//! a color font with full naming metadata and an HTML preview page.

use anyhow::Result;
use chromafont::core;
use clap::Parser;

/// Run the build pipeline with the given CLI arguments.
fn run_build(cli_args: core::cli::CliArgs) -> Result<()> {
    core::runner::run(&cli_args)?;
    Ok(())
}

fn main() {
    core::logging::init();
    let cli_args = core::cli::CliArgs::parse();
    match run_build(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
