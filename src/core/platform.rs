//! Process-level error reporting.

/// Print a build failure and exit with a non-zero status.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Build failed:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}
