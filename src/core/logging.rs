//! Logging setup
//!
//! Stage progress goes to stderr through `tracing`, so stdout stays clean
//! for anything the external compiler prints. `RUST_LOG` overrides the
//! default `info` level.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
