//! Logging initialization

use std::io::IsTerminal;

/// Initialize logging based on debug flag
///
/// Logs go to stderr so scan output on stdout stays machine-readable.
/// RUST_LOG overrides the level chosen by the flag.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(debug)
        .init();
}
