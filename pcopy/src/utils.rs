// src/utils.rs
use std::io;
use tracing_subscriber::EnvFilter;

use crate::models::Status;

/// Environment variable holding the tracing filter, e.g. `PCOPY_LOG=debug`.
pub const LOG_ENV: &str = "PCOPY_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr tracing subscriber.
///
/// Stdout is reserved for status lines, so diagnostics never mix with them.
/// Calling this more than once is harmless.
#[inline]
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[inline]
pub fn print_status(status: &Status<'_>) {
    println!("{status}");
}
