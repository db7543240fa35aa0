//! Tracing subscriber setup shared by `meta` and compiled metafiles.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Filter directives for both processes, e.g. `META_LOG=debug`.
pub const LOG_ENV: &str = "META_LOG";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr `fmt` subscriber filtered by [`LOG_ENV`], defaulting to `warn`.
///
/// Calling this more than once is harmless.
pub fn init_tracing() {
    if TRACING_INIT.get().is_some() {
        return;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let _ = TRACING_INIT.set(());
}
