//! Diagnostic logging, kept on stderr so stdout only carries the status lines

use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`
pub const LOG_ENV: &str = "WARKOP_LAUNCHER_LOG";

const DEFAULT_FILTER: &str = "error";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}
