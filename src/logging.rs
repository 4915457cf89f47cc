//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`)
pub const LOG_ENV: &str = "MICRO_CLAUDE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber
///
/// Status lines meant for the user are printed separately on stdout; this
/// only carries diagnostics. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
