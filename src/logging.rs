//! Tracing subscriber initialisation.
//!
//! All diagnostics go to stderr through [`tracing`]; rendered output owns
//! stdout. The default level keeps skip warnings visible without drowning
//! the render output in loader chatter.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// The default level is `warn`; `verbose` raises it to `debug`. The
/// `TERMRIG_LOG` environment variable overrides both with a full
/// [`EnvFilter`] directive string.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TERMRIG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
