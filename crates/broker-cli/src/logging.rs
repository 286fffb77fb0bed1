//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
