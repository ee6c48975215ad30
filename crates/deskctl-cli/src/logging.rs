//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "deskctl=debug" } else { "deskctl=info" }
}

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over `--verbose`. Output goes to stderr so
/// `deskctl paths` stays machine-readable.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
