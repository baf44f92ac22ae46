//! Logging setup for the command-line binary.

use tracing_subscriber::{filter::EnvFilter, fmt};

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// `livejump` debug output when `verbose` is set. Stdout is left for
/// command output.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "livejump=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (e.g. in tests)
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
