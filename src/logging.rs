//! Diagnostic logging on stderr.
//!
//! Progress output for the user is printed directly; this is only for
//! debugging what was run. `RUST_LOG` wins over `--verbose` when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .try_init();
}
