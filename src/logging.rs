//! Logging setup shared by the GUI and CLI binaries.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("product_compare=debug,compare_cli=debug,warn")
        } else {
            EnvFilter::new("product_compare=info,compare_cli=info,warn")
        }
    });

    // A second init (e.g. from tests) is ignored.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
