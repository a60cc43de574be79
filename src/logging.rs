//! Diagnostic tracing for the launcher.
//!
//! Menus and prompts go to stdout. Tracing goes to stderr and stays quiet
//! unless `RUST_LOG` asks for more, e.g.
//!
//! ```bash
//! RUST_LOG=agent_launcher=debug agent-launcher
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Defaults to `warn` if `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
