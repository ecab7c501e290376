//! Line-oriented log output with indentation and ANSI colours, plus the
//! `tracing` subscriber used by the `lvd` binaries.

mod color;
mod config;
mod log;

pub use color::AnsiColor;
pub use config::LogConfig;
pub use log::{IndentGuard, Log};

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: `debug` when `verbose`, else `info`.
/// `RUST_LOG` overrides both.
pub fn init_tracing(verbose: bool) -> Result<(), TryInitError> {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
}
