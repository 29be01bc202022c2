//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SCRIPTLENS_LOG";

/// Filter used when `SCRIPTLENS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "scriptlens=warn";

/// Initialize the scriptlens tracing/logging system.
///
/// Reads `SCRIPTLENS_LOG` for per-module log levels, e.g.
/// `SCRIPTLENS_LOG=scriptlens_analysis::collector=debug`.
///
/// Events are written as JSON lines to stderr. Stdout is reserved for the
/// feature record.
///
/// This function is idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();

        // Another subscriber (e.g. a test harness) may already own the global slot.
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
