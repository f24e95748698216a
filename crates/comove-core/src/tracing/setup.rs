//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable read for log filtering.
pub const LOG_ENV_VAR: &str = "COMOVE_LOG";

/// Initialize the comove tracing/logging system.
///
/// Reads `COMOVE_LOG` for per-crate log levels, e.g.
/// `COMOVE_LOG=comove_fuzzy=debug,comove_mining=info`.
/// Falls back to `comove=info` if `COMOVE_LOG` is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("comove=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
