// File: src/logging.rs
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `VOCABULARIO_LOG=drill_core=debug`.
pub const LOG_ENV: &str = "VOCABULARIO_LOG";

static INIT: Once = Once::new();

/// Sets up the global subscriber. Logs go to stderr so they never mix with the
/// drill prompt. Calling it more than once is harmless, and a subscriber
/// installed by an embedding program is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init()
            .ok();
    });
}
