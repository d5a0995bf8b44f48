//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the
//! report. The filter comes from `CFGDIFF_LOG` when set, otherwise from the
//! number of `-v` flags.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CFGDIFF_LOG";

static INIT_ONCE: Once = Once::new();

/// Default filter directive for a `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "cfgdiff=warn",
        1 => "cfgdiff=info",
        2 => "cfgdiff=debug",
        _ => "cfgdiff=trace",
    }
}

/// Install the stderr subscriber; later calls are no-ops
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
