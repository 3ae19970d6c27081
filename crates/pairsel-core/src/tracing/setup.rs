//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the pairsel tracing/logging system.
///
/// Reads `PAIRSEL_LOG` for per-module log levels, e.g.
/// `PAIRSEL_LOG=pairsel_engine=debug,pairsel_storage=warn`.
/// Falls back to `pairsel=info` (or `pairsel=debug` when `verbose`) if the
/// variable is unset or invalid. Output goes to stderr so it never mixes
/// with data written to stdout.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "pairsel=debug,pairsel_core=debug,pairsel_storage=debug,pairsel_engine=debug"
        } else {
            "pairsel=info,pairsel_core=info,pairsel_storage=info,pairsel_engine=info"
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .try_init();
    });
}
