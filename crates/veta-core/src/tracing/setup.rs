//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `VETA_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "veta=info";

/// Initialize the Veta tracing/logging system.
///
/// Reads `VETA_LOG` for per-engine log levels, e.g.
/// `VETA_LOG=veta_analysis::fusion=debug,veta_analysis::veto=trace`.
///
/// Idempotent. The core never writes to stdout/stderr on its own; log
/// output only appears once a host calls this.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("VETA_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
