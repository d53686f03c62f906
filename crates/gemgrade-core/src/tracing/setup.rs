//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for the grading engine.
///
/// Reads `GEMGRADE_LOG` for per-crate log levels, e.g.
/// `GEMGRADE_LOG=gemgrade_engine=debug,gemgrade_storage=warn`.
/// Falls back to `gemgrade=info` if unset or invalid.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GEMGRADE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("gemgrade=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
