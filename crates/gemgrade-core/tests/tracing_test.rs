//! Tracing setup is safe to call more than once.

use gemgrade_core::tracing::init_tracing;

#[test]
fn init_tracing_is_idempotent() {
    std::env::set_var("GEMGRADE_LOG", "gemgrade_core=debug");
    init_tracing();
    init_tracing();
    tracing::debug!(target: "gemgrade_core", "tracing initialized");
}
