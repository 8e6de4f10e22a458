//! Tests for the tracing setup.

use std::sync::Mutex;

use veta_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn invalid_veta_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("VETA_LOG", "=[not a filter");
    init_tracing();
    std::env::remove_var("VETA_LOG");
}
