//! Process-environment tests for the loader.
//!
//! Responsibilities:
//! - Exercise `EnvProvider::load` against real process variables.
//! - Cover enforcement, empty-value handling, and deferred schemas end to end.
//!
//! Does NOT handle:
//! - Pure conversion or naming rules (tested next to convert.rs and naming.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Variables are scoped with `temp_env` and restored after each test.

use std::sync::Mutex;

use crate::types::Table;
use crate::types::Value;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a table from a JSON object literal.
pub fn table(json: serde_json::Value) -> Table {
    match Value::from_json(json) {
        Some(Value::Table(table)) => table,
        other => panic!("expected a JSON object, got {other:?}"),
    }
}
