//! Deep merge of resolved trees into existing configuration.

use crate::types::{Table, Value};

/// Merge `incoming` into `existing` and return the result.
///
/// Tables merge key by key; keys present on one side only are carried
/// through. Any other incoming value replaces the existing one. Keys the
/// walker left unset are simply absent from `incoming`, so existing values
/// under them survive.
pub fn merge(mut existing: Table, incoming: Table) -> Table {
    merge_into(&mut existing, incoming);
    existing
}

/// In-place form of [`merge`]. Existing key order is kept; incoming-only
/// keys are appended.
pub fn merge_into(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        let Some(slot) = base.get_mut(&key) else {
            base.insert(key, value);
            continue;
        };
        match (slot, value) {
            (Value::Table(base_table), Value::Table(overlay_table)) => {
                merge_into(base_table, overlay_table);
            }
            (slot, value) => {
                *slot = value;
            }
        }
    }
}
