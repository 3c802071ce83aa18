//! Overlay helpers for layered table documents.

use serde_json::Value;

/// Overlay a table document onto the accumulated tables.
///
/// Objects merge key by key; arrays, strings and nulls replace the slot.
pub(super) fn overlay_tables(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                if let Some(existing) = base_map.get_mut(key) {
                    overlay_tables(existing, value);
                } else {
                    base_map.insert(key.clone(), value.clone());
                }
            }
        }
        (slot, replacement) => *slot = replacement.clone(),
    }
}
