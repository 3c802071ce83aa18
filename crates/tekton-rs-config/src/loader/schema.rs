//! Shape checks for resource and table documents.
//!
//! These run before serde decoding so that a malformed document is reported
//! with the path of the offending entry rather than a generic decode error.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Keys accepted at the root of a table document.
const TABLE_KEYS: &[&str] = &[
    "profiles",
    "prunerResources",
    "apiFieldLevels",
    "addonParams",
    "pipelinerunMetricsLevels",
    "taskrunMetricsLevels",
    "metricsDurationTypes",
];

/// Keys accepted at the root of a resource document.
const RESOURCE_KEYS: &[&str] = &["apiVersion", "kind", "metadata", "spec", "status"];

/// Validate a table override document.
pub(super) fn validate_tables_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    ensure_allowed_keys(map, TABLE_KEYS, layer, "")?;

    for (key, value) in map {
        if key == "addonParams" {
            validate_addon_params(value, layer, key)?;
        } else {
            validate_string_array(value, layer, key)?;
        }
    }
    Ok(())
}

/// Validate the add-on parameter table: name to value list or null.
fn validate_addon_params(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    for (name, values) in map {
        if values.is_null() {
            continue;
        }
        validate_string_array(values, layer, &join_path(path, name))?;
    }
    Ok(())
}

/// Validate the envelope of a resource document.
pub(super) fn validate_resource_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    ensure_allowed_keys(map, RESOURCE_KEYS, layer, "")?;

    if let Some(value) = map.get("metadata") {
        expect_object(value, layer, "metadata")?;
    }
    if let Some(value) = map.get("spec") {
        let spec = expect_object(value, layer, "spec")?;
        if let Some(params) = spec
            .get("addon")
            .and_then(|addon| addon.as_object())
            .and_then(|addon| addon.get("params"))
        {
            expect_array(params, layer, "spec.addon.params")?;
        }
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(layer, path, "expected object")),
    }
}

/// Expect a JSON array or return a typed error.
fn expect_array<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Vec<Value>, ConfigError> {
    match value {
        Value::Array(arr) => Ok(arr),
        _ => Err(invalid_field(layer, path, "expected array")),
    }
}

/// Validate that a value is an array of strings.
fn validate_string_array(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let arr = expect_array(value, layer, path)?;
    for (idx, entry) in arr.iter().enumerate() {
        if entry.as_str().is_none() {
            return Err(invalid_field(
                layer,
                &format!("{path}[{idx}]"),
                "expected string",
            ));
        }
    }
    Ok(())
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    layer: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(layer, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(layer: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{layer}:{normalized_path}"),
        message: message.to_string(),
    }
}
