//! IO helpers for reading table documents from disk.

use super::schema;
use crate::ConfigError;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read, parse and shape-check one table document.
pub(super) fn load_table_layer(path: &Path) -> Result<Value, ConfigError> {
    debug!("loading table layer (path={})", path.display());
    let contents = fs::read_to_string(path)?;
    let value: Value = json5::from_str(&contents)?;
    schema::validate_tables_schema(&value, &layer_label(path))?;
    Ok(value)
}

/// Label used to qualify shape errors with their source file.
pub(super) fn layer_label(path: &Path) -> String {
    format!("file({})", path.display())
}
