//! JSON5 loaders for resources and validation tables.
//!
//! Resources are decoded as-is, with no defaulting. Table documents are
//! shape-checked and layered over the built-in `ValidationTables` defaults in
//! the order given, so later documents win.

mod layer_io;
mod merge;
mod schema;
mod utils;

#[cfg(test)]
mod tests;

use crate::{ConfigError, TektonConfig, ValidationTables};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

impl TektonConfig {
    /// Decode a resource from a JSON or JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading resource from path: {}", path.display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        resource_from_value(value, &layer_io::layer_label(path))
    }

    /// Decode a resource from JSON or JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading resource from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        resource_from_value(value, "resource")
    }
}

impl ValidationTables {
    /// Load tables from a single override document on top of the defaults.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading tables from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        schema::validate_tables_schema(&value, "tables")?;
        tables_from_layers(vec![value])
    }

    /// Load tables from a single override file on top of the defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_layered([path])
    }

    /// Load tables from several override files, applied in order.
    ///
    /// A path listed twice is only applied the first time.
    pub fn load_layered<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Self, ConfigError> {
        let mut seen_paths = HashSet::new();
        let mut layers = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if !seen_paths.insert(utils::unique_path(path)) {
                debug!("skipping duplicate table layer (path={})", path.display());
                continue;
            }
            layers.push(layer_io::load_table_layer(path)?);
        }
        let tables = tables_from_layers(layers)?;
        info!("validation tables loaded (layers={})", seen_paths.len());
        Ok(tables)
    }
}

fn resource_from_value(value: Value, label: &str) -> Result<TektonConfig, ConfigError> {
    schema::validate_resource_schema(&value, label)?;
    let config: TektonConfig = serde_json::from_value(value)?;
    Ok(config)
}

fn tables_from_layers(layers: Vec<Value>) -> Result<ValidationTables, ConfigError> {
    let mut merged = serde_json::to_value(ValidationTables::default())?;
    for layer in &layers {
        merge::overlay_tables(&mut merged, layer);
    }
    let tables: ValidationTables = serde_json::from_value(merged)?;
    if tables.profiles.is_empty() {
        return Err(ConfigError::Invalid(
            "tables must allow at least one profile".to_string(),
        ));
    }
    Ok(tables)
}
