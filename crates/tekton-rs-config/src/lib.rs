//! TektonConfig resource model and validation tables.
//!
//! This crate owns the resource shape handed to admission, the enumerated
//! value tables the validator checks against, and the JSON5 loaders for both.

mod error;
mod loader;
mod model;
mod tables;

/// Public error type returned by resource decoding and table loading.
pub use error::ConfigError;
/// Resource models.
pub use model::*;
/// Enumerated value tables.
pub use tables::{AddonParamValues, ValidationTables};
