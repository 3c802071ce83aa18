//! Public surface for TektonConfig admission validation.
//!
//! This crate re-exports the resource model and the validation engine and
//! provides helpers so callers can validate with the built-in tables without
//! wiring a [`Validator`](validation::Validator) themselves.

/// Re-export for convenience.
pub use tekton_rs_config as config;
/// Re-export for convenience.
pub use tekton_rs_validation as validation;

use log::debug;
use std::path::Path;
use std::sync::LazyLock;
use tekton_rs_config::{ConfigError, TektonConfig, ValidationTables};
use tekton_rs_validation::{FieldError, OperationContext, Validator};

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Validate `config` against the built-in tables.
pub fn validate(config: &TektonConfig, operation: OperationContext) -> Result<(), FieldError> {
    DEFAULT_VALIDATOR.validate(config, operation)
}

/// Build a validator from table override files layered over the defaults.
pub fn validator_from_paths<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Validator, ConfigError> {
    let tables = ValidationTables::load_layered(paths)?;
    debug!(
        "validator built with {} profile(s) and {} add-on param(s)",
        tables.profiles.len(),
        tables.addon_params.len()
    );
    Ok(Validator::new(tables))
}

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Callers embedding the
/// validator in a service are still expected to call this early in startup.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
