//! Top-level admission entry point.

use crate::sections;
use crate::{FieldError, FieldPath};
use log::{debug, info};
use tekton_rs_config::{TektonConfig, ValidationTables};

/// The kind of request being admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationContext {
    #[default]
    Create,
    Update,
    /// Deletes are always admitted so stored resources can be removed
    /// even if they no longer validate.
    Delete,
}

impl OperationContext {
    pub fn is_delete(self) -> bool {
        matches!(self, OperationContext::Delete)
    }
}

/// Validates TektonConfig resources against a set of tables.
///
/// Holds no per-call state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    tables: ValidationTables,
}

impl Validator {
    pub fn new(tables: ValidationTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ValidationTables {
        &self.tables
    }

    /// Validate `config` for the given operation.
    ///
    /// Every section runs and all failures are merged, so the error lists
    /// every problem at once. Sections run in a fixed order: target
    /// namespace, profile, pruner, add-on params, pipeline, trigger.
    pub fn validate(
        &self,
        config: &TektonConfig,
        operation: OperationContext,
    ) -> Result<(), FieldError> {
        if operation.is_delete() {
            debug!(
                "skipping validation for delete of {}/{}",
                config.metadata.namespace, config.metadata.name
            );
            return Ok(());
        }

        let report = self.report(config);
        if !report.is_empty() {
            info!(
                "rejected TektonConfig {}/{} ({} problem(s))",
                config.metadata.namespace,
                config.metadata.name,
                report.len()
            );
        }
        report.into_result()
    }

    fn report(&self, config: &TektonConfig) -> FieldError {
        let spec_path = FieldPath::new("spec");
        let spec = &config.spec;
        [
            sections::validate_common(&spec.common, &spec_path),
            sections::validate_profile(&spec.profile, &self.tables, &spec_path),
            sections::validate_pruner(&spec.pruner, &self.tables, &spec_path),
            sections::validate_addon(&spec.addon, &self.tables, &spec_path),
            sections::validate_pipeline(&spec.pipeline.properties, &self.tables, &spec_path),
            sections::validate_trigger(&spec.trigger.properties, &self.tables, &spec_path),
        ]
        .into_iter()
        .collect()
    }
}

/// Resources that can be admitted by a [`Validator`].
pub trait Validate {
    fn validate(
        &self,
        validator: &Validator,
        operation: OperationContext,
    ) -> Result<(), FieldError>;
}

impl Validate for TektonConfig {
    fn validate(
        &self,
        validator: &Validator,
        operation: OperationContext,
    ) -> Result<(), FieldError> {
        validator.validate(self, operation)
    }
}
