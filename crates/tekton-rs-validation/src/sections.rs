//! Per-section validators.
//!
//! Rule order inside a section fixes the line order of its report.

use crate::rules::{
    Presence, enum_value, exactly_one_of, key_whitelist, required_field, value_whitelist,
};
use crate::{FieldError, FieldPath};
use log::debug;
use tekton_rs_config::{
    Addon, CommonSpec, PipelineProperties, Prune, TriggersProperties, ValidationTables,
};

pub(crate) fn validate_common(common: &CommonSpec, spec: &FieldPath) -> FieldError {
    required_field(&common.target_namespace, spec.field("targetNamespace"))
}

pub(crate) fn validate_profile(
    profile: &str,
    tables: &ValidationTables,
    spec: &FieldPath,
) -> FieldError {
    enum_value(profile, &tables.profiles, spec.field("profile"))
}

/// Keep/keep-since exclusivity, then resource types, then schedule.
///
/// Skipped entirely when pruning is disabled or nothing was configured.
pub(crate) fn validate_pruner(
    pruner: &Prune,
    tables: &ValidationTables,
    spec: &FieldPath,
) -> FieldError {
    if pruner.disabled {
        debug!("pruner disabled; skipping pruner checks");
        return FieldError::default();
    }
    if pruner.is_default() {
        return FieldError::default();
    }

    let path = spec.field("pruner");
    let retention = exactly_one_of([
        (pruner.keep.is_present(), path.field("keep")),
        (pruner.keep_since.is_present(), path.field("keep-since")),
    ]);

    let resources_path = path.field("resources");
    let resources = pruner
        .resources
        .iter()
        .enumerate()
        .map(|(idx, resource)| {
            enum_value(resource, &tables.pruner_resources, resources_path.index(idx))
        })
        .collect::<FieldError>();

    retention
        .merge(resources)
        .merge(required_field(&pruner.schedule, path.field("schedule")))
}

/// Param names must be recognized; values of recognized names must be allowed.
pub(crate) fn validate_addon(
    addon: &Addon,
    tables: &ValidationTables,
    spec: &FieldPath,
) -> FieldError {
    let params_path = spec.field("addon").field("params");
    addon
        .params
        .iter()
        .map(|param| {
            let key = key_whitelist(&param.name, tables.addon_params.keys(), params_path.clone());
            if !key.is_empty() {
                return key;
            }
            value_whitelist(
                &param.name,
                &param.value,
                tables.addon_param_values(&param.name),
                &params_path,
            )
        })
        .collect()
}

pub(crate) fn validate_pipeline(
    properties: &PipelineProperties,
    tables: &ValidationTables,
    spec: &FieldPath,
) -> FieldError {
    let path = spec.field("pipeline");
    let timeout = match properties.default_timeout_minutes {
        Some(0) => FieldError::invalid_value(0, path.field("default-timeout-minutes")),
        _ => FieldError::default(),
    };

    [
        enum_value(
            &properties.enable_api_fields,
            &tables.api_field_levels,
            path.field("enable-api-fields"),
        ),
        timeout,
        enum_value(
            &properties.metrics_pipelinerun_level,
            &tables.pipelinerun_metrics_levels,
            path.field("metrics.pipelinerun.level"),
        ),
        enum_value(
            &properties.metrics_taskrun_level,
            &tables.taskrun_metrics_levels,
            path.field("metrics.taskrun.level"),
        ),
        enum_value(
            &properties.metrics_pipelinerun_duration_type,
            &tables.metrics_duration_types,
            path.field("metrics.pipelinerun.duration-type"),
        ),
        enum_value(
            &properties.metrics_taskrun_duration_type,
            &tables.metrics_duration_types,
            path.field("metrics.taskrun.duration-type"),
        ),
    ]
    .into_iter()
    .collect()
}

pub(crate) fn validate_trigger(
    properties: &TriggersProperties,
    tables: &ValidationTables,
    spec: &FieldPath,
) -> FieldError {
    enum_value(
        &properties.enable_api_fields,
        &tables.api_field_levels,
        spec.field("trigger").field("enable-api-fields"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tekton_rs_config::Param;

    fn spec() -> FieldPath {
        FieldPath::new("spec")
    }

    #[test]
    fn pruner_with_nothing_configured_passes() {
        let report = validate_pruner(&Prune::default(), &ValidationTables::default(), &spec());
        assert!(report.is_empty());
    }

    #[test]
    fn disabled_pruner_is_not_checked() {
        let pruner = Prune {
            disabled: true,
            resources: vec!["task".to_string()],
            ..Prune::default()
        };
        assert!(validate_pruner(&pruner, &ValidationTables::default(), &spec()).is_empty());
    }

    #[test]
    fn schedule_alone_still_needs_retention() {
        let pruner = Prune {
            schedule: "*/5 * * * *".to_string(),
            ..Prune::default()
        };
        assert_eq!(
            validate_pruner(&pruner, &ValidationTables::default(), &spec()).render(),
            "expected exactly one, got neither: spec.pruner.keep, spec.pruner.keep-since"
        );
    }

    #[test]
    fn both_retention_fields_are_rejected() {
        let pruner = Prune {
            keep: Some(3),
            keep_since: Some(60),
            schedule: "0 * * * *".to_string(),
            ..Prune::default()
        };
        assert_eq!(
            validate_pruner(&pruner, &ValidationTables::default(), &spec()).render(),
            "expected exactly one, got both: spec.pruner.keep, spec.pruner.keep-since"
        );
    }

    #[test]
    fn zero_keep_counts_as_set() {
        let pruner = Prune {
            keep: Some(0),
            schedule: "0 * * * *".to_string(),
            ..Prune::default()
        };
        assert!(validate_pruner(&pruner, &ValidationTables::default(), &spec()).is_empty());
    }

    #[test]
    fn each_bad_resource_gets_its_own_index() {
        let pruner = Prune {
            keep: Some(1),
            resources: vec![
                "taskrun".to_string(),
                "task".to_string(),
                "pipeline".to_string(),
            ],
            schedule: "0 * * * *".to_string(),
            ..Prune::default()
        };
        assert_eq!(
            validate_pruner(&pruner, &ValidationTables::default(), &spec()).render(),
            "invalid value: task: spec.pruner.resources[1]\n\
             invalid value: pipeline: spec.pruner.resources[2]"
        );
    }

    #[test]
    fn unknown_params_skip_value_checks() {
        let addon = Addon {
            params: vec![
                Param::new("unknown", "whatever"),
                Param::new("clusterTasks", "maybe"),
                Param::new("other", "x"),
            ],
        };
        assert_eq!(
            validate_addon(&addon, &ValidationTables::default(), &spec()).render(),
            "invalid key name \"unknown\": spec.addon.params\n\
             invalid value: maybe: spec.addon.params.clusterTasks[0]\n\
             invalid key name \"other\": spec.addon.params"
        );
    }

    #[test]
    fn unrestricted_param_accepts_any_value() {
        let tables = ValidationTables::default().with_addon_param("bundleRef", None);
        let addon = Addon {
            params: vec![Param::new("bundleRef", "a,b,c")],
        };
        assert!(validate_addon(&addon, &tables, &spec()).is_empty());
    }

    #[test]
    fn pipeline_checks_run_in_field_order() {
        let properties = PipelineProperties {
            enable_api_fields: "test".to_string(),
            default_timeout_minutes: Some(0),
            metrics_taskrun_level: "run".to_string(),
            metrics_pipelinerun_duration_type: "summary".to_string(),
            ..PipelineProperties::default()
        };
        assert_eq!(
            validate_pipeline(&properties, &ValidationTables::default(), &spec()).render(),
            "invalid value: test: spec.pipeline.enable-api-fields\n\
             invalid value: 0: spec.pipeline.default-timeout-minutes\n\
             invalid value: run: spec.pipeline.metrics.taskrun.level\n\
             invalid value: summary: spec.pipeline.metrics.pipelinerun.duration-type"
        );
    }

    #[test]
    fn valid_pipeline_metrics_pass() {
        let properties = PipelineProperties {
            enable_api_fields: "stable".to_string(),
            default_timeout_minutes: Some(60),
            metrics_pipelinerun_level: "pipeline".to_string(),
            metrics_taskrun_level: "namespace".to_string(),
            metrics_pipelinerun_duration_type: "histogram".to_string(),
            metrics_taskrun_duration_type: "lastvalue".to_string(),
        };
        assert!(validate_pipeline(&properties, &ValidationTables::default(), &spec()).is_empty());
    }
}
