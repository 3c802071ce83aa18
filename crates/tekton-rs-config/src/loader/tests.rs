//! Tests for resource decoding and table loading.

use super::*;
use crate::{Param, Prune};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_json5(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

#[test]
fn parse_empty_resource() {
    let config = TektonConfig::load_from_str("{}").expect("config");
    assert_eq!(config, TektonConfig::default());
    assert!(config.spec.pruner.is_default());
}

/// Wire names use camelCase for the common spec and kebab-case elsewhere.
#[test]
fn parse_resource_wire_names() {
    let json5 = r#"{
        apiVersion: "operator.tekton.dev/v1alpha1",
        kind: "TektonConfig",
        metadata: { name: "config", namespace: "tekton" },
        spec: {
            targetNamespace: "tekton-pipelines",
            profile: "all",
            pruner: { "keep-since": 60, resources: ["taskrun"], schedule: "0 8 * * *" },
            addon: { params: [{ name: "clusterTasks", value: "true" }] },
            pipeline: { "enable-api-fields": "beta", "metrics.taskrun.level": "task" },
            trigger: { "enable-api-fields": "stable" },
        },
    }"#;
    let config = TektonConfig::load_from_str(json5).expect("config");

    assert_eq!(config.metadata.name, "config");
    assert_eq!(config.spec.common.target_namespace, "tekton-pipelines");
    assert_eq!(
        config.spec.pruner,
        Prune {
            keep_since: Some(60),
            resources: vec!["taskrun".to_string()],
            schedule: "0 8 * * *".to_string(),
            ..Prune::default()
        }
    );
    assert_eq!(
        config.spec.addon.params,
        vec![Param::new("clusterTasks", "true")]
    );
    assert_eq!(config.spec.pipeline.properties.enable_api_fields, "beta");
    assert_eq!(config.spec.pipeline.properties.metrics_taskrun_level, "task");
    assert_eq!(config.spec.trigger.properties.enable_api_fields, "stable");
}

#[test]
fn rejects_unknown_resource_root_key() {
    let err = TektonConfig::load_from_str(r#"{ unexpected: true }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid config at resource:unexpected: unknown key"
    );
}

#[test]
fn rejects_non_array_addon_params() {
    let json5 = r#"{ spec: { addon: { params: "clusterTasks=true" } } }"#;
    let err = TektonConfig::load_from_str(json5).unwrap_err();
    assert!(err.to_string().contains("spec.addon.params"));
}

#[test]
fn negative_keep_fails_to_decode() {
    let json5 = r#"{ spec: { pruner: { keep: -1 } } }"#;
    let err = TektonConfig::load_from_str(json5).unwrap_err();
    assert!(matches!(err, ConfigError::DecodeFailed(_)));
}

#[test]
fn load_resource_from_path() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("tektonconfig.json5");
    write_json5(&path, r#"{ spec: { targetNamespace: "tekton", profile: "lite" } }"#);

    let config = TektonConfig::load_from_path(&path).expect("config");
    assert_eq!(config.spec.common.target_namespace, "tekton");
    assert_eq!(config.spec.profile, "lite");
}

#[test]
fn missing_resource_file_is_read_error() {
    let temp = TempDir::new().expect("tmp");
    let err = TektonConfig::load_from_path(temp.path().join("absent.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed(_)));
}

#[test]
fn empty_table_document_keeps_defaults() {
    let tables = ValidationTables::load_from_str("{}").expect("tables");
    assert_eq!(tables, ValidationTables::default());
}

/// Arrays replace the defaults; the add-on map merges entry by entry.
#[test]
fn table_override_replaces_sets_and_merges_params() {
    let json5 = r#"{
        profiles: ["all"],
        addonParams: { bundleRef: null, clusterTasks: ["false"] },
    }"#;
    let tables = ValidationTables::load_from_str(json5).expect("tables");

    assert_eq!(tables.profiles, vec!["all".to_string()]);
    assert!(tables.is_known_addon_param("bundleRef"));
    assert_eq!(tables.addon_param_values("bundleRef"), None);
    assert_eq!(
        tables.addon_param_values("clusterTasks"),
        Some(&["false".to_string()][..])
    );
    assert!(tables.is_known_addon_param("pipelineTemplates"));
    assert_eq!(
        tables.pruner_resources,
        ValidationTables::default().pruner_resources
    );
}

#[test]
fn layered_tables_prefer_later_layers() {
    let temp = TempDir::new().expect("tmp");
    let base = temp.path().join("base.json5");
    let site = temp.path().join("site.json5");
    write_json5(&base, r#"{ apiFieldLevels: ["stable"], profiles: ["lite"] }"#);
    write_json5(&site, r#"{ apiFieldLevels: ["alpha", "stable"] }"#);

    let tables = ValidationTables::load_layered([&base, &site]).expect("tables");
    assert_eq!(
        tables.api_field_levels,
        vec!["alpha".to_string(), "stable".to_string()]
    );
    assert_eq!(tables.profiles, vec!["lite".to_string()]);
}

#[test]
fn layered_tables_apply_duplicate_path_once() {
    let temp = TempDir::new().expect("tmp");
    let first = temp.path().join("first.json5");
    let second = temp.path().join("second.json5");
    write_json5(&first, r#"{ profiles: ["lite"] }"#);
    write_json5(&second, r#"{ profiles: ["basic"] }"#);

    let tables = ValidationTables::load_layered([&first, &second, &first]).expect("tables");
    assert_eq!(tables.profiles, vec!["basic".to_string()]);
}

#[test]
fn table_file_errors_name_the_file() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("tables.json5");
    write_json5(&path, r#"{ profiles: ["all", 3] }"#);

    let err = ValidationTables::load_from_path(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("tables.json5"));
    assert!(msg.contains("profiles[1]: expected string"));
}

#[test]
fn rejects_unknown_table_key() {
    let err = ValidationTables::load_from_str(r#"{ profile: ["all"] }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid config at tables:profile: unknown key"
    );
}

#[test]
fn rejects_non_list_param_values() {
    let err =
        ValidationTables::load_from_str(r#"{ addonParams: { clusterTasks: "true" } }"#)
            .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid config at tables:addonParams.clusterTasks: expected array"
    );
}

#[test]
fn rejects_empty_profile_table() {
    let err = ValidationTables::load_from_str(r#"{ profiles: [] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
