use tekton_rs_config::{Param, Prune, TektonConfig, TektonConfigSpec};

/// A resource with identity, target namespace and the `all` profile set.
pub fn base_config() -> TektonConfig {
    TektonConfig::builder()
        .metadata("name", "namespace")
        .target_namespace("namespace")
        .profile("all")
        .build()
}

/// `base_config` with its spec adjusted by `edit`.
pub fn config_with_spec(edit: impl FnOnce(&mut TektonConfigSpec)) -> TektonConfig {
    let mut config = base_config();
    edit(&mut config.spec);
    config
}

/// A resource with every section populated with accepted values.
pub fn valid_config() -> TektonConfig {
    config_with_spec(|spec| {
        spec.pruner = pruner(&["taskrun", "pipelinerun"], Some(3), None, "0 8 * * *");
        spec.addon.params = vec![
            Param::new("clusterTasks", "true"),
            Param::new("pipelineTemplates", "false"),
        ];
        spec.pipeline.properties.enable_api_fields = "beta".to_string();
        spec.pipeline.properties.default_timeout_minutes = Some(60);
        spec.trigger.properties.enable_api_fields = "stable".to_string();
    })
}

pub fn pruner(
    resources: &[&str],
    keep: Option<u32>,
    keep_since: Option<u32>,
    schedule: &str,
) -> Prune {
    Prune {
        disabled: false,
        keep,
        keep_since,
        resources: resources.iter().map(|resource| resource.to_string()).collect(),
        schedule: schedule.to_string(),
    }
}
