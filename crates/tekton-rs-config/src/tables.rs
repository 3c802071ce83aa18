//! Closed value sets checked during admission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allowed values for a recognized add-on parameter. `None` accepts any value.
pub type AddonParamValues = Option<Vec<String>>;

/// Enumerated sets consulted by the validator.
///
/// Built-in defaults cover the supported operator release; deployments may
/// extend or narrow them through table documents (see the loader).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationTables {
    pub profiles: Vec<String>,
    pub pruner_resources: Vec<String>,
    pub api_field_levels: Vec<String>,
    pub addon_params: BTreeMap<String, AddonParamValues>,
    pub pipelinerun_metrics_levels: Vec<String>,
    pub taskrun_metrics_levels: Vec<String>,
    pub metrics_duration_types: Vec<String>,
}

impl Default for ValidationTables {
    fn default() -> Self {
        let boolean = || Some(strings(&["true", "false"]));
        let addon_params = [
            "clusterTasks",
            "pipelineTemplates",
            "communityClusterTasks",
            "resolverTasks",
            "resolverStepActions",
            "pipelinesAsCode",
        ]
        .into_iter()
        .map(|name| (name.to_string(), boolean()))
        .collect();

        Self {
            profiles: strings(&["lite", "basic", "all"]),
            pruner_resources: strings(&["taskrun", "pipelinerun"]),
            api_field_levels: strings(&["alpha", "beta", "stable"]),
            addon_params,
            pipelinerun_metrics_levels: strings(&["pipelinerun", "pipeline", "namespace"]),
            taskrun_metrics_levels: strings(&["taskrun", "task", "namespace"]),
            metrics_duration_types: strings(&["histogram", "lastvalue"]),
        }
    }
}

impl ValidationTables {
    /// Whether `name` is a recognized add-on parameter.
    pub fn is_known_addon_param(&self, name: &str) -> bool {
        self.addon_params.contains_key(name)
    }

    /// Allowed values for a recognized add-on parameter, if it restricts them.
    pub fn addon_param_values(&self, name: &str) -> Option<&[String]> {
        self.addon_params
            .get(name)
            .and_then(|values| values.as_deref())
    }

    /// Register (or replace) an add-on parameter and its allowed values.
    pub fn with_addon_param(mut self, name: impl Into<String>, values: Option<&[&str]>) -> Self {
        self.addon_params
            .insert(name.into(), values.map(strings));
        self
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
