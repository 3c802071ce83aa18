//! Resource schema for TektonConfig.

use serde::{Deserialize, Serialize};

/// A TektonConfig resource as handed to admission.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TektonConfig {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: TektonConfigSpec,
}

impl TektonConfig {
    /// Start building a resource programmatically.
    pub fn builder() -> TektonConfigBuilder {
        TektonConfigBuilder::new()
    }
}

/// Resource identity. Never validated here.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

/// Desired state of a TektonConfig.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TektonConfigSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub pruner: Prune,
    #[serde(default)]
    pub addon: Addon,
    #[serde(default)]
    pub pipeline: Pipeline,
    #[serde(default)]
    pub trigger: Trigger,
}

/// Fields shared by every component spec.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommonSpec {
    #[serde(default, rename = "targetNamespace")]
    pub target_namespace: String,
}

/// Pruning policy for completed runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Prune {
    /// Turns pruning off entirely; the remaining fields are ignored.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<u32>,
    #[serde(
        default,
        rename = "keep-since",
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_since: Option<u32>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub schedule: String,
}

impl Prune {
    /// True when none of the pruning fields were supplied.
    pub fn is_default(&self) -> bool {
        self.keep.is_none()
            && self.keep_since.is_none()
            && self.resources.is_empty()
            && self.schedule.is_empty()
    }
}

/// Add-on installation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Addon {
    #[serde(default)]
    pub params: Vec<Param>,
}

/// A single named add-on parameter.
///
/// `value` may carry several comma-delimited entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Pipelines component configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Pipeline {
    #[serde(flatten)]
    pub properties: PipelineProperties,
}

/// Feature flags and defaults for the pipelines controller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipelineProperties {
    #[serde(default, rename = "enable-api-fields")]
    pub enable_api_fields: String,
    #[serde(
        default,
        rename = "default-timeout-minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_timeout_minutes: Option<u32>,
    #[serde(default, rename = "metrics.pipelinerun.level")]
    pub metrics_pipelinerun_level: String,
    #[serde(default, rename = "metrics.taskrun.level")]
    pub metrics_taskrun_level: String,
    #[serde(default, rename = "metrics.pipelinerun.duration-type")]
    pub metrics_pipelinerun_duration_type: String,
    #[serde(default, rename = "metrics.taskrun.duration-type")]
    pub metrics_taskrun_duration_type: String,
}

/// Triggers component configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Trigger {
    #[serde(flatten)]
    pub properties: TriggersProperties,
}

/// Feature flags for the triggers controller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TriggersProperties {
    #[serde(default, rename = "enable-api-fields")]
    pub enable_api_fields: String,
}

/// Builder for assembling a `TektonConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct TektonConfigBuilder {
    config: TektonConfig,
}

impl TektonConfigBuilder {
    /// Create a new builder seeded with an empty resource.
    pub fn new() -> Self {
        Self {
            config: TektonConfig::default(),
        }
    }

    /// Set the resource name and namespace.
    pub fn metadata(mut self, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.config.metadata = ObjectMeta {
            name: name.into(),
            namespace: namespace.into(),
        };
        self
    }

    /// Set the namespace components are installed into.
    pub fn target_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.spec.common.target_namespace = namespace.into();
        self
    }

    /// Set the installation profile.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config.spec.profile = profile.into();
        self
    }

    /// Replace the pruner configuration.
    pub fn pruner(mut self, pruner: Prune) -> Self {
        self.config.spec.pruner = pruner;
        self
    }

    /// Append one add-on parameter.
    pub fn addon_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.spec.addon.params.push(Param::new(name, value));
        self
    }

    /// Replace the pipelines configuration.
    pub fn pipeline(mut self, properties: PipelineProperties) -> Self {
        self.config.spec.pipeline = Pipeline { properties };
        self
    }

    /// Replace the triggers configuration.
    pub fn trigger(mut self, properties: TriggersProperties) -> Self {
        self.config.spec.trigger = Trigger { properties };
        self
    }

    /// Finalize and return the built `TektonConfig`.
    pub fn build(self) -> TektonConfig {
        self.config
    }
}
