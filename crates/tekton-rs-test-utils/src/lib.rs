//! Test helpers shared across the validation crates.

pub mod resources;

pub use resources::{base_config, config_with_spec, pruner, valid_config};
