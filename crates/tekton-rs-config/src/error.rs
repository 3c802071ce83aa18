//! Error types for resource decoding and table loading.

use thiserror::Error;

/// Errors returned while decoding a resource or loading validation tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing JSON5 contents failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Converting JSON values into typed models failed.
    #[error("failed to decode config: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// A document has the wrong shape at a specific path.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// Generic loading failure.
    #[error("invalid config: {0}")]
    Invalid(String),
}
