//! Error types for the KubeMon CLI surface.
//!
//! The reconciliation and normalization core never fails; these errors only
//! cover reading payloads, decoding JSON, and loading configuration.

use thiserror::Error;

/// Top-level error for everything outside the pure analysis core.
#[derive(Debug, Error)]
pub enum KubemonError {
    /// Reading a payload file or stdin failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload is not valid JSON or has the wrong top-level shape
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command-line value was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while loading or saving `.kubemon.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ParsingFailed(String),

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Config file already exists at {0} (use --force to overwrite)")]
    AlreadyExists(String),
}

/// Result type alias for KubeMon operations
pub type Result<T> = std::result::Result<T, KubemonError>;
