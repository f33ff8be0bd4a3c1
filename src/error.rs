//! Error types for ESLint Summary
//!
//! This module defines the error types used throughout the crate, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading a configuration file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// JavaScript configuration module could not be evaluated
    #[error("Failed to evaluate {path}: {message}")]
    Evaluation { path: PathBuf, message: String },

    /// Parsed configuration failed validation
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Rule aggregation errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Extension state recorded for a rule that was never added
    #[error("Rule '{rule}' is not registered in plugin '{plugin}'")]
    UnknownRule { plugin: String, rule: String },

    /// The engine returned a severity outside off/warn/error
    #[error("Invalid severity for rule '{rule}': {value}")]
    InvalidSeverity { rule: String, value: String },
}

/// Errors raised while talking to the rule-evaluation engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine process could not be started
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but failed to compute a configuration
    #[error("ESLint failed for {config} (*.{extension}):\n{stderr}")]
    Evaluation {
        config: PathBuf,
        extension: String,
        stderr: String,
    },

    /// The engine produced output that is not a valid snapshot
    #[error("Unexpected ESLint output for {config}: {message}")]
    InvalidOutput { config: PathBuf, message: String },
}

/// Top-level error type for ESLint Summary
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Engine error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Failed to serialize a report
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.into(),
            source,
        }
    }
}
