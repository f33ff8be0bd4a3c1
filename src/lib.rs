#![forbid(unsafe_code)]

//! ESLint Summary: effective ESLint rules per config, rendered as Markdown
//!
//! Each configured ESLint config is evaluated for a list of file extensions.
//! The resulting rules are grouped per plugin and written as a Markdown
//! report, or compared across configs to document where they disagree.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod markdown;
pub mod output;
pub mod rules;
pub mod summary;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, EngineError, RuleError, SummaryError};

// Re-export core domain types for convenient access
pub use config::SummaryConfig;
pub use summary::Summary;
pub use types::{RuleState, Severity};
