//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod diff;
pub mod report;

// Re-export types for convenient access
pub use args::{Cli, Command};
