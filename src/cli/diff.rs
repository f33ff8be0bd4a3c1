//! Diff command implementation
//!
//! This module implements `eslint-summary diff`, which:
//! - Extracts the effective rules of every configured ESLint config
//! - Flags rules missing from some configs or configured differently
//! - Writes one Markdown document per plugin with flagged rules

use crate::cli::common::{build_summary, current_dir, exit_code};
use crate::error::SummaryError;
use std::path::PathBuf;

/// Run the diff command
///
/// # Returns
///
/// Exit code:
/// - 0: Success, whether or not differences were found
/// - 2: Error
pub fn run_diff(config_name: &str) -> i32 {
    exit_code(run_diff_inner(config_name))
}

fn run_diff_inner(config_name: &str) -> Result<Vec<PathBuf>, SummaryError> {
    let work_dir = current_dir()?;
    build_summary(&work_dir, config_name).diff()
}
