//! Report command implementation
//!
//! This module implements `eslint-summary report` (the default command), which:
//! - Loads the summary configuration (defaults when missing or invalid)
//! - Extracts the effective rules of every configured ESLint config
//! - Writes one Markdown report per config (plus JSON when enabled)

use crate::cli::common::{build_summary, current_dir, exit_code};
use crate::error::SummaryError;
use std::path::PathBuf;

/// Run the report command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_report(config_name: &str) -> i32 {
    exit_code(run_report_inner(config_name))
}

fn run_report_inner(config_name: &str) -> Result<Vec<PathBuf>, SummaryError> {
    let work_dir = current_dir()?;
    build_summary(&work_dir, config_name).run()
}
