//! Common helper functions shared across CLI commands
//!
//! This module provides configuration loading with its fallback to defaults,
//! construction of the summary pipeline, and the fatal error banner.

use crate::config::{SummaryConfig, discover};
use crate::engine::NodeEngine;
use crate::error::SummaryError;
use crate::summary::Summary;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Version reported in the fatal error banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the summary configuration closest to `work_dir`
///
/// A missing file means defaults. A file that cannot be read or parsed is
/// reported as a warning and defaults apply as well.
pub fn load_config(work_dir: &Path, name: &str) -> SummaryConfig {
    match discover(work_dir, name) {
        Ok(Some((path, config))) => {
            log::debug!("Using configuration {}", path.display());
            config
        }
        Ok(None) => {
            log::warn!("No {name} configuration found, using defaults");
            SummaryConfig::default()
        }
        Err(e) => {
            log::warn!("{e}");
            SummaryConfig::default()
        }
    }
}

pub(crate) fn current_dir() -> Result<PathBuf, SummaryError> {
    std::env::current_dir().map_err(|e| SummaryError::io(".", e))
}

/// Builds the pipeline for `work_dir`, evaluating configs with Node.js
pub fn build_summary(work_dir: &Path, config_name: &str) -> Summary<NodeEngine> {
    let config = load_config(work_dir, config_name);
    let engine = NodeEngine::new(config.node.clone(), work_dir);
    Summary::new(config, work_dir, engine)
}

/// Text printed to stderr when a run fails
pub fn fatal_banner(error: &dyn Display) -> String {
    format!("\nOops! Something went wrong! :(\n\nESLint Summary: {VERSION}\n\n{error}")
}

/// Prints the fatal error banner to stderr
pub fn report_fatal(error: &dyn Display) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = writeln!(stderr, "{}", fatal_banner(error));
    let _ = stderr.reset();
}

/// Routes panics through the fatal error banner and exit code
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        report_fatal(&info.to_string());
        std::process::exit(EXIT_ERROR);
    }));
}

/// Maps a command result to an exit code, reporting failures
pub(crate) fn exit_code<T>(result: Result<T, SummaryError>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            report_fatal(&e);
            EXIT_ERROR
        }
    }
}
