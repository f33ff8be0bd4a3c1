//! Test utilities for eslint-summary integration tests

#![allow(dead_code)]

use eslint_summary::EngineError;
use eslint_summary::SummaryConfig;
use eslint_summary::engine::{EngineSnapshot, RuleEngine};
use serde_json::Value;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Engine answering from canned snapshots keyed by config path suffix and extension
///
/// Configs without a canned answer fail like ESLint does on a broken config.
#[derive(Default)]
pub struct FakeEngine {
    responses: Vec<(PathBuf, String, Value)>,
    calls: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, config: &str, extension: &str, snapshot: Value) -> Self {
        self.responses
            .push((PathBuf::from(config), extension.to_string(), snapshot));
        self
    }

    /// Probe files seen by the engine, with the extension asked about
    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.borrow().clone()
    }
}

impl RuleEngine for FakeEngine {
    fn calculate(
        &self,
        config_file: &Path,
        probe_file: &Path,
        extension: &str,
    ) -> Result<EngineSnapshot, EngineError> {
        assert!(
            probe_file.is_file(),
            "probe file {} must exist while the engine runs",
            probe_file.display()
        );
        self.calls
            .borrow_mut()
            .push((probe_file.to_path_buf(), extension.to_string()));

        let snapshot = self
            .responses
            .iter()
            .find(|(config, ext, _)| config_file.ends_with(config) && ext == extension)
            .map(|(_, _, snapshot)| snapshot.clone())
            .ok_or_else(|| EngineError::Evaluation {
                config: config_file.to_path_buf(),
                extension: extension.to_string(),
                stderr: "Error: Cannot read config file".to_string(),
            })?;

        serde_json::from_value(snapshot).map_err(|e| EngineError::InvalidOutput {
            config: config_file.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Summary configuration for the given configs and extensions, other fields default
pub fn summary_config(configs: &[&str], extensions: &[&str]) -> SummaryConfig {
    SummaryConfig {
        configs: configs.iter().map(|c| c.to_string()).collect(),
        extensions: extensions.iter().map(|e| e.to_string()).collect(),
        ..SummaryConfig::default()
    }
}

/// Files left behind in `dir` that look like probe files
pub fn leftover_probe_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(".__sample-file."))
                })
                .collect()
        })
        .unwrap_or_default()
}
