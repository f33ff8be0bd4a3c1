#![forbid(unsafe_code)]

//! Access to the external rule-evaluation engine (ESLint)
//!
//! The engine is a black box: given a config file and a probe file it reports
//! the effective rule settings and whatever metadata it knows for those rules.

use crate::error::EngineError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Script run by Node.js; uses only ESLint's public API
const BRIDGE_SCRIPT: &str = include_str!("bridge.js");

/// What the engine reports for one probe file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineSnapshot {
    /// Effective settings keyed by full rule name, as `[severity, ...options]`
    #[serde(default)]
    pub rules: Map<String, Value>,

    /// Rule metadata keyed by full rule name; rules without metadata are absent
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// Seam between the summary pipeline and the engine evaluating configs
pub trait RuleEngine {
    /// Computes the effective configuration of `config_file` for `probe_file`
    fn calculate(
        &self,
        config_file: &Path,
        probe_file: &Path,
        extension: &str,
    ) -> Result<EngineSnapshot, EngineError>;
}

impl<E: RuleEngine + ?Sized> RuleEngine for &E {
    fn calculate(
        &self,
        config_file: &Path,
        probe_file: &Path,
        extension: &str,
    ) -> Result<EngineSnapshot, EngineError> {
        (**self).calculate(config_file, probe_file, extension)
    }
}

/// Evaluates configs with the ESLint installed in the project, through Node.js
#[derive(Debug, Clone)]
pub struct NodeEngine {
    node: String,
    work_dir: PathBuf,
}

impl NodeEngine {
    /// # Arguments
    ///
    /// * `node` - Node.js executable
    /// * `work_dir` - Directory ESLint is resolved from
    pub fn new(node: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            node: node.into(),
            work_dir: work_dir.into(),
        }
    }
}

impl RuleEngine for NodeEngine {
    fn calculate(
        &self,
        config_file: &Path,
        probe_file: &Path,
        extension: &str,
    ) -> Result<EngineSnapshot, EngineError> {
        log::debug!(
            "Evaluating {} for {}",
            config_file.display(),
            probe_file.display()
        );

        let output = Command::new(&self.node)
            .arg("-e")
            .arg(BRIDGE_SCRIPT)
            .arg(config_file)
            .arg(probe_file)
            .arg(extension)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| EngineError::Spawn {
                program: self.node.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EngineError::Evaluation {
                config: config_file.to_path_buf(),
                extension: extension.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_snapshot(config_file, &output.stdout)
    }
}

fn parse_snapshot(config_file: &Path, stdout: &[u8]) -> Result<EngineSnapshot, EngineError> {
    serde_json::from_slice(stdout).map_err(|e| EngineError::InvalidOutput {
        config: config_file.to_path_buf(),
        message: e.to_string(),
    })
}
