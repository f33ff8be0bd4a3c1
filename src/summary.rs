#![forbid(unsafe_code)]

//! Orchestration of extraction, rendering and writing
//!
//! Configs are processed one at a time, extensions one at a time within a
//! config, in the order the configuration lists them. The first failure stops
//! the run.

use crate::config::SummaryConfig;
use crate::engine::{RuleEngine, RuleExtractor};
use crate::error::{ConfigError, SummaryError};
use crate::output::{self, ConfigSnapshot};
use std::path::{Path, PathBuf};

/// Summarizes the ESLint configs named by a [`SummaryConfig`]
pub struct Summary<E: RuleEngine> {
    config: SummaryConfig,
    work_dir: PathBuf,
    extractor: RuleExtractor<E>,
}

impl<E: RuleEngine> Summary<E> {
    /// # Arguments
    ///
    /// * `config` - What to summarize and where to write it
    /// * `work_dir` - Directory configs and outputs are resolved against
    /// * `engine` - Engine evaluating the configs
    pub fn new(config: SummaryConfig, work_dir: impl Into<PathBuf>, engine: E) -> Self {
        let work_dir = work_dir.into();
        let extractor =
            RuleExtractor::new(engine, work_dir.clone(), config.ignore_plugins.clone());
        Self {
            config,
            work_dir,
            extractor,
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Extracts the rules of one config across all configured extensions
    pub fn collect(&self, config: &str) -> Result<ConfigSnapshot, SummaryError> {
        let config_path = self.work_dir.join(config);
        let name = output::config_name(Path::new(config), &self.work_dir);

        log::debug!("Collecting rules of {}", config_path.display());
        let plugins = self
            .extractor
            .extract_config(&config_path, &self.config.extensions)?;

        Ok(ConfigSnapshot { name, plugins })
    }

    /// Writes one report per config and returns the written files
    pub fn run(&self) -> Result<Vec<PathBuf>, SummaryError> {
        let output_dir = self.work_dir.join(&self.config.output);
        let mut written = Vec::new();

        for config in &self.config.configs {
            let snapshot = self.collect(config)?;

            if self.config.generate_json {
                written.push(output::write_json_report(
                    &output_dir,
                    &snapshot.name,
                    &snapshot.plugins,
                )?);
            }

            let markdown = output::create_markdown(&snapshot.plugins);
            written.push(output::write_report(&output_dir, &snapshot.name, &markdown)?);

            log::info!("Doc created for {} in {}", snapshot.name, output_dir.display());
        }

        Ok(written)
    }

    /// Compares all configs and writes one document per plugin with differences
    pub fn diff(&self) -> Result<Vec<PathBuf>, SummaryError> {
        if self.config.configs.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "configs".to_string(),
                message: "at least two configs are needed to compare".to_string(),
            }
            .into());
        }

        let snapshots = self
            .config
            .configs
            .iter()
            .map(|config| self.collect(config))
            .collect::<Result<Vec<_>, _>>()?;

        let config_names: Vec<String> = snapshots.iter().map(|s| s.name.clone()).collect();
        let merged = output::merge_configs(&snapshots);
        let diff = output::find_differences(&merged, snapshots.len());

        let diff_dir = self.work_dir.join(&self.config.diff_output);
        let mut written = Vec::new();
        for plugin_diff in output::create_diff_markdown(&diff, &config_names) {
            let path = output::write_plugin_diff(&diff_dir, &plugin_diff)?;
            log::info!(
                "Diff created for {} in {}",
                plugin_diff.plugin_name,
                diff_dir.display()
            );
            written.push(path);
        }

        if written.is_empty() {
            log::info!("No differences between {}", config_names.join(", "));
        }

        Ok(written)
    }
}
