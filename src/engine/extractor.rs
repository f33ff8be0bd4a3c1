#![forbid(unsafe_code)]

//! Rule extraction: asking the engine what a config enables per extension
//!
//! For every extension a probe file is materialized in the working directory,
//! the engine is queried about it, and the reported rules are folded into the
//! plugin map of the config being summarized.

use crate::engine::{ProbeFile, RuleEngine};
use crate::error::SummaryError;
use crate::rules::{CORE_PLUGIN, FullRuleName, PluginInfo, PluginMap, parse_full_rule_name};
use crate::types::RuleState;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Extracts effective rules of config files, one extension at a time
pub struct RuleExtractor<E: RuleEngine> {
    engine: E,
    work_dir: PathBuf,
    ignore_plugins: Vec<String>,
}

impl<E: RuleEngine> RuleExtractor<E> {
    /// # Arguments
    ///
    /// * `engine` - Engine evaluating the configs
    /// * `work_dir` - Directory the probe files are created in
    /// * `ignore_plugins` - Plugins to leave out; `eslint` itself is never ignored
    pub fn new(engine: E, work_dir: impl Into<PathBuf>, ignore_plugins: Vec<String>) -> Self {
        Self {
            engine,
            work_dir: work_dir.into(),
            ignore_plugins,
        }
    }

    fn is_ignored(&self, plugin_name: &str) -> bool {
        plugin_name != CORE_PLUGIN && self.ignore_plugins.iter().any(|p| p == plugin_name)
    }

    /// Adds the rules `config_file` enables for `extension` to `plugins`
    ///
    /// # Errors
    ///
    /// Engine failures are returned as-is; the probe file is removed on every path.
    pub fn extract_extension(
        &self,
        config_file: &Path,
        extension: &str,
        plugins: &mut PluginMap,
    ) -> Result<(), SummaryError> {
        let probe = ProbeFile::create(&self.work_dir, extension)
            .map_err(|e| SummaryError::io(self.work_dir.join(ProbeFile::file_name(extension)), e))?;

        let snapshot = self.engine.calculate(config_file, probe.path(), extension)?;

        let probe_path = probe.path().to_path_buf();
        probe.remove().map_err(|e| SummaryError::io(probe_path, e))?;

        let no_meta = Map::new();
        for (full_name, raw_state) in &snapshot.rules {
            let FullRuleName { plugin_name, rule } = parse_full_rule_name(full_name);

            if self.is_ignored(&plugin_name) {
                log::debug!("Skipping {full_name} from ignored plugin {plugin_name}");
                continue;
            }

            let state = RuleState::from_raw(full_name, raw_state)?;

            let plugin = plugins
                .entry(plugin_name)
                .or_insert_with_key(|name| PluginInfo::new(name.clone()));

            if !plugin.has_rule(&rule) {
                let meta = snapshot
                    .meta
                    .get(full_name)
                    .and_then(Value::as_object)
                    .unwrap_or(&no_meta);
                plugin.add_rule(&rule, meta);
            }

            plugin.add_extension(extension, &rule, state)?;
        }

        Ok(())
    }

    /// Collects the rules of `config_file` across `extensions`, in order
    pub fn extract_config(
        &self,
        config_file: &Path,
        extensions: &[String],
    ) -> Result<PluginMap, SummaryError> {
        let mut plugins = PluginMap::new();
        for extension in extensions {
            self.extract_extension(config_file, extension, &mut plugins)?;
        }
        Ok(plugins)
    }
}
