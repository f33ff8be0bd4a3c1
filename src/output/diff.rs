#![forbid(unsafe_code)]

//! Cross-config comparison of rule states
//!
//! Rules of every compared config are merged by plugin and rule name. A rule
//! is reported when some config does not enable it, or when its per-extension
//! state differs from the first config's.

use crate::markdown::{Column, Markdown, Row, escape_pipes};
use crate::output::report::prepare_description;
use crate::rules::PluginMap;
use crate::types::RuleState;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Rules extracted from one named config
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub name: String,
    pub plugins: PluginMap,
}

/// Per-extension state of a rule in one config
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigState {
    /// Position of the config in the compared set
    pub index: usize,
    pub config_name: String,
    pub states: BTreeMap<String, RuleState>,
}

impl ConfigState {
    /// Compact JSON of the states keyed by extension
    pub fn states_json(&self) -> String {
        let entries: Vec<String> = self
            .states
            .iter()
            .map(|(ext, state)| format!("{}:{state}", Value::String(ext.clone())))
            .collect();
        format!("{{{}}}", entries.join(","))
    }
}

/// A rule with its state in every config that enables it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossConfigEntry {
    pub rule_name: String,
    pub url: String,
    pub description: Option<String>,
    pub configs: Vec<ConfigState>,
}

/// Merged entries keyed by plugin name, then rule name
pub type MergedRules = BTreeMap<String, BTreeMap<String, CrossConfigEntry>>;

/// Why a rule shows up in the diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffCause {
    MissingInSomeConfigs,
    StateMismatch,
}

impl fmt::Display for DiffCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffCause::MissingInSomeConfigs => f.write_str("missing in some configs"),
            DiffCause::StateMismatch => f.write_str("not equal settings"),
        }
    }
}

/// A rule that is missing from, or configured differently across, the compared configs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRecord {
    pub rule_name: String,
    pub url: String,
    pub description: Option<String>,
    pub cause: DiffCause,
    pub configs: Vec<ConfigState>,
}

/// Flagged rules keyed by plugin name
pub type DiffByPlugin = BTreeMap<String, Vec<DiffRecord>>;

/// Diff document of one plugin
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDiff {
    pub plugin_name: String,
    pub markdown: String,
}

/// Merges the rules of all configs, preserving config order per rule
pub fn merge_configs(configs: &[ConfigSnapshot]) -> MergedRules {
    let mut merged = MergedRules::new();

    for (index, config) in configs.iter().enumerate() {
        for (plugin_name, plugin) in &config.plugins {
            let rules = merged.entry(plugin_name.clone()).or_default();

            for (rule_name, rule) in plugin.rules() {
                let entry = rules
                    .entry(rule_name.clone())
                    .or_insert_with(|| CrossConfigEntry {
                        rule_name: rule_name.clone(),
                        url: rule.url().to_string(),
                        description: rule.description().map(str::to_string),
                        configs: Vec::new(),
                    });

                entry.configs.push(ConfigState {
                    index,
                    config_name: config.name.clone(),
                    states: rule.extensions().clone(),
                });
            }
        }
    }

    merged
}

/// Picks the rules that are not enabled everywhere or not configured alike
///
/// The first config enabling a rule is the baseline; one record at most is
/// produced per rule. Plugins without flagged rules are left out.
pub fn find_differences(merged: &MergedRules, config_count: usize) -> DiffByPlugin {
    let mut diff = DiffByPlugin::new();

    for (plugin_name, rules) in merged {
        let records: Vec<DiffRecord> = rules
            .values()
            .filter_map(|entry| {
                let cause = diff_cause(entry, config_count)?;
                Some(DiffRecord {
                    rule_name: entry.rule_name.clone(),
                    url: entry.url.clone(),
                    description: entry.description.clone(),
                    cause,
                    configs: entry.configs.clone(),
                })
            })
            .collect();

        if !records.is_empty() {
            diff.insert(plugin_name.clone(), records);
        }
    }

    diff
}

fn diff_cause(entry: &CrossConfigEntry, config_count: usize) -> Option<DiffCause> {
    if entry.configs.len() < config_count {
        return Some(DiffCause::MissingInSomeConfigs);
    }

    let (base, others) = entry.configs.split_first()?;
    others
        .iter()
        .any(|config| config.states != base.states)
        .then_some(DiffCause::StateMismatch)
}

/// Renders one document per flagged plugin, sorted by plugin name
///
/// `config_names` gives the comparison table one column per config.
pub fn create_diff_markdown(diff: &DiffByPlugin, config_names: &[String]) -> Vec<PluginDiff> {
    let md = Markdown::new();
    let columns: Vec<Column> = config_names
        .iter()
        .enumerate()
        .map(|(index, name)| Column::new(name.as_str(), config_key(index)))
        .collect();

    diff.iter()
        .map(|(plugin_name, records)| {
            let rules: Vec<String> = records
                .iter()
                .map(|record| create_rule_section(&md, &columns, record))
                .collect();

            PluginDiff {
                plugin_name: plugin_name.clone(),
                markdown: [md.header(plugin_name, 2), rules.join("\n")].join("\n"),
            }
        })
        .collect()
}

fn create_rule_section(md: &Markdown, columns: &[Column], record: &DiffRecord) -> String {
    let description = prepare_description(record.description.as_deref().unwrap_or(""));
    let list = md.unordered_list(&[
        format!("{}: {}", md.italic("Cause"), md.bold(&record.cause.to_string())),
        md.link("Link", &record.url),
        format!("{}: {}", md.italic("Description"), description),
    ]);

    let mut row = Row::new();
    for config in &record.configs {
        row.insert(
            config_key(config.index),
            md.code(&escape_pipes(&config.states_json())),
        );
    }

    let table = [
        md.table_header_row(columns),
        md.table_break_row(columns),
        md.table_row(columns, &row),
    ]
    .join("\n");

    [
        md.header(&record.rule_name, 3),
        list,
        String::new(),
        table,
        String::new(),
        "***".to_string(),
    ]
    .join("\n")
}

fn config_key(index: usize) -> String {
    format!("config:{index}")
}
