//! Aggregation of rules under a plugin namespace

use crate::error::RuleError;
use crate::rules::RuleInfo;
use crate::types::RuleState;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Metadata fields that never become report columns
pub const NOISE_FIELDS: [&str; 5] = ["schema", "messages", "docs", "url", "extensions"];

/// All rules one config enables, keyed by plugin name
pub type PluginMap = BTreeMap<String, PluginInfo>;

/// Rules of one plugin as configured by a single config file
///
/// Reports are append-only: rules and extension states can be added, never removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginInfo {
    #[serde(skip)]
    name: String,
    fields: Vec<String>,
    #[serde(skip)]
    extensions: Vec<String>,
    rules: BTreeMap<String, RuleInfo>,
}

impl PluginInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            extensions: Vec::new(),
            rules: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metadata fields observed across the plugin's rules, in first-seen order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Extensions any rule of this plugin was configured for, in first-seen order
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn rules(&self) -> &BTreeMap<String, RuleInfo> {
        &self.rules
    }

    pub fn rule(&self, rule_name: &str) -> Option<&RuleInfo> {
        self.rules.get(rule_name)
    }

    pub fn has_rule(&self, rule_name: &str) -> bool {
        self.rules.contains_key(rule_name)
    }

    /// Adds a rule from its metadata
    ///
    /// The first metadata seen for a rule wins; returns `false` if the rule
    /// was already present.
    pub fn add_rule(&mut self, rule_name: &str, meta: &Map<String, Value>) -> bool {
        if self.has_rule(rule_name) {
            return false;
        }

        self.observe_fields(meta);
        self.rules
            .insert(rule_name.to_string(), RuleInfo::new(rule_name, meta));
        true
    }

    /// Records the state of an already added rule for an extension
    pub fn add_extension(
        &mut self,
        extension: &str,
        rule_name: &str,
        state: RuleState,
    ) -> Result<(), RuleError> {
        let rule = self
            .rules
            .get_mut(rule_name)
            .ok_or_else(|| RuleError::UnknownRule {
                plugin: self.name.clone(),
                rule: rule_name.to_string(),
            })?;

        rule.add_extension(extension, state);
        if !self.extensions.iter().any(|e| e == extension) {
            self.extensions.push(extension.to_string());
        }
        Ok(())
    }

    fn observe_fields(&mut self, meta: &Map<String, Value>) {
        let docs = match meta.get("docs") {
            Some(Value::Object(docs)) => docs.keys().collect(),
            _ => Vec::new(),
        };

        for field in meta.keys().chain(docs) {
            if NOISE_FIELDS.contains(&field.as_str()) || self.fields.contains(field) {
                continue;
            }
            self.fields.push(field.clone());
        }
    }
}
