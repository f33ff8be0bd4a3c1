//! Metadata and per-extension state of a single rule

use crate::types::RuleState;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// A rule as seen in one config: its metadata plus its state per file extension
#[derive(Debug, Clone, PartialEq)]
pub struct RuleInfo {
    name: String,
    url: String,
    meta: Map<String, Value>,
    docs: Map<String, Value>,
    extensions: BTreeMap<String, RuleState>,
}

impl RuleInfo {
    /// Creates a rule from the engine's metadata object
    ///
    /// The URL comes from `docs.url`, then a top-level `url`, and falls back to
    /// a web search for the rule name.
    pub fn new(name: impl Into<String>, meta: &Map<String, Value>) -> Self {
        let name = name.into();

        let mut meta = meta.clone();
        let docs = match meta.remove("docs") {
            Some(Value::Object(docs)) => docs,
            _ => Map::new(),
        };

        let url = docs
            .get("url")
            .or_else(|| meta.get("url"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Self::fallback_url(&name));

        Self {
            name,
            url,
            meta,
            docs,
            extensions: BTreeMap::new(),
        }
    }

    pub fn fallback_url(name: &str) -> String {
        format!("{SEARCH_URL}{name}")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Top-level metadata, without the nested `docs` object
    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    pub fn docs(&self) -> &Map<String, Value> {
        &self.docs
    }

    pub fn extensions(&self) -> &BTreeMap<String, RuleState> {
        &self.extensions
    }

    pub fn state(&self, extension: &str) -> Option<&RuleState> {
        self.extensions.get(extension)
    }

    /// Looks up a metadata field, preferring `docs` over the top level
    pub fn field(&self, field: &str) -> Option<&Value> {
        self.docs.get(field).or_else(|| self.meta.get(field))
    }

    pub fn description(&self) -> Option<&str> {
        self.field("description").and_then(Value::as_str)
    }

    /// Records the state for an extension, replacing any earlier one
    pub fn add_extension(&mut self, extension: impl Into<String>, state: RuleState) {
        self.extensions.insert(extension.into(), state);
    }
}

impl Serialize for RuleInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut flat = self.meta.clone();
        flat.insert("url".to_string(), Value::String(self.url.clone()));
        for (key, value) in &self.docs {
            flat.insert(key.clone(), value.clone());
        }
        for (extension, state) in &self.extensions {
            let state = serde_json::to_value(state).map_err(S::Error::custom)?;
            flat.insert(extension.clone(), state);
        }
        flat.serialize(serializer)
    }
}
