#![forbid(unsafe_code)]

//! Core domain types for ESLint Summary
//!
//! This module defines the rule severity and the configured state of a rule
//! for one file extension, normalized from the engine's raw settings.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Parses a severity as ESLint accepts it: `0|1|2` or `"off"|"warn"|"error"`
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_u64()? {
                0 => Some(Severity::Off),
                1 => Some(Severity::Warn),
                2 => Some(Severity::Error),
                _ => None,
            },
            Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "off" => Some(Severity::Off),
                "warn" => Some(Severity::Warn),
                "error" => Some(Severity::Error),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured state of a rule for a single file extension
///
/// `options` is absent when the raw setting carried nothing after the severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleState {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl RuleState {
    pub fn new(severity: Severity, options: Option<Value>) -> Self {
        Self { severity, options }
    }

    /// Normalizes a raw engine setting into a `RuleState`
    ///
    /// Accepts `[severity, ...options]` or a bare severity. A single trailing
    /// element becomes `options`; several are kept together as an array.
    pub fn from_raw(rule: &str, raw: &Value) -> Result<Self, RuleError> {
        let invalid = || RuleError::InvalidSeverity {
            rule: rule.to_string(),
            value: raw.to_string(),
        };

        match raw {
            Value::Array(items) => {
                let (first, rest) = items.split_first().ok_or_else(invalid)?;
                let severity = Severity::from_value(first).ok_or_else(invalid)?;
                let options = match rest {
                    [] => None,
                    [single] => Some(single.clone()),
                    many => Some(Value::Array(many.to_vec())),
                };
                Ok(Self::new(severity, options))
            }
            other => {
                let severity = Severity::from_value(other).ok_or_else(invalid)?;
                Ok(Self::new(severity, None))
            }
        }
    }
}

/// Compact JSON, `severity` first: `{"severity":"warn","options":"single"}`
impl fmt::Display for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"{{"severity":"{}""#, self.severity)?;
        if let Some(options) = &self.options {
            write!(f, r#","options":{options}"#)?;
        }
        f.write_str("}")
    }
}
