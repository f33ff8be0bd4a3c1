//! Splitting fully-qualified rule names into plugin package and rule

use serde::Serialize;

/// Namespace of the rules ESLint ships with
pub const CORE_PLUGIN: &str = "eslint";

const PLUGIN_PREFIX: &str = "eslint-plugin";

/// A rule name split into the plugin package that provides it and the bare rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FullRuleName {
    pub plugin_name: String,
    pub rule: String,
}

/// Resolves the plugin package a configured rule belongs to
///
/// - `no-console` → `eslint` / `no-console`
/// - `react/jsx-key` → `eslint-plugin-react` / `jsx-key`
/// - `@typescript-eslint/no-explicit-any` → `@typescript-eslint/eslint-plugin` / `no-explicit-any`
/// - `@scope/pkg/rule` → `@scope/eslint-plugin-pkg` / `rule`
pub fn parse_full_rule_name(full_name: &str) -> FullRuleName {
    let parts: Vec<&str> = full_name.split('/').collect();

    let (namespace, rule) = match parts.as_slice() {
        [first, .., last] => (*first, *last),
        _ => {
            return FullRuleName {
                plugin_name: CORE_PLUGIN.to_string(),
                rule: full_name.to_string(),
            };
        }
    };

    if !namespace.contains('@') {
        return FullRuleName {
            plugin_name: format!("{PLUGIN_PREFIX}-{namespace}"),
            rule: rule.to_string(),
        };
    }

    let segments = &parts[1..parts.len() - 1];
    let package = if segments.is_empty() {
        PLUGIN_PREFIX.to_string()
    } else {
        format!("{PLUGIN_PREFIX}-{}", segments.join("/"))
    };

    FullRuleName {
        plugin_name: format!("{namespace}/{package}"),
        rule: rule.to_string(),
    }
}
