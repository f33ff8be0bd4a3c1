#![forbid(unsafe_code)]

//! Markdown report of the rules one config enables
//!
//! The document starts with a navigation list of plugins, followed by one
//! section per plugin (sorted by name) holding a table with a row per rule
//! (sorted by name), a column per extension and a column per metadata field.

use crate::markdown::{Column, Markdown, Row, escape_pipes};
use crate::rules::{PluginInfo, PluginMap, RuleInfo};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static ANCHOR_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/@]+").unwrap());
static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

const RULE_KEY: &str = "rule";

/// Renders the report for one config
///
/// Pure: the same plugin map always yields byte-identical Markdown.
pub fn create_markdown(plugins: &PluginMap) -> String {
    let md = Markdown::new();

    let mut navigation = Vec::with_capacity(plugins.len());
    let mut articles = Vec::with_capacity(plugins.len());

    for (plugin_name, plugin) in plugins {
        navigation.push(md.link(plugin_name, &prepare_anchor(plugin_name)));
        articles.push(create_article(&md, plugin_name, plugin));
    }

    let mut parts = vec![md.header("Navigation", 1), md.unordered_list(&navigation)];
    parts.extend(articles);
    parts.join("\n")
}

fn create_article(md: &Markdown, plugin_name: &str, plugin: &PluginInfo) -> String {
    [md.header(plugin_name, 2), create_table(md, plugin)].join("\n")
}

fn create_table(md: &Markdown, plugin: &PluginInfo) -> String {
    let mut columns = vec![Column::new("Rule", RULE_KEY)];
    columns.extend(
        plugin
            .extensions()
            .iter()
            .map(|ext| Column::new(format!("Extension *.{ext}"), extension_key(ext))),
    );
    columns.extend(
        plugin
            .fields()
            .iter()
            .map(|field| Column::new(field.as_str(), field_key(field))),
    );

    let rows: Vec<Row> = plugin
        .rules()
        .iter()
        .map(|(rule_name, rule)| create_row(md, rule_name, rule, plugin.fields()))
        .collect();

    md.table(&columns, &rows)
}

fn create_row(md: &Markdown, rule_name: &str, rule: &RuleInfo, fields: &[String]) -> Row {
    let mut row = Row::new();

    for field in fields {
        let Some(value) = rule.field(field) else {
            continue;
        };
        let text = if field == "description" {
            prepare_description(&field_text(value))
        } else {
            field_text(value)
        };
        row.insert(field_key(field), escape_pipes(&text));
    }

    for (extension, state) in rule.extensions() {
        row.insert(
            extension_key(extension),
            md.code(&escape_pipes(&state.to_string())),
        );
    }

    row.insert(RULE_KEY.to_string(), md.link(rule_name, rule.url()));
    row
}

fn extension_key(extension: &str) -> String {
    format!("ext:{extension}")
}

fn field_key(field: &str) -> String {
    format!("field:{field}")
}

/// In-page anchor of a plugin section: `@scope/eslint-plugin` → `#scopeeslint-plugin`
pub fn prepare_anchor(plugin_name: &str) -> String {
    format!("#{}", ANCHOR_STRIP.replace_all(plugin_name, ""))
}

/// Removes line breaks so a description fits in one table cell
pub fn prepare_description(description: &str) -> String {
    LINE_BREAKS.replace_all(description, "").into_owned()
}

/// Textual form of a metadata value
///
/// Strings are used verbatim, arrays are comma-joined, objects become compact JSON.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => field_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RuleState, Severity};
    use pretty_assertions::assert_eq;
    use serde_json::{Map, json};

    fn meta(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("meta must be an object"),
        }
    }

    #[test]
    fn test_prepare_anchor() {
        assert_eq!(prepare_anchor("@scope/eslint-plugin"), "#scopeeslint-plugin");
        assert_eq!(prepare_anchor("eslint"), "#eslint");
        assert_eq!(
            prepare_anchor("@angular-eslint/eslint-plugin-template"),
            "#angular-eslinteslint-plugin-template"
        );
    }

    #[test]
    fn test_prepare_description() {
        assert_eq!(prepare_description("Require\nsemicolons\r\n"), "Requiresemicolons");
        assert_eq!(prepare_description(""), "");
    }

    #[test]
    fn test_field_text() {
        assert_eq!(field_text(&json!("problem")), "problem");
        assert_eq!(field_text(&json!(true)), "true");
        assert_eq!(field_text(&json!(3)), "3");
        assert_eq!(field_text(&json!(null)), "null");
        assert_eq!(field_text(&json!(["a", "b", null, 1])), "a,b,,1");
        assert_eq!(field_text(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn test_single_rule_report() {
        let mut plugin = PluginInfo::new("eslint");
        plugin.add_rule("no-unused-vars", &Map::new());
        plugin
            .add_extension("js", "no-unused-vars", RuleState::new(Severity::Error, None))
            .unwrap();

        let mut plugins = PluginMap::new();
        plugins.insert("eslint".to_string(), plugin);

        let expected = "# Navigation\n\
            \n\
            - [eslint](#eslint)\n\
            ## eslint\n\
            \n\
            | Rule | Extension *.js |\n\
            |----|--------------|\n\
            | [no-unused-vars](https://www.google.com/search?q=no-unused-vars) | `{\"severity\":\"error\"}` |";
        assert_eq!(create_markdown(&plugins), expected);
    }

    #[test]
    fn test_fields_and_missing_extensions() {
        let mut plugin = PluginInfo::new("eslint-plugin-react");
        plugin.add_rule(
            "jsx-key",
            &meta(json!({
                "type": "problem",
                "docs": {
                    "description": "Disallow missing `key` props\nin iterators",
                    "url": "https://react.dev/jsx-key"
                }
            })),
        );
        plugin.add_rule("a-rule", &meta(json!({"type": "suggestion"})));
        plugin
            .add_extension(
                "tsx",
                "jsx-key",
                RuleState::new(Severity::Warn, Some(json!({"checkFragmentShorthand": true}))),
            )
            .unwrap();
        plugin
            .add_extension("ts", "a-rule", RuleState::new(Severity::Error, Some(json!("a|b"))))
            .unwrap();

        let mut plugins = PluginMap::new();
        plugins.insert("eslint-plugin-react".to_string(), plugin);

        let lines: Vec<String> = create_markdown(&plugins)
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(
            lines[5],
            "| Rule | Extension *.tsx | Extension *.ts | type | description |"
        );
        assert_eq!(
            lines[6],
            "|----|---------------|--------------|----|-----------|"
        );
        assert_eq!(
            lines[7],
            "| [a-rule](https://www.google.com/search?q=a-rule) |  | `{\"severity\":\"error\",\"options\":\"a\\|b\"}` | suggestion |  |"
        );
        assert_eq!(
            lines[8],
            "| [jsx-key](https://react.dev/jsx-key) | `{\"severity\":\"warn\",\"options\":{\"checkFragmentShorthand\":true}}` |  | problem | Disallow missing `key` propsin iterators |"
        );
    }

    #[test]
    fn test_plugins_sorted_and_idempotent() {
        let mut plugins = PluginMap::new();
        for name in ["eslint-plugin-react", "@scope/eslint-plugin", "eslint"] {
            let mut plugin = PluginInfo::new(name);
            plugin.add_rule("r", &Map::new());
            plugin
                .add_extension("js", "r", RuleState::new(Severity::Warn, None))
                .unwrap();
            plugins.insert(name.to_string(), plugin);
        }

        let first = create_markdown(&plugins);
        assert_eq!(first, create_markdown(&plugins));

        let headers: Vec<&str> = first.lines().filter(|l| l.starts_with("## ")).collect();
        assert_eq!(
            headers,
            vec!["## @scope/eslint-plugin", "## eslint", "## eslint-plugin-react"]
        );
        assert!(first.contains("- [@scope/eslint-plugin](#scopeeslint-plugin)"));
    }
}
