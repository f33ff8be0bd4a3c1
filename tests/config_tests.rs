//! Integration tests for configuration loading and discovery
//!
//! These tests verify:
//! - Loading from TOML, JSON, JSON5, YAML and JavaScript files
//! - Defaults for missing fields
//! - Rejection of unknown fields and invalid values
//! - Upward discovery and format precedence

use eslint_summary::config::{CONFIG_NAME, DEFAULT_NODE, SummaryConfig, discover, find_config};
use eslint_summary::error::ConfigError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("config")
        .join(filename)
}

/// JavaScript configs need Node.js; tests evaluating them are skipped without it
fn node_available() -> bool {
    Command::new(DEFAULT_NODE)
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_full_toml() {
    let config = SummaryConfig::load(fixture_path("full.toml")).unwrap();

    assert_eq!(config.extensions, vec!["ts", "tsx", "html"]);
    assert_eq!(config.ignore_plugins, vec!["eslint-plugin-import"]);
    assert_eq!(config.output, "reports");
    assert_eq!(
        config.configs,
        vec!["./apps/angular/.eslintrc.js", "./apps/next/.eslintrc.json"]
    );
    assert!(config.generate_json);
    assert_eq!(config.diff_output, "docs/compare");
    assert_eq!(config.node, "node");
}

#[test]
fn test_load_partial_json_keeps_defaults() {
    let config = SummaryConfig::load(fixture_path("partial.json")).unwrap();

    assert_eq!(config.extensions, vec!["js", "vue"]);
    assert_eq!(config.configs, vec!["./.eslintrc.cjs"]);
    assert_eq!(config.output, "eslint-summary-report");
    assert_eq!(config.diff_output, "docs/diffs");
    assert!(config.ignore_plugins.is_empty());
    assert!(!config.generate_json);
}

#[test]
fn test_load_yaml() {
    let config = SummaryConfig::load(fixture_path("full.yaml")).unwrap();

    assert_eq!(config.extensions, vec!["ts", "html"]);
    assert_eq!(config.ignore_plugins, vec!["eslint-plugin-prettier"]);
    assert_eq!(config.configs.len(), 2);
    assert_eq!(config.diff_output, "docs/diffs/lint");
}

#[test]
fn test_load_json5() {
    let config = SummaryConfig::load(fixture_path("full.json5")).unwrap();

    assert_eq!(config.extensions, vec!["ts", "html"]);
    assert_eq!(config.ignore_plugins, vec!["eslint-plugin-prettier"]);
    assert_eq!(
        config.configs,
        vec![
            "./example-apps/angular/.eslintrc.js",
            "./example-apps/next/.eslintrc.json"
        ]
    );
    assert!(config.generate_json);
}

#[test]
fn test_load_javascript_module() {
    if !node_available() {
        return;
    }

    let config = SummaryConfig::load(fixture_path("module.js")).unwrap();

    assert_eq!(config.extensions, vec!["ts", "tsx", "html"]);
    assert_eq!(
        config.configs,
        vec![
            "./example-apps/angular/.eslintrc.js",
            "./example-apps/next/.eslintrc.json"
        ]
    );
    assert_eq!(config.output, "eslint-summary-report");
}

#[test]
fn test_load_broken_javascript_module() {
    if !node_available() {
        return;
    }

    let err = SummaryConfig::load(fixture_path("broken_module.cjs")).unwrap_err();
    match err {
        ConfigError::Evaluation { path, message } => {
            assert!(path.ends_with("broken_module.cjs"));
            assert!(message.contains("does-not-exist"));
        }
        other => panic!("expected an evaluation error, got {other:?}"),
    }
}

#[test]
fn test_load_javascript_with_missing_node() {
    let err = SummaryConfig::load_with_node(fixture_path("module.js"), "eslint-summary-no-such-node")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Evaluation { .. }));
}

#[test]
fn test_load_unknown_field() {
    let result = SummaryConfig::load(fixture_path("unknown_field.toml"));

    match result {
        Err(ConfigError::Parse { path, message }) => {
            assert!(path.ends_with("unknown_field.toml"));
            assert!(message.contains("outputDir"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_load_empty_configs() {
    let err = SummaryConfig::load(fixture_path("empty_configs.json")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "configs"));
}

#[test]
fn test_load_dotted_extension() {
    let err = SummaryConfig::load(fixture_path("dotted_extension.yml")).unwrap_err();
    assert!(err.to_string().contains("'.ts' is not a bare file extension"));
}

#[test]
fn test_load_missing_file() {
    let err = SummaryConfig::load(fixture_path("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_discover_nothing() {
    let dir = TempDir::new().unwrap();
    assert!(find_config(dir.path(), ".no-such-config-anywhere").is_none());
    assert!(
        discover(dir.path(), ".no-such-config-anywhere")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_discover_walks_upward() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(format!("{CONFIG_NAME}.yml"));
    fs::write(&config_path, "extensions: [ts]\n").unwrap();
    let nested = dir.path().join("packages/ui/src");
    fs::create_dir_all(&nested).unwrap();

    let (path, config) = discover(&nested, CONFIG_NAME).unwrap().unwrap();

    assert_eq!(path, config_path);
    assert_eq!(config.extensions, vec!["ts"]);
}

#[test]
fn test_closest_config_wins() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".summary.toml"),
        "extensions = [\"js\"]\n",
    )
    .unwrap();
    let nested = dir.path().join("app");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join(".summary.json"), r#"{"extensions": ["vue"]}"#).unwrap();

    let (path, config) = discover(&nested, ".summary").unwrap().unwrap();

    assert_eq!(path, nested.join(".summary.json"));
    assert_eq!(config.extensions, vec!["vue"]);
}

#[test]
fn test_toml_preferred_within_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".summary.toml"), "output = \"a\"\n").unwrap();
    fs::write(dir.path().join(".summary.json"), r#"{"output": "b"}"#).unwrap();

    let path = find_config(dir.path(), ".summary").unwrap();
    assert_eq!(path, dir.path().join(".summary.toml"));
}

#[test]
fn test_discover_javascript_module() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(format!("{CONFIG_NAME}.js"));
    fs::write(
        &config_path,
        "module.exports = { extensions: ['ts', 'tsx', 'html'], configs: ['./apps/web/.eslintrc.js'] };\n",
    )
    .unwrap();

    assert_eq!(find_config(dir.path(), CONFIG_NAME), Some(config_path));

    if !node_available() {
        return;
    }
    let (_, config) = discover(dir.path(), CONFIG_NAME).unwrap().unwrap();
    assert_eq!(config.extensions, vec!["ts", "tsx", "html"]);
    assert_eq!(config.configs, vec!["./apps/web/.eslintrc.js"]);
}

#[test]
fn test_discover_json5_and_cjs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".summary.cjs"), "module.exports = {};\n").unwrap();
    fs::write(dir.path().join(".summary.json5"), "{ output: 'docs', }").unwrap();

    // JSON5 comes before JavaScript within a directory
    let (path, config) = discover(dir.path(), ".summary").unwrap().unwrap();
    assert_eq!(path, dir.path().join(".summary.json5"));
    assert_eq!(config.output, "docs");

    fs::remove_file(dir.path().join(".summary.json5")).unwrap();
    assert_eq!(
        find_config(dir.path(), ".summary"),
        Some(dir.path().join(".summary.cjs"))
    );
}

#[test]
fn test_bare_name_sniffs_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".summaryrc"),
        r#"{"configs": ["./eslint.config.mjs"], "generateJson": true}"#,
    )
    .unwrap();

    let (_, config) = discover(dir.path(), ".summaryrc").unwrap().unwrap();
    assert_eq!(config.configs, vec!["./eslint.config.mjs"]);
    assert!(config.generate_json);
}

#[test]
fn test_bare_name_falls_back_to_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".summaryrc"), "diffOutput = \"diffs\"\n").unwrap();

    let (_, config) = discover(dir.path(), ".summaryrc").unwrap().unwrap();
    assert_eq!(config.diff_output, "diffs");
}

#[test]
fn test_discover_reports_broken_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".summary.json"), "{ not json").unwrap();

    let err = discover(dir.path(), ".summary").unwrap_err();
    assert!(err.to_string().contains(".summary.json"));
}
