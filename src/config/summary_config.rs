//! Parsing, validation and discovery of `.eslint-summary` configuration files

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Base name of the configuration file looked up from the working directory
pub const CONFIG_NAME: &str = ".eslint-summary";

/// Node.js executable used when nothing else is configured
pub const DEFAULT_NODE: &str = "node";

/// Supported file formats, in lookup order
const CONFIG_FORMATS: [(&str, ConfigFormat); 7] = [
    ("toml", ConfigFormat::Toml),
    ("json", ConfigFormat::Json),
    ("json5", ConfigFormat::Json5),
    ("yaml", ConfigFormat::Yaml),
    ("yml", ConfigFormat::Yaml),
    ("js", ConfigFormat::JavaScript),
    ("cjs", ConfigFormat::JavaScript),
];

/// Prints the JSON of the CommonJS module given as first argument
const EXPORT_SCRIPT: &str = "const path = require('node:path'); \
    const mod = require(path.resolve(process.argv[1])); \
    process.stdout.write(JSON.stringify(mod && mod.__esModule ? mod.default : mod));";

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Json5,
    Yaml,
    /// CommonJS module evaluated with Node.js; parsed as the JSON of its exports
    JavaScript,
}

/// Options controlling which configs are summarized and where reports go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// File extensions to probe, in order (default `["js"]`)
    pub extensions: Vec<String>,

    /// Plugins left out of every report; the core `eslint` rules are always kept
    pub ignore_plugins: Vec<String>,

    /// Directory receiving one report per config (default `eslint-summary-report`)
    pub output: String,

    /// ESLint config files, relative to the working directory (default `["./.eslintrc.js"]`)
    pub configs: Vec<String>,

    /// Also write the aggregated rules as JSON next to each report
    pub generate_json: bool,

    /// Directory receiving one diff document per plugin (default `docs/diffs`)
    pub diff_output: String,

    /// Node.js executable used to evaluate configs
    pub node: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["js".to_string()],
            ignore_plugins: Vec::new(),
            output: "eslint-summary-report".to_string(),
            configs: vec!["./.eslintrc.js".to_string()],
            generate_json: false,
            diff_output: "docs/diffs".to_string(),
            node: DEFAULT_NODE.to_string(),
        }
    }
}

impl SummaryConfig {
    /// Load configuration from a file, picking the parser from its extension
    ///
    /// JavaScript files are evaluated with [`DEFAULT_NODE`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_node(path, DEFAULT_NODE)
    }

    /// Load configuration from a file, evaluating JavaScript files with `node`
    pub fn load_with_node(path: impl AsRef<Path>, node: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = format_of(path, &content);
        if format == ConfigFormat::JavaScript {
            content = evaluate_module(path, node)?;
        }

        Self::parse(&content, format).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from a string in the given format
    ///
    /// For [`ConfigFormat::JavaScript`], `s` is the JSON of the module's exports.
    pub fn parse(s: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::Parse {
            path: PathBuf::new(),
            message,
        };

        let config: SummaryConfig = match format {
            ConfigFormat::Toml => toml::from_str(s).map_err(|e| parse_error(e.to_string()))?,
            ConfigFormat::Json | ConfigFormat::JavaScript => {
                serde_json::from_str(s).map_err(|e| parse_error(e.to_string()))?
            }
            ConfigFormat::Json5 => json5::from_str(s).map_err(|e| parse_error(e.to_string()))?,
            ConfigFormat::Yaml => {
                serde_yaml::from_str(s).map_err(|e| parse_error(e.to_string()))?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.configs.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "configs".to_string(),
                message: "at least one ESLint config is required".to_string(),
            });
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                message: "at least one extension is required".to_string(),
            });
        }

        // Extensions end up in the probe file name
        for extension in &self.extensions {
            if extension.is_empty()
                || extension.starts_with('.')
                || extension.contains(['/', '\\'])
            {
                return Err(ConfigError::InvalidValue {
                    field: "extensions".to_string(),
                    message: format!("'{extension}' is not a bare file extension, e.g. \"ts\""),
                });
            }
        }

        if self.output.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn format_of(path: &Path, content: &str) -> ConfigFormat {
    let extension = path.extension().and_then(|e| e.to_str());
    CONFIG_FORMATS
        .iter()
        .find(|(ext, _)| Some(*ext) == extension)
        .map(|(_, format)| *format)
        .unwrap_or_else(|| {
            // Extension-less file: sniff JSON, then a CommonJS module, otherwise TOML
            if content.trim_start().starts_with('{') {
                ConfigFormat::Json
            } else if content.contains("module.exports") {
                ConfigFormat::JavaScript
            } else {
                ConfigFormat::Toml
            }
        })
}

/// Runs a CommonJS config module through Node.js and returns its exports as JSON
fn evaluate_module(path: &Path, node: &str) -> Result<String, ConfigError> {
    let evaluation_error = |message: String| ConfigError::Evaluation {
        path: path.to_path_buf(),
        message,
    };

    let output = Command::new(node)
        .arg("-e")
        .arg(EXPORT_SCRIPT)
        .arg(path)
        .output()
        .map_err(|e| evaluation_error(format!("failed to start '{node}': {e}")))?;

    if !output.status.success() {
        return Err(evaluation_error(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    String::from_utf8(output.stdout).map_err(|e| evaluation_error(e.to_string()))
}

/// Walk upward from `start` looking for a configuration file named `name`
///
/// In each directory `<name>.toml`, `<name>.json`, `<name>.json5`, `<name>.yaml`,
/// `<name>.yml`, `<name>.js`, `<name>.cjs` and finally `<name>` are tried. The
/// closest match wins.
pub fn find_config(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidates = CONFIG_FORMATS
            .iter()
            .map(|(ext, _)| dir.join(format!("{name}.{ext}")))
            .chain(std::iter::once(dir.join(name)));

        for candidate in candidates {
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        current = dir.parent();
    }
    None
}

/// Discover and load the configuration closest to `start`
///
/// Returns `Ok(None)` when no configuration file exists.
pub fn discover(start: &Path, name: &str) -> Result<Option<(PathBuf, SummaryConfig)>, ConfigError> {
    match find_config(start, name) {
        Some(path) => {
            let config = SummaryConfig::load(&path)?;
            Ok(Some((path, config)))
        }
        None => Ok(None),
    }
}
