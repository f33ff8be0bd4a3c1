//! Report and diff builders, and writing their documents

pub mod diff;
pub mod report;
pub mod writer;

pub use diff::{
    ConfigSnapshot, ConfigState, CrossConfigEntry, DiffByPlugin, DiffCause, DiffRecord,
    MergedRules, PluginDiff, create_diff_markdown, find_differences, merge_configs,
};
pub use report::create_markdown;
pub use writer::{config_name, write_json_report, write_plugin_diff, write_report};
