#![forbid(unsafe_code)]

//! Rule descriptors and their aggregation per plugin

mod plugin_info;
mod rule_info;
mod rule_name;

// Re-export core types
pub use plugin_info::{NOISE_FIELDS, PluginInfo, PluginMap};
pub use rule_info::RuleInfo;
pub use rule_name::{CORE_PLUGIN, FullRuleName, parse_full_rule_name};
