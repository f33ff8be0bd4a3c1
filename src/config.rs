//! Configuration file parsing, validation and discovery

pub mod summary_config;

pub use summary_config::{
    CONFIG_NAME, ConfigFormat, DEFAULT_NODE, SummaryConfig, discover, find_config,
};
