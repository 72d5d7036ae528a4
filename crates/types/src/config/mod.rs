// Path: crates/types/src/config/mod.rs

//! Configuration structures for kvorder tooling.
//!
//! Every field has a serde default, so an empty TOML document is a valid
//! configuration.
use serde::{Deserialize, Serialize};

/// The output format of the global log subscriber.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Compact, human-readable lines.
    Compact,
}

/// Logging configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// The fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// The log line format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Controls how command results are printed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent JSON output.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
        }
    }
}

/// The top-level tool configuration, usually read from `kvorder.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}
