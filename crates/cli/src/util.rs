// Path: crates/cli/src/util.rs

use anyhow::{Context, Result};
use kvorder_types::codec;
use kvorder_types::config::{OutputConfig, ToolConfig};
use kvorder_types::kv::Pair;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Loads the tool configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ToolConfig> {
    let Some(path) = path else {
        return Ok(ToolConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
}

/// Reads a whole input file.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Renders a value as JSON, indented or compact per the output settings.
pub fn render_json<T: Serialize>(value: &T, output: &OutputConfig) -> Result<String> {
    let bytes = if output.pretty_json {
        codec::to_json_pretty(value)?
    } else {
        codec::to_json(value)?
    };
    Ok(String::from_utf8(bytes)?)
}

/// A human-readable view of a pair: the key as text, the value as hex.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct PairView {
    pub key: String,
    pub value: String,
}

impl From<&Pair> for PairView {
    fn from(pair: &Pair) -> Self {
        Self {
            key: String::from_utf8_lossy(pair.key()).into_owned(),
            value: hex::encode(pair.value()),
        }
    }
}
