// Path: crates/cli/src/commands/commit.rs

use crate::util::{read_input, render_json};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kvorder_types::app::CommitId;
use kvorder_types::config::OutputConfig;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CommitArgs {
    #[clap(subcommand)]
    pub command: CommitCommands,
}

#[derive(Subcommand, Debug)]
pub enum CommitCommands {
    /// Decode a JSON commit identifier and show its canonical sharding form.
    Inspect {
        /// Path to the JSON file.
        file: PathBuf,
    },
}

#[derive(Serialize, Debug)]
pub struct CommitReport {
    pub version: i64,
    pub hash: String,
    pub sharding: String,
    pub sharding_digest: String,
}

pub fn run(args: CommitArgs, output: &OutputConfig) -> Result<()> {
    match args.command {
        CommitCommands::Inspect { file } => {
            let bytes = read_input(&file)?;
            let report = inspect(&bytes)
                .with_context(|| format!("Invalid commit identifier in {}", file.display()))?;
            tracing::info!(version = report.version, "inspected commit identifier");
            println!("{}", render_json(&report, output)?);
        }
    }
    Ok(())
}

pub fn inspect(json: &[u8]) -> Result<CommitReport> {
    let mut id = CommitId::from_json(json)?;
    let sharding_digest = hex::encode(id.sharding_digest());
    Ok(CommitReport {
        version: id.version,
        hash: hex::encode(&id.hash),
        sharding: id.canonical_sharding_string(),
        sharding_digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_report() {
        let json = br#"{"version":"7","hash":"AQI=","sharding_hash":[
            {"key":"Yg==","value":"Ag=="},{"key":"YQ==","value":"AQ=="}]}"#;
        let report = inspect(json).unwrap();
        assert_eq!(report.version, 7);
        assert_eq!(report.hash, "0102");
        assert_eq!(report.sharding, "a:01|b:02|");
        assert_eq!(report.sharding_digest.len(), 64);
    }

    #[test]
    fn test_inspect_rejects_missing_field() {
        assert!(inspect(br#"{"version":"7"}"#).is_err());
    }
}
