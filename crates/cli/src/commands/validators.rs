// Path: crates/cli/src/commands/validators.rs

use crate::util::{read_input, render_json};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kvorder_types::app::ValidatorUpdates;
use kvorder_types::codec;
use kvorder_types::config::OutputConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ValidatorsArgs {
    #[clap(subcommand)]
    pub command: ValidatorsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ValidatorsCommands {
    /// Sort a JSON array of validator updates by public key.
    Sort {
        /// Path to the JSON file.
        file: PathBuf,
    },
}

pub fn run(args: ValidatorsArgs, output: &OutputConfig) -> Result<()> {
    match args.command {
        ValidatorsCommands::Sort { file } => {
            let bytes = read_input(&file)?;
            let updates = sort_updates(&bytes)
                .with_context(|| format!("Invalid validator updates in {}", file.display()))?;
            tracing::info!(count = updates.len(), "sorted validator updates");
            println!("{}", render_json(&updates, output)?);
        }
    }
    Ok(())
}

pub fn sort_updates(json: &[u8]) -> Result<ValidatorUpdates> {
    let mut updates: ValidatorUpdates = codec::from_json(json)?;
    updates.sort();
    Ok(updates)
}
