// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # kvorder CLI
//!
//! Encodes, decodes and inspects the canonical forms that every node must agree on.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod util;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "kvorder",
    version,
    about = "Canonical ordering and encoding tools for consensus attribute data."
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render `key=hexvalue` pairs in canonical string form.
    Encode(encode::EncodeArgs),

    /// Parse a canonical string back into pairs.
    Decode(decode::DecodeArgs),

    /// Inspect commit identifiers.
    Commit(commit::CommitArgs),

    /// Order validator updates.
    Validators(validators::ValidatorsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = util::load_config(cli.config.as_deref())?;
    kvorder_telemetry::init_tracing(&config.log)?;

    match cli.command {
        Commands::Encode(args) => encode::run(args),
        Commands::Decode(args) => decode::run(args, &config.output),
        Commands::Commit(args) => commit::run(args, &config.output),
        Commands::Validators(args) => validators::run(args, &config.output),
    }
}
