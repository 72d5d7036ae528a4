// Path: crates/cli/src/commands/encode.rs

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use kvorder_types::kv::{Pair, Pairs};

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Pairs as `key=hexvalue`, in any order.
    pub pairs: Vec<String>,
}

pub fn run(args: EncodeArgs) -> Result<()> {
    let mut pairs = parse_pairs(&args.pairs)?;
    tracing::info!(count = pairs.len(), "encoding pairs");
    println!("{}", pairs.to_canonical_string());
    Ok(())
}

/// Parses `key=hexvalue` arguments. The key is everything before the first `=`.
pub fn parse_pairs(raw: &[String]) -> Result<Pairs> {
    raw.iter().map(|arg| parse_pair(arg)).collect()
}

fn parse_pair(arg: &str) -> Result<Pair> {
    let (key, value_hex) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected key=hexvalue, got {:?}", arg))?;
    let value = hex::decode(value_hex).with_context(|| format!("Invalid hex value in {:?}", arg))?;
    Ok(Pair::new(key, value))
}
