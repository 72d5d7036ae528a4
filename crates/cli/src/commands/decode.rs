// Path: crates/cli/src/commands/decode.rs

use crate::util::{render_json, PairView};
use anyhow::Result;
use clap::Parser;
use kvorder_types::config::OutputConfig;
use kvorder_types::error::ErrorCode;
use kvorder_types::kv::Pairs;

#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// A canonical string such as `a:01|b:02|`.
    pub canonical: String,
}

pub fn run(args: DecodeArgs, output: &OutputConfig) -> Result<()> {
    let views = decode(&args.canonical)?;
    println!("{}", render_json(&views, output)?);
    Ok(())
}

/// Parses the canonical string, keeping its order.
pub fn decode(canonical: &str) -> Result<Vec<PairView>> {
    let pairs = Pairs::from_canonical_str(canonical).map_err(|e| {
        tracing::warn!(code = e.code(), error = %e, "canonical decode failed");
        e
    })?;
    tracing::info!(count = pairs.len(), "decoded pairs");
    Ok(pairs.iter().map(PairView::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_order() {
        let views = decode("b:02|a:01|").unwrap();
        let keys: Vec<&str> = views.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(views[1].value, "01");
    }

    #[test]
    fn test_decode_error_surfaces() {
        let err = decode("a:xyz|").unwrap_err();
        assert!(err.to_string().contains("Invalid hex value"));
    }
}
