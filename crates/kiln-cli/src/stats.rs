//! # Stats Subcommand
//!
//! Prints leaf counts per layer for a token document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kiln_lint::token_stats;

use crate::KilnConfig;

/// Arguments for the `kiln stats` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Token document (default: from config).
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Print the counts as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the stats subcommand. Always returns exit code 0 once the
/// document loads.
pub fn run_stats(args: &StatsArgs, config: &KilnConfig) -> Result<u8> {
    let tokens = crate::load_tokens(args.tokens.as_ref().unwrap_or(&config.tokens))?;
    let stats = token_stats(&tokens);

    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("failed to serialize stats")?;
        println!("{json}");
    } else {
        println!("Tokens: {stats}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_documents;
    use serde_json::json;

    #[test]
    fn test_run_stats() {
        let doc = json!({"color": {"semantic": {"a": {"type": "color", "value": "#000"}}}});
        let (_dir, tokens, _schema) = write_documents(&doc, &json!({}));
        let args = StatsArgs {
            tokens: Some(tokens),
            json: true,
        };
        assert_eq!(run_stats(&args, &KilnConfig::default()).unwrap(), 0);
    }

    #[test]
    fn test_run_stats_rejects_non_object_document() {
        let (_dir, tokens, _schema) = write_documents(&json!([1, 2]), &json!({}));
        let args = StatsArgs {
            tokens: Some(tokens),
            json: false,
        };
        assert!(run_stats(&args, &KilnConfig::default()).is_err());
    }
}
