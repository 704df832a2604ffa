//! # Lint Subcommand
//!
//! Lints a token document against a component schema and prints every
//! violation. Exit code `1` on any violation is what CI gates key off.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kiln_lint::{lint_with, LintOptions, LintResult};

use crate::KilnConfig;

/// Arguments for the `kiln lint` subcommand.
#[derive(Args, Debug, Default)]
pub struct LintArgs {
    /// Token document (default: from config).
    #[arg(value_name = "TOKENS")]
    pub tokens: Option<PathBuf>,

    /// Component schema document (default: from config).
    #[arg(value_name = "SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Alias hop bound for the REF check (default: from config).
    #[arg(long, value_parser = crate::parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the lint subcommand.
///
/// Returns exit code: 0 when the document passes, 1 on violations.
pub fn run_lint(args: &LintArgs, config: &KilnConfig) -> Result<u8> {
    let tokens_path = args.tokens.as_ref().unwrap_or(&config.tokens);
    let schema_path = args.schema.as_ref().unwrap_or(&config.schema);
    let options = LintOptions {
        max_depth: args.max_depth.unwrap_or(config.max_depth),
    };

    let tokens = crate::load_tokens(tokens_path)?;
    let schema = crate::load_schema(schema_path)?;
    let result = lint_with(&tokens, &schema, &options);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize lint result")?;
        println!("{json}");
    } else {
        print!("{}", render_lint_text(&result));
    }

    Ok(if result.passed { 0 } else { 1 })
}

/// Human-readable lint report.
pub fn render_lint_text(result: &LintResult) -> String {
    if result.passed {
        return "✅ Token lint passed\n".to_string();
    }
    let mut out = format!("❌ Token lint failed ({})\n", result.violations.len());
    for v in &result.violations {
        out.push_str(&format!(" - {v}\n"));
    }
    out
}
