//! # Verify Subcommand
//!
//! Lints the configured documents and prints a self-verification report:
//! one `ERROR`/`FIX` pair per violation and a final `READY` or `NOT READY`
//! status. Meant to be pasted back to whoever edited the tokens.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kiln_lint::{lint_with, LintResult};

use crate::KilnConfig;

/// Arguments for the `kiln verify` subcommand.
#[derive(Args, Debug, Default)]
pub struct VerifyArgs {
    /// Token document (default: from config).
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Component schema document (default: from config).
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Print the underlying lint result as JSON instead of the report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 when READY, 1 when NOT READY.
pub fn run_verify(args: &VerifyArgs, config: &KilnConfig) -> Result<u8> {
    let tokens = crate::load_tokens(args.tokens.as_ref().unwrap_or(&config.tokens))?;
    let schema = crate::load_schema(args.schema.as_ref().unwrap_or(&config.schema))?;
    let result = lint_with(&tokens, &schema, &config.lint_options());

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize lint result")?;
        println!("{json}");
    } else {
        print!("{}", render_verify_report(&result));
    }

    Ok(if result.passed { 0 } else { 1 })
}

/// Render the self-verification report for `result`.
pub fn render_verify_report(result: &LintResult) -> String {
    let mut out = String::from("KILN SELF-VERIFICATION REPORT\n\n");

    if result.passed {
        out.push_str("RESULT: PASS\n\n");
    } else {
        out.push_str(&format!(
            "RESULT: FAIL ({} violation(s))\n\n",
            result.violations.len()
        ));
        for v in &result.violations {
            out.push_str(&format!("ERROR: {v}\n"));
            out.push_str(&format!("FIX:   {}\n\n", v.kind.remediation()));
        }
    }

    let status = if result.passed { "READY" } else { "NOT READY" };
    out.push_str(&format!("STATUS: {status}\n"));
    out
}
