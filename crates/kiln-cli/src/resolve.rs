//! # Resolve Subcommand
//!
//! Prints the concrete value a token path resolves to. A dangling alias or
//! a loop is reported on stdout with exit code `1`; it is never replaced
//! with a fallback value.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use kiln_core::TokenPath;
use kiln_lint::resolve_with_depth;

use crate::KilnConfig;

/// Arguments for the `kiln resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Dotted token path, e.g. `color.semantic.background.default`.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Token document (default: from config).
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Alias hop bound (default: from config).
    #[arg(long, value_parser = crate::parse_max_depth)]
    pub max_depth: Option<usize>,
}

/// Execute the resolve subcommand.
///
/// Returns exit code: 0 when the path resolves, 1 when it does not.
pub fn run_resolve(args: &ResolveArgs, config: &KilnConfig) -> Result<u8> {
    let tokens_path = args.tokens.as_ref().unwrap_or(&config.tokens);
    let max_depth = args.max_depth.unwrap_or(config.max_depth);
    let tokens = crate::load_tokens(tokens_path)?;

    let path = TokenPath::parse(args.path.trim());
    match resolve_with_depth(&tokens, &path, max_depth) {
        Ok(resolved) => {
            tracing::info!(path = %path, hops = resolved.hops, via = %resolved.path, "resolved");
            println!("{}", render_value(&resolved.value));
            Ok(0)
        }
        Err(e) => {
            println!("❌ {path}: {e}");
            Ok(1)
        }
    }
}

/// Strings print bare; other JSON values print as JSON.
fn render_value(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_documents;
    use serde_json::json;

    fn args(path: &str, tokens: PathBuf) -> ResolveArgs {
        ResolveArgs {
            path: path.to_string(),
            tokens: Some(tokens),
            max_depth: None,
        }
    }

    #[derive(clap::Parser, Debug)]
    struct ResolveCommand {
        #[command(flatten)]
        args: ResolveArgs,
    }

    #[test]
    fn test_max_depth_flag_rejects_zero() {
        use clap::Parser;

        let err = ResolveCommand::try_parse_from(["resolve", "a.b", "--max-depth", "0"]).unwrap_err();
        assert!(err.to_string().contains("at least 1"), "{err}");
        assert!(ResolveCommand::try_parse_from(["resolve", "a.b", "--max-depth", "1"]).is_ok());
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("#000000")), "#000000");
        assert_eq!(render_value(&json!(4)), "4");
    }

    #[test]
    fn test_run_resolve_exit_codes() {
        let leaf = |v: &str| json!({"type": "color", "value": v});
        let doc = json!({"a": leaf("{b}"), "b": leaf("#112233"), "x": leaf("{x}")});
        let (_dir, tokens, _schema) = write_documents(&doc, &json!({}));
        let config = KilnConfig::default();

        assert_eq!(run_resolve(&args("a", tokens.clone()), &config).unwrap(), 0);
        assert_eq!(run_resolve(&args("x", tokens.clone()), &config).unwrap(), 1);
        assert_eq!(run_resolve(&args("missing", tokens.clone()), &config).unwrap(), 1);

        let mut tight = args("a", tokens);
        tight.max_depth = Some(1);
        assert_eq!(run_resolve(&tight, &config).unwrap(), 1);
    }
}
