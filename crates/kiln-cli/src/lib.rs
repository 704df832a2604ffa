//! # kiln-cli: Command-Line Interface for Kiln Tokens
//!
//! Provides the `kiln` binary. Handlers load documents, call into
//! `kiln-lint`, and format the results; no lint logic lives here.
//!
//! ## Subcommands
//!
//! - `kiln lint [TOKENS] [SCHEMA]`: lint a token document (exit 1 on violations).
//! - `kiln resolve <PATH>`: print the concrete value behind an alias chain.
//! - `kiln verify`: lint and print a fix-it report per violation.
//! - `kiln stats`: leaf counts per layer.
//!
//! ## Exit Codes
//!
//! `0` success, `1` lint or resolution failure, `2` operational error
//! (unreadable or malformed input).
//!
//! ```bash
//! kiln lint tokens/kiln.with_meta.json schema/component-schema.json
//! kiln resolve color.component.button.primary.background.rest
//! kiln verify --json
//! ```

pub mod config;
pub mod lint;
pub mod resolve;
pub mod stats;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kiln_core::{SchemaDocument, TokenTree};

pub use config::KilnConfig;

/// Resolve a path that may be relative to `base`.
///
/// Absolute paths are returned unchanged; relative paths are joined onto
/// `base`.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Parse a `--max-depth` value. Zero is rejected, matching `kiln.yaml`.
pub fn parse_max_depth(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("max_depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(e) => Err(format!("invalid max_depth {s:?}: {e}")),
    }
}

/// Load the token document at `path`.
pub fn load_tokens(path: &Path) -> Result<TokenTree> {
    let tree = TokenTree::load(path)
        .with_context(|| format!("failed to load token document {}", path.display()))?;
    tracing::debug!(tokens = %path.display(), "loaded token document");
    Ok(tree)
}

/// Load the schema document at `path`.
pub fn load_schema(path: &Path) -> Result<SchemaDocument> {
    let schema = SchemaDocument::load(path)
        .with_context(|| format!("failed to load schema document {}", path.display()))?;
    tracing::debug!(
        schema = %path.display(),
        components = schema.components.len(),
        "loaded schema document"
    );
    Ok(schema)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use serde_json::Value;

    /// Write token and schema documents into a fresh directory.
    pub fn write_documents(tokens: &Value, schema: &Value) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let tokens_path = dir.path().join("tokens.json");
        let schema_path = dir.path().join("schema.json");
        std::fs::write(&tokens_path, serde_json::to_string(tokens).unwrap()).unwrap();
        std::fs::write(&schema_path, serde_json::to_string(schema).unwrap()).unwrap();
        (dir, tokens_path, schema_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_absolute_path_returned_as_is() {
        let base = Path::new("/some/repo");
        let abs_path = Path::new("/absolute/path/to/tokens.json");
        assert_eq!(
            resolve_path(abs_path, base),
            PathBuf::from("/absolute/path/to/tokens.json")
        );
    }

    #[test]
    fn resolve_path_relative_path_joined_onto_base() {
        let result = resolve_path(Path::new("tokens/a.json"), Path::new("/repo"));
        assert_eq!(result, PathBuf::from("/repo/tokens/a.json"));
    }

    #[test]
    fn resolve_path_empty_base_keeps_relative_path() {
        let result = resolve_path(Path::new("tokens/a.json"), Path::new(""));
        assert_eq!(result, PathBuf::from("tokens/a.json"));
    }

    #[test]
    fn parse_max_depth_rejects_zero() {
        assert_eq!(parse_max_depth("5"), Ok(5));
        assert!(parse_max_depth("0").unwrap_err().contains("at least 1"));
        assert!(parse_max_depth("-1").is_err());
    }

    #[test]
    fn load_tokens_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_tokens(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }

    #[test]
    fn load_schema_rejects_malformed_allow_list() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schema.json");
        std::fs::write(&file, r#"{"components": {"button": {"stateMatrix": {"default": "rest"}}}}"#)
            .unwrap();
        assert!(load_schema(&file).is_err());
    }
}
