//! # CLI Configuration
//!
//! Optional `kiln.yaml` naming the default documents and the alias hop
//! bound:
//!
//! ```yaml
//! tokens: tokens/kiln.with_meta.json
//! schema: schema/component-schema.json
//! max_depth: 20
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file. Without a config file the defaults apply relative to the current
//! directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use kiln_lint::{LintOptions, DEFAULT_MAX_DEPTH};
use serde::Deserialize;

/// File name looked up in the current directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "kiln.yaml";

/// Default token document location.
pub const DEFAULT_TOKENS_PATH: &str = "tokens/kiln.with_meta.json";

/// Default schema document location.
pub const DEFAULT_SCHEMA_PATH: &str = "schema/component-schema.json";

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KilnConfig {
    /// Token document path.
    pub tokens: PathBuf,
    /// Schema document path.
    pub schema: PathBuf,
    /// Alias hop bound.
    pub max_depth: usize,
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self {
            tokens: PathBuf::from(DEFAULT_TOKENS_PATH),
            schema: PathBuf::from(DEFAULT_SCHEMA_PATH),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl KilnConfig {
    /// Read a config file and resolve its paths against the file's directory.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid YAML, has unknown keys,
    /// or sets `max_depth` to zero.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let mut config: KilnConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        if config.max_depth == 0 {
            bail!("invalid config file {}: max_depth must be at least 1", path.display());
        }

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.tokens = crate::resolve_path(&config.tokens, base);
        config.schema = crate::resolve_path(&config.schema, base);
        Ok(config)
    }

    /// Pick the config for this invocation: the explicit file if given,
    /// else `kiln.yaml` in `cwd` if present, else defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(config = %path.display(), "loading explicit config");
            return Self::load(path);
        }
        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(config = %candidate.display(), "loading discovered config");
            return Self::load(&candidate);
        }
        tracing::debug!("no config file; using defaults");
        Ok(Self::default())
    }

    /// Options handed to the lint engine.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            max_depth: self.max_depth,
        }
    }
}
