//! # Lint Engine
//!
//! Composes the walker, leaf validator, and schema cross-checker into one
//! pass. Nothing short-circuits: every leaf is validated and every schema
//! component is checked, and all findings are returned together.

use kiln_core::{SchemaDocument, TokenTree};

use crate::resolver::DEFAULT_MAX_DEPTH;
use crate::schema_check::check_schema;
use crate::validator::validate_leaf;
use crate::violation::LintResult;
use crate::walker::walk;

/// Tunables for a lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOptions {
    /// Alias hop bound used by the REF check.
    pub max_depth: usize,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Lint `tokens` against `schema` with default options.
pub fn lint(tokens: &TokenTree, schema: &SchemaDocument) -> LintResult {
    lint_with(tokens, schema, &LintOptions::default())
}

/// Lint `tokens` against `schema`.
pub fn lint_with(tokens: &TokenTree, schema: &SchemaDocument, options: &LintOptions) -> LintResult {
    let mut violations = Vec::new();
    let mut leaf_count = 0usize;

    for (path, leaf) in walk(tokens) {
        leaf_count += 1;
        violations.extend(validate_leaf(tokens, &path, leaf, options.max_depth));
    }
    let leaf_violations = violations.len();

    violations.extend(check_schema(tokens, schema));

    tracing::info!(
        leaves = leaf_count,
        components = schema.components.len(),
        leaf_violations,
        schema_violations = violations.len() - leaf_violations,
        "token lint finished"
    );

    LintResult::from_violations(violations)
}
