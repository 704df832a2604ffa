//! # Alias Resolver
//!
//! Follows `{path}` indirection from a starting path to a concrete value.
//!
//! ## Semantics
//!
//! At each hop the node at the current path is fetched. A leaf contributes
//! its `value`; a bare string scalar contributes itself; anything else (or
//! nothing) fails with [`ResolveError::MissingToken`] naming that hop. An
//! alias value moves to the referenced path; any other value is terminal.
//!
//! The walk is bounded by `max_depth` hops. A reference cycle and an acyclic
//! chain that is too long both end in [`ResolveError::DepthExceeded`]; no
//! visited-set is kept.

use kiln_core::{strip_alias, Node, TokenPath, TokenTree};
use serde_json::Value;
use thiserror::Error;

/// Hop bound used when the caller does not supply one.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Why a resolution failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A hop landed on a path with no leaf or string value.
    #[error("missing token at {path}")]
    MissingToken {
        /// The path of the failing hop.
        path: String,
    },

    /// No terminal value within the hop bound.
    #[error("reference loop/depth exceeded at {path}")]
    DepthExceeded {
        /// The path resolution started from.
        path: String,
    },
}

/// A successfully resolved token.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Path of the node holding the terminal value.
    pub path: TokenPath,
    /// The terminal value.
    pub value: Value,
    /// Number of alias hops followed.
    pub hops: usize,
}

impl Resolved {
    /// The terminal value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Resolve `path` with the default hop bound.
pub fn resolve(tree: &TokenTree, path: &TokenPath) -> Result<Resolved, ResolveError> {
    resolve_with_depth(tree, path, DEFAULT_MAX_DEPTH)
}

/// Resolve `path`, following at most `max_depth` nodes.
pub fn resolve_with_depth(
    tree: &TokenTree,
    path: &TokenPath,
    max_depth: usize,
) -> Result<Resolved, ResolveError> {
    let mut current = path.clone();
    for hops in 0..max_depth {
        let value = tree
            .get_by_path(&current)
            .and_then(node_value)
            .ok_or_else(|| ResolveError::MissingToken {
                path: current.to_string(),
            })?;

        match value.as_str().and_then(strip_alias) {
            Some(next) => {
                tracing::trace!(from = %current, to = next, "following alias");
                current = TokenPath::parse(next);
            }
            None => {
                return Ok(Resolved {
                    path: current,
                    value: value.clone(),
                    hops,
                })
            }
        }
    }

    tracing::debug!(path = %path, max_depth, "alias chain did not terminate");
    Err(ResolveError::DepthExceeded {
        path: path.to_string(),
    })
}

fn node_value(node: &Node) -> Option<&Value> {
    match node {
        Node::Leaf(leaf) => Some(&leaf.value),
        Node::Scalar(value @ Value::String(_)) => Some(value),
        _ => None,
    }
}
