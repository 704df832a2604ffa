//! # Token Statistics
//!
//! Leaf counts per layer, as printed before a release.

use kiln_core::{Layer, TokenTree};
use serde::Serialize;

use crate::walker::walk;

/// Leaf counts by path-derived layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenStats {
    /// All leaves.
    pub total: usize,
    /// Leaves in the primitive layer.
    pub primitive: usize,
    /// Leaves under `color.semantic`.
    pub semantic: usize,
    /// Leaves under `color.component`.
    pub component: usize,
    /// Leaves outside every layer.
    pub unknown: usize,
}

/// Count the leaves of `tree` by layer.
pub fn token_stats(tree: &TokenTree) -> TokenStats {
    walk(tree).fold(TokenStats::default(), |mut stats, (path, _)| {
        stats.total += 1;
        match path.layer() {
            Layer::Primitive => stats.primitive += 1,
            Layer::Semantic => stats.semantic += 1,
            Layer::Component => stats.component += 1,
            Layer::Unknown => stats.unknown += 1,
        }
        stats
    })
}

impl std::fmt::Display for TokenStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} total (semantic={}, component={}, primitive={}, unknown={})",
            self.total, self.semantic, self.component, self.primitive, self.unknown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counts_by_layer() {
        let leaf = json!({"type": "color", "value": "#fff"});
        let tree = TokenTree::from_json(json!({
            "🔒primitive font&color": {"gray": {"100": leaf, "200": leaf}},
            "color": {
                "semantic": {"bg": leaf},
                "component": {"button": {"primary": {"background": {"rest": leaf}}}}
            },
            "font": {"family": leaf}
        }))
        .unwrap();
        let stats = token_stats(&tree);
        assert_eq!(
            stats,
            TokenStats {
                total: 5,
                primitive: 2,
                semantic: 1,
                component: 1,
                unknown: 1
            }
        );
        assert_eq!(
            stats.to_string(),
            "5 total (semantic=1, component=1, primitive=2, unknown=1)"
        );
    }
}
