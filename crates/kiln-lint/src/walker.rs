//! # Tree Walker
//!
//! Depth-first enumeration of every leaf in a token tree together with its
//! path. Branches are descended; scalars are skipped. The traversal borrows
//! the tree and can be restarted by calling [`walk`] again.

use kiln_core::{Node, TokenLeaf, TokenPath, TokenTree};

/// Iterator over `(path, leaf)` pairs. Created by [`walk`].
#[derive(Debug)]
pub struct Leaves<'a> {
    stack: Vec<(TokenPath, &'a Node)>,
}

/// Enumerate every leaf of `tree`.
///
/// Children are visited in key order.
pub fn walk(tree: &TokenTree) -> Leaves<'_> {
    Leaves {
        stack: vec![(TokenPath::root(), tree.root())],
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (TokenPath, &'a TokenLeaf);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                Node::Leaf(leaf) => return Some((path, leaf)),
                Node::Branch(children) => {
                    // Reverse so the smallest key is popped first.
                    for (key, child) in children.iter().rev() {
                        self.stack.push((path.child(key), child));
                    }
                }
                Node::Scalar(_) => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(tree: &TokenTree) -> Vec<String> {
        walk(tree).map(|(p, _)| p.to_string()).collect()
    }

    #[test]
    fn test_walk_emits_every_leaf() {
        let tree = TokenTree::from_json(json!({
            "color": {
                "primitive": {"blue": {"500": {"type": "color", "value": "#0000ff"}}},
                "semantic": {
                    "bg": {"type": "color", "value": "{color.primitive.blue.500}"},
                    "fg": {"default": {"type": "color", "value": "#000"}}
                }
            }
        }))
        .unwrap();
        assert_eq!(
            paths(&tree),
            [
                "color.primitive.blue.500",
                "color.semantic.bg",
                "color.semantic.fg.default"
            ]
        );
    }

    #[test]
    fn test_walk_skips_scalars_and_empty_branches() {
        let tree = TokenTree::from_json(json!({
            "$schema": "https://example.invalid/tokens.json",
            "version": 3,
            "empty": {},
            "x": {"type": "color", "value": "#fff"}
        }))
        .unwrap();
        assert_eq!(paths(&tree), ["x"]);
    }

    #[test]
    fn test_walk_does_not_descend_into_leaves() {
        let tree = TokenTree::from_json(json!({
            "x": {"type": "color", "value": "#fff", "meta": {"type": "t", "value": "v"}}
        }))
        .unwrap();
        assert_eq!(paths(&tree), ["x"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let tree = TokenTree::from_json(json!({"a": {"type": "c", "value": "1"}})).unwrap();
        assert_eq!(paths(&tree), paths(&tree));
    }
}
