//! # Token Tree
//!
//! The normalized, immutable form of a token document.
//!
//! A raw JSON document is converted once into [`Node`] values:
//!
//! - an object holding both `type` and `value` keys is a [`Node::Leaf`];
//! - any other object is a [`Node::Branch`] keyed by child name;
//! - every non-object value is a [`Node::Scalar`].
//!
//! Leaves have no children. Keys inside a leaf object other than `type`,
//! `value`, and `meta` are not retained.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::KilnError;
use crate::path::TokenPath;

/// Governance metadata attached to a leaf.
///
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMeta {
    /// Declared layer (`meta.layer`), compared against the path layer.
    pub layer: Option<String>,
    /// Free-form policy note (`meta.policy`).
    pub policy: Option<String>,
    /// Declared primitive-reference exception (`meta.exceptionCategory`).
    pub exception_category: Option<String>,
}

impl TokenMeta {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                layer: map.get("layer").and_then(scalar_text),
                policy: map.get("policy").and_then(scalar_text),
                exception_category: map.get("exceptionCategory").and_then(scalar_text),
            },
            _ => Self::default(),
        }
    }
}

/// A terminal token: `{ type, value, meta? }`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    /// The `type` field, e.g. `"color"`.
    pub token_type: Value,
    /// The `value` field: a concrete value or an alias reference string.
    pub value: Value,
    /// The `meta` field, if present and not falsy.
    pub meta: Option<TokenMeta>,
}

impl TokenLeaf {
    /// The value as a string, if it is one.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// The declared exception category, if any.
    pub fn exception_category(&self) -> Option<&str> {
        self.meta.as_ref()?.exception_category.as_deref()
    }

    /// The declared `meta.layer`, if any.
    pub fn declared_layer(&self) -> Option<&str> {
        self.meta.as_ref()?.layer.as_deref()
    }
}

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A token definition.
    Leaf(TokenLeaf),
    /// An internal grouping node.
    Branch(BTreeMap<String, Node>),
    /// Any non-object JSON value.
    Scalar(Value),
}

impl Node {
    /// Normalize a JSON value into a node tree.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("type") && map.contains_key("value") => {
                let token_type = map.remove("type").unwrap_or(Value::Null);
                let value = map.remove("value").unwrap_or(Value::Null);
                let meta = map
                    .get("meta")
                    .filter(|m| !is_falsy(m))
                    .map(TokenMeta::from_json);
                Node::Leaf(TokenLeaf {
                    token_type,
                    value,
                    meta,
                })
            }
            Value::Object(map) => Node::Branch(
                map.into_iter()
                    .map(|(k, v)| (k, Node::from_json(v)))
                    .collect(),
            ),
            other => Node::Scalar(other),
        }
    }

    /// Look up a direct child. Only branches have children.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Branch(children) => children.get(key),
            _ => None,
        }
    }

    /// The children of a branch, or `None` for leaves and scalars.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Branch(children) => Some(children),
            _ => None,
        }
    }

    /// The leaf payload, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Returns true if this node is a leaf or has a leaf anywhere below it.
    pub fn contains_leaf(&self) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Branch(children) => children.values().any(Node::contains_leaf),
            Node::Scalar(_) => false,
        }
    }
}

/// Falsy `meta` values (`null`, `false`, `0`, `""`) count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// An immutable, normalized token document.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTree {
    root: Node,
}

impl TokenTree {
    /// Build a tree from a parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns `KilnError::InvalidDocument` if the root is not a JSON object.
    pub fn from_json(value: Value) -> Result<Self, KilnError> {
        if !value.is_object() {
            return Err(KilnError::InvalidDocument(
                "token document root must be a JSON object".to_string(),
            ));
        }
        Ok(Self {
            root: Node::from_json(value),
        })
    }

    /// Parse a token document from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, KilnError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json(value)
    }

    /// Read and parse a token document from disk.
    ///
    /// # Errors
    ///
    /// Returns `KilnError::DocumentLoad` if the file cannot be read or is not
    /// valid JSON, and `KilnError::InvalidDocument` for a non-object root.
    pub fn load(path: &Path) -> Result<Self, KilnError> {
        let content = std::fs::read_to_string(path).map_err(|e| KilnError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| KilnError::DocumentLoad {
                path: path.display().to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;
        Self::from_json(value)
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Follow `path` key by key from the root.
    ///
    /// Returns `None` as soon as a segment is missing or the walk reaches a
    /// leaf or scalar before the path is exhausted.
    pub fn get_by_path(&self, path: &TokenPath) -> Option<&Node> {
        path.segments()
            .iter()
            .try_fold(&self.root, |node, key| node.get(key))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_detection_requires_type_and_value() {
        let node = Node::from_json(json!({"type": "color", "value": "#fff"}));
        assert!(node.as_leaf().is_some());

        let only_value = Node::from_json(json!({"value": "#fff"}));
        assert!(matches!(only_value, Node::Branch(_)));

        let scalar = Node::from_json(json!("#fff"));
        assert!(matches!(scalar, Node::Scalar(_)));
    }

    #[test]
    fn test_meta_parsing() {
        let node = Node::from_json(json!({
            "type": "color",
            "value": "{color.primitive.gray.500}",
            "meta": {"layer": "component", "exceptionCategory": "disabled", "policy": ""}
        }));
        let leaf = node.as_leaf().unwrap();
        assert_eq!(leaf.declared_layer(), Some("component"));
        assert_eq!(leaf.exception_category(), Some("disabled"));
        assert_eq!(leaf.meta.as_ref().unwrap().policy, None);
    }

    #[test]
    fn test_null_meta_is_absent() {
        let node = Node::from_json(json!({"type": "color", "value": "#fff", "meta": null}));
        assert!(node.as_leaf().unwrap().meta.is_none());
    }

    #[test]
    fn test_falsy_meta_is_absent() {
        for meta in [json!(false), json!(0), json!(0.0), json!("")] {
            let node = Node::from_json(json!({"type": "color", "value": "#fff", "meta": meta}));
            assert!(node.as_leaf().unwrap().meta.is_none(), "meta={meta}");
        }
    }

    #[test]
    fn test_non_object_meta_is_present_but_empty() {
        let node = Node::from_json(json!({"type": "color", "value": "#fff", "meta": true}));
        assert_eq!(node.as_leaf().unwrap().meta, Some(TokenMeta::default()));
    }

    #[test]
    fn test_get_by_path() {
        let tree = TokenTree::from_json(json!({
            "color": {"semantic": {"bg": {"type": "color", "value": "#000"}}}
        }))
        .unwrap();
        let hit = tree.get_by_path(&TokenPath::parse("color.semantic.bg"));
        assert!(hit.and_then(Node::as_leaf).is_some());
        assert!(tree.get_by_path(&TokenPath::parse("color.semantic.fg")).is_none());
        // No descent through a leaf.
        assert!(tree
            .get_by_path(&TokenPath::parse("color.semantic.bg.value"))
            .is_none());
        assert!(matches!(tree.get_by_path(&TokenPath::root()), Some(Node::Branch(_))));
    }

    #[test]
    fn test_contains_leaf() {
        let empty = Node::from_json(json!({"rest": {}, "hover": {"x": 1}}));
        assert!(!empty.contains_leaf());
        let deep = Node::from_json(json!({"a": {"b": {"type": "color", "value": "#fff"}}}));
        assert!(deep.contains_leaf());
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = TokenTree::from_json(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, KilnError::InvalidDocument(_)));
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tokens.json");
        std::fs::write(&file, "{ not json").unwrap();
        let err = TokenTree::load(&file).unwrap_err();
        match err {
            KilnError::DocumentLoad { path, reason } => {
                assert!(path.ends_with("tokens.json"));
                assert!(reason.contains("invalid JSON"));
            }
            other => panic!("Expected DocumentLoad, got: {other}"),
        }
    }
}
