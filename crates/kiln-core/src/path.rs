//! # Token Paths
//!
//! A [`TokenPath`] is the sequence of object keys leading from the document
//! root to a node. Its textual form joins the keys with `.`, which is also
//! the syntax inside alias braces.

use serde::{Serialize, Serializer};

use crate::layer::Layer;

/// Key that marks a primitive subtree when it appears as an interior
/// segment.
const PRIMITIVE_SEGMENT: &str = "primitive";

/// Prefix of the locked primitive root key, e.g. `🔒primitive font&color`.
const LOCKED_PRIMITIVE_PREFIX: &str = "🔒primitive";

/// Dotted path into a token document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a dotted path. The empty string parses to the root path.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self(dotted.split('.').map(str::to_string).collect())
    }

    /// Build a path from individual keys.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The keys of this path, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with `key` appended.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    /// Returns true if this path begins with `prefix` and has at least one
    /// more segment after it.
    pub fn is_strictly_under(&self, prefix: &[&str]) -> bool {
        self.0.len() > prefix.len() && self.0.iter().zip(prefix).all(|(a, b)| a == b)
    }

    /// Returns true if this path addresses the primitive layer.
    ///
    /// A path is primitive when an interior segment (neither root nor last)
    /// is `primitive`, or when its root segment is the locked primitive
    /// collection.
    pub fn is_primitive(&self) -> bool {
        let locked_root = self
            .0
            .first()
            .is_some_and(|s| s.starts_with(LOCKED_PRIMITIVE_PREFIX));
        let marker = self.0.len() > 2
            && self.0[1..self.0.len() - 1]
                .iter()
                .any(|s| s == PRIMITIVE_SEGMENT);
        locked_root || marker
    }

    /// Derive the governance layer from the path shape alone.
    pub fn layer(&self) -> Layer {
        if self.is_strictly_under(&["color", "semantic"]) {
            Layer::Semantic
        } else if self.is_strictly_under(&["color", "component"]) {
            Layer::Component
        } else if self.is_primitive() {
            Layer::Primitive
        } else {
            Layer::Unknown
        }
    }
}

impl std::fmt::Display for TokenPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for TokenPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl Serialize for TokenPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
