//! # Component Schema Document
//!
//! Declares, per component, the variant and subpart axes and the property
//! and state names allowed below each subpart.
//!
//! ```json
//! {
//!   "components": {
//!     "button": {
//!       "tokenMap": { "pathPattern": "color.component.button.{variant}.{property}.{state}" },
//!       "axes": { "variant": { "values": ["primary", "secondary"] } },
//!       "stateMatrix": { "default": ["rest", "hover", "active", "disabled"] },
//!       "propertyAllowlist": { "default": ["background", "border", "foreground"] }
//!     }
//!   }
//! }
//! ```
//!
//! Allow-lists are keyed by subpart name; a subpart without its own entry
//! falls back to the `default` entry, and a component with neither allows
//! nothing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::KilnError;

/// Key used for an undeclared subpart and for allow-list fallback.
pub const DEFAULT_SUBPART: &str = "default";

/// Top-level schema document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Component specifications keyed by component name.
    #[serde(default)]
    pub components: BTreeMap<String, ComponentSpec>,
}

/// Schema entry for one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Informational path template.
    #[serde(default)]
    pub token_map: Option<TokenMap>,
    /// Variant and subpart axes.
    #[serde(default)]
    pub axes: Axes,
    /// Allowed state names keyed by subpart.
    #[serde(default)]
    pub state_matrix: BTreeMap<String, Vec<String>>,
    /// Allowed property names keyed by subpart.
    #[serde(default)]
    pub property_allowlist: BTreeMap<String, Vec<String>>,
}

/// `tokenMap` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMap {
    /// Human-readable path template. Not interpreted.
    #[serde(default)]
    pub path_pattern: Option<String>,
}

/// `axes` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    /// Variant axis, e.g. `primary`, `danger`.
    #[serde(default)]
    pub variant: Option<Axis>,
    /// Subpart axis, e.g. `track`, `thumb`.
    #[serde(default)]
    pub subpart: Option<Axis>,
}

/// One axis: an ordered list of value names. A `null` entry stands for
/// "no path segment".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis values in declaration order.
    #[serde(default)]
    pub values: Vec<Option<String>>,
}

impl Axis {
    fn values_or_placeholder(axis: Option<&Axis>) -> Vec<Option<&str>> {
        match axis {
            Some(axis) if !axis.values.is_empty() => {
                axis.values.iter().map(|v| v.as_deref()).collect()
            }
            _ => vec![None],
        }
    }
}

impl ComponentSpec {
    /// Declared variant values, or a single `None` when the axis is absent.
    pub fn variants(&self) -> Vec<Option<&str>> {
        Axis::values_or_placeholder(self.axes.variant.as_ref())
    }

    /// Declared subpart values, or a single `None` when the axis is absent.
    pub fn subparts(&self) -> Vec<Option<&str>> {
        Axis::values_or_placeholder(self.axes.subpart.as_ref())
    }

    /// States allowed below a property of `subpart_key`.
    pub fn allowed_states(&self, subpart_key: &str) -> &[String] {
        lookup_with_default(&self.state_matrix, subpart_key)
    }

    /// Properties allowed directly below `subpart_key`.
    pub fn allowed_properties(&self, subpart_key: &str) -> &[String] {
        lookup_with_default(&self.property_allowlist, subpart_key)
    }
}

impl SchemaDocument {
    /// Parse a schema document from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, KilnError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a schema document from disk.
    ///
    /// # Errors
    ///
    /// Returns `KilnError::DocumentLoad` if the file cannot be read or does
    /// not match the schema document shape.
    pub fn load(path: &Path) -> Result<Self, KilnError> {
        let content = std::fs::read_to_string(path).map_err(|e| KilnError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        serde_json::from_str(&content).map_err(|e| KilnError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("invalid schema document: {e}"),
        })
    }
}

fn lookup_with_default<'a>(table: &'a BTreeMap<String, Vec<String>>, key: &str) -> &'a [String] {
    table
        .get(key)
        .or_else(|| table.get(DEFAULT_SUBPART))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
