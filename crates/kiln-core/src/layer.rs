//! # Token Layers and Exception Categories
//!
//! Two closed vocabularies used by the policy checks.
//!
//! ## Layers
//!
//! | Layer | Location | Role |
//! |-------|----------|------|
//! | `primitive` | a path with a primitive marker segment | raw constants |
//! | `semantic` | `color.semantic.*` | intent-named bridge to primitives |
//! | `component` | `color.component.*` | UI-element-specific tokens |
//! | `unknown` | anything else | not governed |
//!
//! ## Exception Categories
//!
//! A component token may alias a primitive directly only when its
//! `meta.exceptionCategory` is one of `disabled`, `overlay_alpha`, or
//! `fixed_color`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::KilnError;

/// The governance layer of a token, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Raw constant values.
    Primitive,
    /// Intent-named tokens under `color.semantic`.
    Semantic,
    /// Element-specific tokens under `color.component`.
    Component,
    /// Not under any recognized layer root.
    Unknown,
}

impl Layer {
    /// Returns all layers in declaration order.
    pub fn all() -> &'static [Layer] {
        &[Self::Primitive, Self::Semantic, Self::Component, Self::Unknown]
    }

    /// Returns the lowercase identifier used in `meta.layer`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Semantic => "semantic",
            Self::Component => "component",
            Self::Unknown => "unknown",
        }
    }

    /// Semantic and component tokens must carry `meta` and must not hold
    /// raw color literals.
    pub fn is_governed(&self) -> bool {
        matches!(self, Self::Semantic | Self::Component)
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primitive" => Ok(Self::Primitive),
            "semantic" => Ok(Self::Semantic),
            "component" => Ok(Self::Component),
            "unknown" => Ok(Self::Unknown),
            other => Err(KilnError::UnknownVariant {
                kind: "layer",
                value: other.to_string(),
            }),
        }
    }
}

/// Declared reason a component token references a primitive directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionCategory {
    /// Disabled-state colors that intentionally sit outside the semantic ramp.
    Disabled,
    /// Translucent overlays built from primitive alpha steps.
    OverlayAlpha,
    /// Colors that must never follow theme remapping.
    FixedColor,
}

impl ExceptionCategory {
    /// Returns every allowed category.
    pub fn all() -> &'static [ExceptionCategory] {
        &[Self::Disabled, Self::OverlayAlpha, Self::FixedColor]
    }

    /// Returns the snake_case identifier used in `meta.exceptionCategory`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::OverlayAlpha => "overlay_alpha",
            Self::FixedColor => "fixed_color",
        }
    }
}

impl std::fmt::Display for ExceptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExceptionCategory {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "overlay_alpha" => Ok(Self::OverlayAlpha),
            "fixed_color" => Ok(Self::FixedColor),
            other => Err(KilnError::UnknownVariant {
                kind: "exception category",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_as_str_roundtrip() {
        for layer in Layer::all() {
            let parsed: Layer = layer.as_str().parse().unwrap();
            assert_eq!(*layer, parsed);
        }
    }

    #[test]
    fn test_layer_from_str_invalid() {
        assert!("Semantic".parse::<Layer>().is_err());
        assert!("".parse::<Layer>().is_err());
    }

    #[test]
    fn test_governed_layers() {
        assert!(Layer::Semantic.is_governed());
        assert!(Layer::Component.is_governed());
        assert!(!Layer::Primitive.is_governed());
        assert!(!Layer::Unknown.is_governed());
    }

    #[test]
    fn test_exception_category_roundtrip() {
        for category in ExceptionCategory::all() {
            let parsed: ExceptionCategory = category.as_str().parse().unwrap();
            assert_eq!(*category, parsed);
        }
        assert_eq!(ExceptionCategory::all().len(), 3);
    }

    #[test]
    fn test_exception_category_rejects_unknown() {
        let err = "bogus".parse::<ExceptionCategory>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert!("Disabled".parse::<ExceptionCategory>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for category in ExceptionCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        for layer in Layer::all() {
            let json = serde_json::to_string(layer).unwrap();
            assert_eq!(json, format!("\"{}\"", layer.as_str()));
        }
    }
}
