//! # Violations and Lint Results
//!
//! Every lint finding is a [`Violation`] tagged with a [`ViolationKind`].
//! The kind tags are a closed, stable vocabulary: downstream tooling matches
//! on the serialized tag (`"RAW"`, `"REF"`, ...), so a tag's meaning never
//! changes and new checks get new tags.

use std::fmt;
use std::str::FromStr;

use kiln_core::{KilnError, TokenPath};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-stable category of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViolationKind {
    /// Raw color literal in a semantic or component token.
    Raw,
    /// Alias reference that does not resolve.
    Ref,
    /// Component token aliasing a primitive without a valid exception.
    Policy,
    /// Missing or inconsistent `meta`.
    Meta,
    /// Property or state not declared in the component schema.
    Schema,
    /// The `.aplha.` misspelling in a value.
    Typo,
}

impl ViolationKind {
    /// All kinds, in report order.
    pub fn all() -> &'static [ViolationKind] {
        &[
            Self::Raw,
            Self::Ref,
            Self::Policy,
            Self::Meta,
            Self::Schema,
            Self::Typo,
        ]
    }

    /// The stable tag, e.g. `"RAW"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Ref => "REF",
            Self::Policy => "POLICY",
            Self::Meta => "META",
            Self::Schema => "SCHEMA",
            Self::Typo => "TYPO",
        }
    }

    /// Fixed instruction shown next to a finding of this kind in the
    /// self-verification report.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::Raw => {
                "Replace the raw color with a {braced} alias to the primitive token that holds the same color."
            }
            Self::Ref => {
                "Check the reference path and make sure the target token exists in the token document."
            }
            Self::Policy => {
                "Route the component token through a semantic token, or add meta.exceptionCategory (disabled|overlay_alpha|fixed_color)."
            }
            Self::Meta => {
                "Add meta: { layer, policy } to the token and make meta.layer match its location."
            }
            Self::Schema => {
                "The property or state is not declared for this component. Check propertyAllowlist / stateMatrix in the component schema."
            }
            Self::Typo => "Fix the '.aplha.' typo to '.alpha.'.",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationKind {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| KilnError::UnknownVariant {
                kind: "violation kind",
                value: s.to_string(),
            })
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    /// Category tag.
    pub kind: ViolationKind,
    /// Path of the offending leaf or schema key.
    pub path: TokenPath,
    /// Human-readable explanation.
    pub detail: String,
}

impl Violation {
    /// Create a violation.
    pub fn new(kind: ViolationKind, path: TokenPath, detail: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.path, self.detail)
    }
}

/// Returned by [`LintResult::into_gate`] when a lint run did not pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The document has violations; downstream work must stop.
    #[error("token lint failed with {count} violation(s)")]
    LintFailed {
        /// Number of violations found.
        count: usize,
    },
}

/// Outcome of a lint run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    /// True when no violations were found.
    pub passed: bool,
    /// All findings, leaf checks first, then schema checks.
    pub violations: Vec<Violation>,
}

impl LintResult {
    /// Build a result from the accumulated findings.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }

    /// Number of findings of `kind`.
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Findings reported at `path`.
    pub fn at_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.path.to_string() == path)
    }

    /// Convert into a hard gate for release-style consumers.
    pub fn into_gate(self) -> Result<(), GateError> {
        if self.passed {
            Ok(())
        } else {
            Err(GateError::LintFailed {
                count: self.violations.len(),
            })
        }
    }
}
