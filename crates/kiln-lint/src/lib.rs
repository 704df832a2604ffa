//! # kiln-lint: Token Validation & Alias Resolution
//!
//! The two operations every Kiln consumer calls:
//!
//! - [`lint`]: validate a token document against a component schema and
//!   return every violation in one pass.
//! - [`resolve`]: follow an alias chain from a path to its concrete value.
//!
//! ## Pipeline
//!
//! 1. [`walker`] enumerates `(path, leaf)` pairs.
//! 2. [`validator`] runs the META, TYPO, RAW, REF, and POLICY checks on each
//!    leaf.
//! 3. [`schema_check`] runs the SCHEMA allow-list checks per component.
//!
//! ## Error Model
//!
//! Lint findings are data ([`Violation`]), never errors. Resolution failures
//! are errors ([`ResolveError`]) and must be surfaced by the caller rather
//! than replaced with a fallback value.
//!
//! ## Crate Policy
//!
//! - Depends only on `kiln-core` internally.
//! - No global state; documents and options are passed explicitly, so calls
//!   are reentrant.

pub mod engine;
pub mod resolver;
pub mod schema_check;
pub mod stats;
pub mod validator;
pub mod violation;
pub mod walker;

pub use engine::{lint, lint_with, LintOptions};
pub use resolver::{resolve, resolve_with_depth, ResolveError, Resolved, DEFAULT_MAX_DEPTH};
pub use schema_check::check_schema;
pub use stats::{token_stats, TokenStats};
pub use validator::validate_leaf;
pub use violation::{GateError, LintResult, Violation, ViolationKind};
pub use walker::{walk, Leaves};
