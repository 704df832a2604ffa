//! # kiln-core: Foundational Types for the Kiln Token Toolchain
//!
//! Defines the read-side data model shared by the linter, the resolver, and
//! the CLI. Every other `kiln-*` crate depends on `kiln-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One path type.** Dotted token paths are parsed once into a
//!    [`TokenPath`] segment sequence. Navigation goes through
//!    [`TokenTree::get_by_path`] and nothing else splits strings on `.`.
//!
//! 2. **Leaf-vs-branch decided at load time.** A JSON object with both a
//!    `type` and a `value` key becomes [`Node::Leaf`]; any other object becomes
//!    [`Node::Branch`]; everything else becomes [`Node::Scalar`]. Consumers
//!    `match` on the variant instead of re-probing keys.
//!
//! 3. **Layer is a function of path.** [`TokenPath::layer`] never consults
//!    `meta.layer`; the linter compares the two.
//!
//! 4. **Immutable documents.** [`TokenTree`] and [`SchemaDocument`] expose no
//!    mutation after construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kiln-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod grammar;
pub mod layer;
pub mod path;
pub mod schema;
pub mod tree;

pub use error::KilnError;
pub use grammar::{is_raw_color, strip_alias};
pub use layer::{ExceptionCategory, Layer};
pub use path::TokenPath;
pub use schema::{Axes, Axis, ComponentSpec, SchemaDocument, TokenMap, DEFAULT_SUBPART};
pub use tree::{Node, TokenLeaf, TokenMeta, TokenTree};
