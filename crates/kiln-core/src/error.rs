//! # Error Types
//!
//! Errors raised while loading and normalizing token and schema documents.
//! Lint findings are not errors; they are reported as violations by
//! `kiln-lint`.

use thiserror::Error;

/// Top-level error type for document handling.
#[derive(Error, Debug)]
pub enum KilnError {
    /// A token or schema document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The document parsed as JSON but has the wrong shape.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// An identifier outside a closed vocabulary.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// Vocabulary name, e.g. "layer".
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
