//! Error taxonomy for the hashing pipeline.
//!
//! Every error is synchronous and fail-fast: the first detected problem
//! aborts the whole call, no partial results are produced.

use json_tree_hash_util::UnsupportedValue;

/// Tree paths in errors are slash-delimited: the empty string is the root,
/// object keys append `/key`, array indices append `/index`.
#[derive(Debug, thiserror::Error)]
pub enum TreeHashError {
    /// A value outside {string, integer, float, boolean, object, array} was
    /// encountered during copy, canonicalization, or hashing.
    #[error("unsupported value type: {kind}")]
    UnsupportedType { kind: &'static str },

    /// NaN/Infinity, or a value rejected by the numeric audit.
    #[error("invalid number: {reason}")]
    InvalidNumber { reason: String },

    /// A stored hash disagrees with the freshly computed one.
    #[error("hash mismatch at \"{path}\": found \"{found}\", expected \"{expected}\"")]
    HashMismatch {
        found: String,
        expected: String,
        path: String,
    },

    /// An object that should carry `_hash` does not.
    #[error("missing _hash at \"{path}\"")]
    MissingHash { path: String },

    /// The root of a hashed tree must always be an object.
    #[error("root of the tree must be an object, got {kind}")]
    RootNotObject { kind: &'static str },

    /// Nesting deeper than the recursion cap.
    #[error("tree exceeds the maximum nesting depth of {limit}")]
    TooDeep { limit: usize },

    /// JSON text could not be decoded or encoded.
    #[error("invalid JSON text: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<UnsupportedValue> for TreeHashError {
    fn from(err: UnsupportedValue) -> Self {
        TreeHashError::UnsupportedType { kind: err.kind }
    }
}
