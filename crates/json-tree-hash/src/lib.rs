//! json-tree-hash — content-derived identifiers for JSON trees.
//!
//! Computes a deterministic hash for a JSON-like tree and embeds it into the
//! tree itself under the reserved key `_hash` at every nesting level. Equal
//! trees hash equally regardless of object key order or float noise; a hashed
//! tree can later be re-validated against its embedded hashes to detect
//! tampering.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use json_tree_hash::{apply_hashes, validate, ApplyConfig};
//!
//! let mut doc = json!({"key": "value"});
//! apply_hashes(&mut doc, &ApplyConfig::default()).unwrap();
//! assert_eq!(doc["_hash"], "5Dq88zdSRIOcAS-WM_lYYt");
//! validate(&doc).unwrap();
//! ```

pub mod canon;
pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod num;
pub mod text;
pub mod validate;

pub use config::{ApplyConfig, DigestAlgorithm, HashConfig, NumberConfig};
pub use digest::{compute_digest, compute_digest_with};
pub use error::TreeHashError;
pub use hasher::{apply_hashes, apply_hashes_cloned, MAX_DEPTH};
pub use text::{apply_hashes_to_text, apply_hashes_to_text_with, validate_text};
pub use validate::{validate, validate_with};

/// Reserved object key holding a node's embedded hash.
///
/// Its value is always a string and never contributes to the hash of the
/// object that carries it.
pub const HASH_KEY: &str = "_hash";
