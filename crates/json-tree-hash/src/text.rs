//! JSON-text entry points.
//!
//! Thin wrappers pairing the hasher and validator with `serde_json` as the
//! text codec. Decoding keeps object key order, so re-encoded output differs
//! from the input only by the inserted `_hash` fields.

use serde_json::Value;

use crate::config::ApplyConfig;
use crate::error::TreeHashError;
use crate::hasher::apply_hashes;
use crate::validate;

/// Decode JSON text, embed hashes with the default configuration, and
/// re-encode.
pub fn apply_hashes_to_text(text: &str) -> Result<String, TreeHashError> {
    apply_hashes_to_text_with(text, &ApplyConfig::default())
}

/// Decode JSON text, embed hashes, and re-encode, with an explicit
/// configuration.
pub fn apply_hashes_to_text_with(
    text: &str,
    config: &ApplyConfig,
) -> Result<String, TreeHashError> {
    let mut tree: Value = serde_json::from_str(text)?;
    apply_hashes(&mut tree, config)?;
    Ok(serde_json::to_string(&tree)?)
}

/// Decode JSON text and validate its embedded hashes.
pub fn validate_text(text: &str) -> Result<(), TreeHashError> {
    let tree: Value = serde_json::from_str(text)?;
    validate::validate(&tree)
}
