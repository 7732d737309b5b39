//! Validator — checks a tree against its embedded hashes.
//!
//! Recomputes, without mutating anything, the hash every object should carry
//! from its own fields and its children's stored hashes, and compares it with
//! the hash the object actually carries. The walk is depth-first and each
//! level is checked before its children, so the first reported failure is the
//! shallowest one: tampering with a leaf surfaces at the nearest enclosing
//! object, not at the root.
//!
//! Paths in errors are slash-delimited (`""` = root, `/key`, `/index`).

use serde_json::{Map, Value};

use json_tree_hash_util::value_kind;

use crate::config::ApplyConfig;
use crate::error::TreeHashError;
use crate::hasher::{self, MissingChild, MAX_DEPTH};
use crate::HASH_KEY;

/// Validate a hashed tree with the default configuration.
///
/// Fails on the first problem found: `MissingHash` when an object lacks
/// `_hash`, `HashMismatch` when a stored hash disagrees with the recomputed
/// one. Returns normally when every embedded hash checks out.
pub fn validate(tree: &Value) -> Result<(), TreeHashError> {
    validate_with(tree, &ApplyConfig::default())
}

/// Validate with an explicit configuration.
///
/// The configuration must match the one the tree was hashed with (in
/// particular `floating_point_precision` and the digest settings); its
/// `update_existing_hashes`, `recursive` and `throw_on_wrong_hash` flags are
/// irrelevant here.
pub fn validate_with(tree: &Value, config: &ApplyConfig) -> Result<(), TreeHashError> {
    match tree {
        Value::Object(map) => check_object(map, config, "", 0),
        other => Err(TreeHashError::RootNotObject {
            kind: value_kind(other),
        }),
    }
}

fn check_object(
    map: &Map<String, Value>,
    config: &ApplyConfig,
    path: &str,
    depth: usize,
) -> Result<(), TreeHashError> {
    let expected = hasher::object_hash(map, config, path, depth, MissingChild::Recompute)?;
    match hasher::stored_hash(map)? {
        None => {
            return Err(TreeHashError::MissingHash {
                path: path.to_owned(),
            })
        }
        Some(found) if found != expected => {
            return Err(TreeHashError::HashMismatch {
                found: found.to_owned(),
                expected,
                path: path.to_owned(),
            })
        }
        Some(_) => {}
    }
    for (key, child) in map {
        if key == HASH_KEY {
            continue;
        }
        let child_path = format!("{path}/{key}");
        match child {
            Value::Object(inner) => check_object(inner, config, &child_path, depth + 1)?,
            Value::Array(inner) => check_array(inner, config, &child_path, depth + 1)?,
            _ => {}
        }
    }
    Ok(())
}

fn check_array(
    arr: &[Value],
    config: &ApplyConfig,
    path: &str,
    depth: usize,
) -> Result<(), TreeHashError> {
    if depth >= MAX_DEPTH {
        return Err(TreeHashError::TooDeep { limit: MAX_DEPTH });
    }
    for (i, item) in arr.iter().enumerate() {
        let item_path = format!("{path}/{i}");
        match item {
            Value::Object(inner) => check_object(inner, config, &item_path, depth + 1)?,
            Value::Array(inner) => check_array(inner, config, &item_path, depth + 1)?,
            _ => {}
        }
    }
    Ok(())
}
