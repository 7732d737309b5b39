//! Tree hasher — walks a tree bottom-up and embeds a `_hash` in every object.
//!
//! A child object contributes to its parent's canonical form only through its
//! own hash string; arrays are flattened (nested objects become their hashes,
//! nested arrays recurse, scalar elements become their stringified canonical
//! text). This keeps hashing compositional and the canonical string bounded.

use serde_json::{Map, Value};

use json_tree_hash_util::{clone_checked, value_kind};

use crate::canon;
use crate::config::ApplyConfig;
use crate::digest;
use crate::error::TreeHashError;
use crate::num;
use crate::HASH_KEY;

/// Recursion cap on tree depth. Deeper input fails with `TooDeep`.
///
/// Each level costs several stack frames in the recursive walk; the cap is
/// low enough that the guard fires while still inside a default 2 MiB
/// thread stack.
pub const MAX_DEPTH: usize = 128;

/// How a child object without a `_hash` is treated while building a
/// hashing view.
#[derive(Clone, Copy)]
pub(crate) enum MissingChild {
    /// Fail with `MissingHash` at the child's path.
    Fail,
    /// Recursively compute the hash the child should carry. Used by the
    /// validator, which never mutates the tree it checks.
    Recompute,
}

/// Embed hashes into `root` in place. The root must be an object.
pub fn apply_hashes(root: &mut Value, config: &ApplyConfig) -> Result<(), TreeHashError> {
    match root {
        Value::Object(map) => hash_object(map, config, "", 0),
        other => Err(TreeHashError::RootNotObject {
            kind: value_kind(other),
        }),
    }
}

/// Embed hashes into an independent deep copy of `root`, leaving the input
/// untouched. The copy itself can fail on unsupported values.
pub fn apply_hashes_cloned(root: &Value, config: &ApplyConfig) -> Result<Value, TreeHashError> {
    if !root.is_object() {
        return Err(TreeHashError::RootNotObject {
            kind: value_kind(root),
        });
    }
    let mut copy = clone_checked(root)?;
    apply_hashes(&mut copy, config)?;
    Ok(copy)
}

fn hash_object(
    map: &mut Map<String, Value>,
    config: &ApplyConfig,
    path: &str,
    depth: usize,
) -> Result<(), TreeHashError> {
    if depth >= MAX_DEPTH {
        return Err(TreeHashError::TooDeep { limit: MAX_DEPTH });
    }

    let old_hash = stored_hash(map)?.map(str::to_owned);

    // Frozen subtree: an existing hash is kept verbatim and nothing below
    // it is revisited.
    if !config.update_existing_hashes && old_hash.is_some() {
        return Ok(());
    }

    if config.recursive {
        for (key, child) in map.iter_mut() {
            if key == HASH_KEY {
                continue;
            }
            descend(child, config, &format!("{path}/{key}"), depth + 1)?;
        }
    }

    let new_hash = object_hash(map, config, path, depth, MissingChild::Fail)?;

    if config.throw_on_wrong_hash {
        if let Some(old) = old_hash {
            if old != new_hash {
                return Err(TreeHashError::HashMismatch {
                    found: old,
                    expected: new_hash,
                    path: path.to_owned(),
                });
            }
        }
    }

    map.insert(HASH_KEY.to_owned(), Value::String(new_hash));
    Ok(())
}

fn descend(
    value: &mut Value,
    config: &ApplyConfig,
    path: &str,
    depth: usize,
) -> Result<(), TreeHashError> {
    match value {
        Value::Object(map) => hash_object(map, config, path, depth),
        Value::Array(arr) => {
            if depth >= MAX_DEPTH {
                return Err(TreeHashError::TooDeep { limit: MAX_DEPTH });
            }
            for (i, item) in arr.iter_mut().enumerate() {
                descend(item, config, &format!("{path}/{i}"), depth + 1)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Compute the hash an object should carry, from its own fields and its
/// children's `_hash` values. Does not mutate anything.
pub(crate) fn object_hash(
    map: &Map<String, Value>,
    config: &ApplyConfig,
    path: &str,
    depth: usize,
    missing: MissingChild,
) -> Result<String, TreeHashError> {
    if depth >= MAX_DEPTH {
        return Err(TreeHashError::TooDeep { limit: MAX_DEPTH });
    }
    let mut view = Map::new();
    for (key, value) in map {
        if key == HASH_KEY {
            continue;
        }
        let child_path = format!("{path}/{key}");
        view.insert(
            key.clone(),
            view_value(value, config, &child_path, depth + 1, missing)?,
        );
    }
    let canonical = canon::encode(&Value::Object(view), config.floating_point_precision)?;
    Ok(digest::compute_digest_with(&canonical, &config.hash))
}

/// A single field of the hashing view: objects contribute their hash,
/// arrays their flattened form, scalars their literal value.
fn view_value(
    value: &Value,
    config: &ApplyConfig,
    path: &str,
    depth: usize,
    missing: MissingChild,
) -> Result<Value, TreeHashError> {
    match value {
        Value::Object(child) => Ok(Value::String(child_hash(child, config, path, depth, missing)?)),
        Value::Array(arr) => Ok(Value::Array(flatten_array(arr, config, path, depth, missing)?)),
        Value::Number(n) => {
            if n.is_f64() {
                num::audit_float(n.as_f64().unwrap_or(f64::NAN), &config.hash.number)?;
            }
            Ok(Value::Number(n.clone()))
        }
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::String(s) => Ok(Value::String(s.clone())),
        Value::Null => Err(TreeHashError::UnsupportedType {
            kind: value_kind(value),
        }),
    }
}

/// Flatten an array for hashing: nested objects are replaced by their hash
/// strings, nested arrays recurse, scalars become canonical text.
fn flatten_array(
    arr: &[Value],
    config: &ApplyConfig,
    path: &str,
    depth: usize,
    missing: MissingChild,
) -> Result<Vec<Value>, TreeHashError> {
    if depth >= MAX_DEPTH {
        return Err(TreeHashError::TooDeep { limit: MAX_DEPTH });
    }
    let mut out = Vec::with_capacity(arr.len());
    for (i, item) in arr.iter().enumerate() {
        let item_path = format!("{path}/{i}");
        let flat = match item {
            Value::Object(child) => {
                Value::String(child_hash(child, config, &item_path, depth, missing)?)
            }
            Value::Array(inner) => {
                Value::Array(flatten_array(inner, config, &item_path, depth + 1, missing)?)
            }
            Value::String(s) => Value::String(s.clone()),
            Value::Bool(b) => Value::String(if *b { "true" } else { "false" }.to_owned()),
            Value::Number(n) => {
                if n.is_f64() {
                    num::audit_float(n.as_f64().unwrap_or(f64::NAN), &config.hash.number)?;
                }
                Value::String(num::number_text(n, config.floating_point_precision)?)
            }
            Value::Null => {
                return Err(TreeHashError::UnsupportedType {
                    kind: value_kind(item),
                })
            }
        };
        out.push(flat);
    }
    Ok(out)
}

fn child_hash(
    child: &Map<String, Value>,
    config: &ApplyConfig,
    path: &str,
    depth: usize,
    missing: MissingChild,
) -> Result<String, TreeHashError> {
    match stored_hash(child)? {
        Some(hash) => Ok(hash.to_owned()),
        None => match missing {
            MissingChild::Fail => Err(TreeHashError::MissingHash {
                path: path.to_owned(),
            }),
            MissingChild::Recompute => object_hash(child, config, path, depth, missing),
        },
    }
}

/// Read an object's stored `_hash`. The key is allowed to be absent, but a
/// present value must be a string.
pub(crate) fn stored_hash(map: &Map<String, Value>) -> Result<Option<&str>, TreeHashError> {
    match map.get(HASH_KEY) {
        None => Ok(None),
        Some(Value::String(hash)) => Ok(Some(hash)),
        Some(other) => Err(TreeHashError::UnsupportedType {
            kind: value_kind(other),
        }),
    }
}
