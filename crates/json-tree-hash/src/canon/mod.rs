//! Canonical encoder — hashing view → canonical byte string.
//!
//! Renders an object whose child hashes are already resolved into the unique
//! string that feeds the digest: keys sorted ascending by code point, `_hash`
//! excluded, no whitespace, strings double-quoted with internal quotes
//! escaped, numbers in canonical text form.

use serde_json::Value;

use json_tree_hash_util::{escape_quotes, value_kind};

use crate::error::TreeHashError;
use crate::num;
use crate::HASH_KEY;

/// Encode a hashing view into its canonical string.
///
/// `float_digits` is the truncation precision applied to float values.
pub fn encode(value: &Value, float_digits: u32) -> Result<String, TreeHashError> {
    let mut out = String::new();
    write_value(value, float_digits, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, digits: u32, out: &mut String) -> Result<(), TreeHashError> {
    match value {
        Value::String(s) => {
            out.push('"');
            out.push_str(&escape_quotes(s));
            out.push('"');
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&num::number_text(n, digits)?),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, digits, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&str> = map
                .keys()
                .map(String::as_str)
                .filter(|k| *k != HASH_KEY)
                .collect();
            keys.sort_unstable();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(&escape_quotes(key));
                out.push_str("\":");
                write_value(&map[*key], digits, out)?;
            }
            out.push('}');
        }
        Value::Null => {
            return Err(TreeHashError::UnsupportedType {
                kind: value_kind(value),
            })
        }
    }
    Ok(())
}
