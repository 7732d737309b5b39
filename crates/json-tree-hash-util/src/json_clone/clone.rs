use serde_json::{Map, Value};

use crate::value_kind::value_kind;

/// A value outside the supported set was encountered while cloning.
#[derive(Debug, thiserror::Error)]
#[error("unsupported value type: {kind}")]
pub struct UnsupportedValue {
    pub kind: &'static str,
}

/// Creates a deep clone of a JSON value, rejecting unsupported variants.
///
/// All nested objects and arrays become new instances. `null` anywhere in the
/// tree fails with [`UnsupportedValue`] and nothing is returned.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_tree_hash_util::json_clone::clone_checked;
///
/// let original = json!({"foo": [1, 2, 3]});
/// let cloned = clone_checked(&original).unwrap();
/// assert_eq!(original, cloned);
///
/// assert!(clone_checked(&json!({"foo": null})).is_err());
/// ```
pub fn clone_checked(value: &Value) -> Result<Value, UnsupportedValue> {
    match value {
        Value::Null => Err(UnsupportedValue {
            kind: value_kind(value),
        }),
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::Number(n) => Ok(Value::Number(n.clone())),
        Value::String(s) => Ok(Value::String(s.clone())),
        Value::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for item in arr {
                out.push(clone_checked(item)?);
            }
            Ok(Value::Array(out))
        }
        Value::Object(obj) => {
            let mut out = Map::new();
            for (key, val) in obj {
                out.insert(key.clone(), clone_checked(val)?);
            }
            Ok(Value::Object(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clone_scalars() {
        for v in [json!(true), json!(42), json!(1.5), json!("hello")] {
            assert_eq!(clone_checked(&v).unwrap(), v);
        }
    }

    #[test]
    fn clone_array() {
        let value = json!([1, 2, 3]);
        assert_eq!(clone_checked(&value).unwrap(), value);
    }

    #[test]
    fn clone_object_preserves_key_order() {
        let value = json!({"b": 1, "a": 2});
        let cloned = clone_checked(&value).unwrap();
        let keys: Vec<&String> = cloned.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn clone_nested() {
        let value = json!({
            "array": [1, 2, {"nested": true}],
            "object": {"a": "b"},
            "scalar": 42
        });
        assert_eq!(clone_checked(&value).unwrap(), value);
    }

    #[test]
    fn clone_is_deep() {
        let original = json!({"arr": [1, 2, 3]});
        let mut cloned = clone_checked(&original).unwrap();
        cloned["arr"][0] = json!(99);
        assert_eq!(original["arr"][0], json!(1));
    }

    #[test]
    fn null_rejected() {
        let err = clone_checked(&json!(null)).unwrap_err();
        assert_eq!(err.kind, "null");
    }

    #[test]
    fn nested_null_rejected() {
        assert!(clone_checked(&json!({"a": {"b": [1, null]}})).is_err());
    }
}
