use serde_json::Value;

/// The runtime type name of a JSON value, as used in error messages.
///
/// Numbers are split into `"integer"` and `"float"` because the hashing
/// pipeline treats them as distinct types.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_tree_hash_util::value_kind;
///
/// assert_eq!(value_kind(&json!(null)), "null");
/// assert_eq!(value_kind(&json!(1)), "integer");
/// assert_eq!(value_kind(&json!(1.5)), "float");
/// assert_eq!(value_kind(&json!({})), "object");
/// ```
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_f64() {
                "float"
            } else {
                "integer"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_kinds() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!("s")), "string");
    }

    #[test]
    fn number_kinds() {
        assert_eq!(value_kind(&json!(42)), "integer");
        assert_eq!(value_kind(&json!(-42)), "integer");
        assert_eq!(value_kind(&json!(3.14)), "float");
    }

    #[test]
    fn container_kinds() {
        assert_eq!(value_kind(&json!([1, 2])), "array");
        assert_eq!(value_kind(&json!({"a": 1})), "object");
    }
}
