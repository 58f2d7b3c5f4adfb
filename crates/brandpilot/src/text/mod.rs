//! Normalization of loosely shaped user and AI input.
//!
//! Everything except [`parse_ai_response`] degrades to an empty result on
//! malformed input instead of failing.

mod ai_response;
mod json;
mod lists;
mod tags;

pub use ai_response::{parse_ai_response, MalformedAiResponse, RecoveryStrategy};
pub use json::safe_parse_json;
pub use lists::{parse_string_list, parse_to_array};
pub use tags::parse_to_tags;

use serde_json::Value;

/// Mirrors the falsy values of the front-end payloads: null, `false`, `0`, `""`.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringifies list entries, dropping falsy ones and keeping order.
pub(crate) fn stringify_entries(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| is_truthy(entry))
        .map(|entry| match entry {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Returns the entries when `raw` is a JSON-encoded array.
pub(crate) fn json_array(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => Some(entries),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_match_front_end_semantics() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
    }

    #[test]
    fn stringify_keeps_order_and_renders_scalars() {
        let entries = vec![json!("a"), json!(""), json!(3), Value::Null, json!(true), json!("b")];
        assert_eq!(stringify_entries(&entries), vec!["a", "3", "true", "b"]);
    }

    #[test]
    fn json_array_ignores_other_json_shapes() {
        assert!(json_array(r#"{"a":1}"#).is_none());
        assert!(json_array("\"text\"").is_none());
        assert_eq!(json_array(" [1, 2] ").map(|entries| entries.len()), Some(2));
    }
}
