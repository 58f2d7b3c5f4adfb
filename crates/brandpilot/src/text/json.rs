use super::is_truthy;
use serde_json::Value;
use std::borrow::Cow;

/// Reads a value that may hold structured data or its JSON encoding.
///
/// Falsy input and unparseable strings give `None`. Objects and arrays are
/// handed back borrowed as they are already decoded.
pub fn safe_parse_json(value: &Value) -> Option<Cow<'_, Value>> {
    match value {
        Value::Object(_) | Value::Array(_) => Some(Cow::Borrowed(value)),
        Value::String(raw) if !raw.is_empty() => serde_json::from_str::<Value>(raw)
            .ok()
            .filter(|parsed| !parsed.is_null())
            .map(Cow::Owned),
        other if is_truthy(other) => Some(Cow::Borrowed(other)),
        _ => None,
    }
}
