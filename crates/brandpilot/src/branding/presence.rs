use serde_json::Value;

/// A field counts when it is present, not an empty string and not an empty list.
///
/// `0` and `false` are answers, so they count as filled.
pub fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// Percentage of `fields` filled in `record`, rounded half up.
///
/// A missing record, or one that is not a JSON object, scores 0.
pub fn section_completion(record: Option<&Value>, fields: &[&str]) -> u8 {
    let Some(Value::Object(map)) = record else {
        return 0;
    };
    if fields.is_empty() {
        return 0;
    }

    let filled = fields
        .iter()
        .filter(|field| is_filled(map.get(**field)))
        .count();

    percent_rounded(filled, fields.len())
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
pub(crate) fn percent_rounded(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(100)
}
