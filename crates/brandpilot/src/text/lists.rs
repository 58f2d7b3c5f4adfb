use super::{json_array, stringify_entries};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

const BLOCK_DELIMITERS: &[char] = &['\n', '•', '-', '●'];
const DASHED_DELIMITERS: &[char] = &['\n', '•', '-', '●', '–', '—'];

static ORDINAL_MARKER: OnceLock<Regex> = OnceLock::new();

fn ordinal_marker() -> &'static Regex {
    ORDINAL_MARKER.get_or_init(|| Regex::new(r"^\d+[.)]\s*").expect("valid ordinal regex"))
}

/// Converts a block list (one item per line or bullet) into its items.
///
/// Accepts a ready-made array, a JSON-encoded array, or free text split on
/// newlines, `•`, `-` and `●`. Leading ordinals such as `1.` or `2)` are
/// removed. Anything else yields an empty list.
pub fn parse_to_array(value: &Value) -> Vec<String> {
    split_block_list(value, BLOCK_DELIMITERS)
}

/// Same as [`parse_to_array`] but also splits on en and em dashes.
pub fn parse_string_list(value: &Value) -> Vec<String> {
    split_block_list(value, DASHED_DELIMITERS)
}

fn split_block_list(value: &Value, delimiters: &[char]) -> Vec<String> {
    match value {
        Value::Array(entries) => stringify_entries(entries),
        Value::String(raw) if !raw.is_empty() => {
            if let Some(entries) = json_array(raw) {
                return stringify_entries(&entries);
            }

            raw.split(delimiters)
                .map(strip_ordinal)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

fn strip_ordinal(segment: &str) -> &str {
    let trimmed = segment.trim();
    match ordinal_marker().find(trimmed) {
        Some(marker) => trimmed[marker.end()..].trim(),
        None => trimmed,
    }
}
