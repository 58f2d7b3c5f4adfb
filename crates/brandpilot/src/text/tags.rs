use super::{json_array, stringify_entries};
use serde_json::Value;

const TAG_DELIMITERS: &[char] = &[',', ';', '/', '\n'];

fn is_tag_padding(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '"' | '\'' | '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}' | '-' | '•' | '●'
        )
}

/// Converts an inline list (`a, b; c / d`) into its tags.
///
/// Quotes, hyphens and bullet glyphs around each tag are removed.
pub fn parse_to_tags(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => stringify_entries(entries),
        Value::String(raw) if !raw.is_empty() => {
            if let Some(entries) = json_array(raw) {
                return stringify_entries(&entries);
            }

            raw.split(TAG_DELIMITERS)
                .map(|token| token.trim_matches(is_tag_padding))
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}
