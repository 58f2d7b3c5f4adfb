/// Canonical form of a profile handle: no zero-width characters, no leading `@`,
/// collapsed whitespace, lowercase.
pub(crate) fn normalize_handle(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let without_at = cleaned.trim().trim_start_matches('@');
    let collapsed = without_at.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Spreadsheet exports escape line breaks inside cells.
pub(crate) fn unescape_line_breaks(value: &str) -> String {
    value.replace("\\r\\n", "\n").replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_canonicalized() {
        assert_eq!(normalize_handle("\u{feff}@Lea.Coach "), "lea.coach");
        assert_eq!(normalize_handle("  Studio   Mona\u{200b} "), "studio mona");
        assert_eq!(normalize_handle("@"), "");
    }

    #[test]
    fn escaped_line_breaks_become_real_ones() {
        assert_eq!(unescape_line_breaks("a\\nb\\r\\nc"), "a\nb\nc");
    }
}
