//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_chars`, the entire string is returned unchanged.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// First line of a (possibly multi-line) description, trimmed.
pub fn first_line(s: &str) -> &str {
    s.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
}

/// Whether `s` can be placed into a URL path as exactly one segment.
///
/// Reserved characters and the dot segments are refused rather than encoded.
pub fn is_path_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.chars().any(is_reserved)
}

fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_chars("hi", 10), "hi");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let s = "あのね"; // 9 bytes, 3 chars
        assert_eq!(truncate_chars(s, 2), "あの");
        assert_eq!(truncate_chars(s, 3), "あのね");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn path_segment_accepts_ids() {
        assert!(is_path_segment("4b7c9f0e-1a2b-4c3d-8e9f-0a1b2c3d4e5f"));
        assert!(is_path_segment("d-1"));
        assert!(is_path_segment("v1.2"));
    }

    #[test]
    fn path_segment_refuses_traversal_and_markers() {
        let refused = [
            "",
            ".",
            "..",
            "../network-device?limit=500",
            "a/b",
            "a?b",
            "a#b",
            "a%2Fb",
            "a b",
            "a\\b",
        ];
        for bad in refused {
            assert!(!is_path_segment(bad), "{:?} accepted", bad);
        }
    }

    #[test]
    fn first_line_skips_blank_lines() {
        assert_eq!(first_line("\n  Get the device list.\n  More text"), "Get the device list.");
        assert_eq!(first_line(""), "");
    }
}
