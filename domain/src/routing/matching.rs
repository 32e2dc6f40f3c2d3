//! Keyword matching primitives shared by the classifier and tool groups.
//!
//! Both functions expect the haystack to already be lower-cased; keywords are
//! stored lower-case in every table.

/// A character that can be part of a word (`\w` in regex terms).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `keyword` occurs anywhere in `haystack`.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    !keyword.is_empty() && haystack.contains(keyword)
}

/// Whether `keyword` occurs in `haystack` bounded on both sides by a
/// non-word character or the string ends.
///
/// Multi-word keywords ("virtual network") are matched as a single phrase.
pub fn contains_whole_word(haystack: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    haystack.match_indices(keyword).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !is_word_char(c));
        before_ok && after_ok
    })
}
