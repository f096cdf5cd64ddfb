//! Text cleanup helpers shared by the scoring pipeline and the re-scorer.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag regex is valid"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex is valid"))
}

/// Strips HTML tags and collapses all whitespace (including newlines) to single spaces.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = tag_re().replace_all(text, " ");
    whitespace_re().replace_all(&stripped, " ").trim().to_string()
}

/// Builds a display snippet: cleaned text capped at `max_chars` characters.
pub fn make_snippet(text: &str, max_chars: usize) -> String {
    truncate_chars(&clean_text(text), max_chars)
}

/// Truncates to at most `max_chars` characters, never splitting a codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_tags() {
        let input = "<p>Head of <b>HR</b></p>";
        assert_eq!(clean_text(input), "Head of HR");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let input = "People\n\nOperations\t  Lead";
        assert_eq!(clean_text(input), "People Operations Lead");
    }

    #[test]
    fn test_clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_snippet_caps_length_and_removes_newlines() {
        let description = "line one\nline two\n".repeat(80); // well over 1000 chars
        let snippet = make_snippet(&description, 320);
        assert!(snippet.chars().count() <= 320);
        assert!(!snippet.contains('\n'));
    }

    #[test]
    fn test_snippet_shorter_than_cap_is_unchanged() {
        assert_eq!(make_snippet("short text", 320), "short text");
    }

    #[test]
    fn test_truncate_chars_respects_codepoint_boundaries() {
        // 4 multibyte chars; byte-indexed truncation would panic here
        let text = "日本語の説明";
        assert_eq!(truncate_chars(text, 3), "日本語");
    }

    #[test]
    fn test_truncate_chars_longer_cap_returns_all() {
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
