//! Text shaping shared by menu labels, editor previews and clip names
//!
//! All lengths are counted in `char`s. A zero limit always yields an empty
//! string, even where a placeholder would otherwise be returned.

use crate::constants::EMPTY_CLIP_PLACEHOLDER;

const ELLIPSIS: char = '…';

/// Replace `\r\n` and lone `\r` with `\n`
pub fn normalized_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapse every whitespace run (newlines included) into a single space
pub fn collapse_to_single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Label for a clip row: the trimmed name, or the text when the name is blank
pub fn menu_label(name: &str, text: &str, limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }

    let trimmed_name = name.trim();
    let source = if trimmed_name.is_empty() { text } else { trimmed_name };
    let collapsed = collapse_to_single_line(source);
    if collapsed.is_empty() {
        return EMPTY_CLIP_PLACEHOLDER.to_string();
    }

    truncated_tail(&collapsed, limit)
}

/// Default clip name derived from new content (no ellipsis)
pub fn plain_prefix(text: &str, limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }

    let collapsed = collapse_to_single_line(text);
    if collapsed.chars().count() <= limit {
        return collapsed;
    }

    prefix_chars(&collapsed, limit).trim_end().to_string()
}

/// Single-line preview of `text`, `empty_placeholder` when there is nothing to show
pub fn preview(text: &str, limit: usize, empty_placeholder: &str) -> String {
    if limit == 0 {
        return String::new();
    }

    let collapsed = collapse_to_single_line(text);
    if collapsed.is_empty() {
        return empty_placeholder.to_string();
    }

    truncated_tail(&collapsed, limit)
}

/// Hard truncation to `max_length` characters
pub fn bounded(text: &str, max_length: usize) -> String {
    if max_length == 0 {
        return String::new();
    }

    prefix_chars(text, max_length).to_string()
}

/// Line breaks become spaces, then the result is bounded to `limit`
pub fn bounded_single_line_title(text: &str, limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }

    let single_line = normalized_line_breaks(text).replace('\n', " ");
    bounded(&single_line, limit)
}

fn truncated_tail(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut prefix = prefix_chars(text, limit).trim_end().to_string();
    prefix.push(ELLIPSIS);
    prefix
}

#[inline]
fn prefix_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_line_breaks() {
        assert_eq!(normalized_line_breaks("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalized_line_breaks("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_collapse_to_single_line() {
        assert_eq!(collapse_to_single_line("  a\n\n b\t\tc  "), "a b c");
        assert_eq!(collapse_to_single_line(" \n\t "), "");
    }

    #[test]
    fn test_menu_label_collapses_text_without_truncating() {
        assert_eq!(menu_label("", "a\nb   c", 5), "a b c");
    }

    #[test]
    fn test_menu_label_empty_clip() {
        assert_eq!(menu_label("", "", 5), "(Empty Clip)");
        assert_eq!(menu_label("   ", " \n ", 5), "(Empty Clip)");
    }

    #[test]
    fn test_menu_label_prefers_name() {
        assert_eq!(menu_label("  Greeting ", "hello there", 25), "Greeting");
    }

    #[test]
    fn test_menu_label_truncates_with_ellipsis() {
        assert_eq!(menu_label("", "hello world", 5), "hello…");
        // Trailing whitespace is trimmed before the ellipsis
        assert_eq!(menu_label("", "hello world", 6), "hello…");
    }

    #[test]
    fn test_plain_prefix() {
        assert_eq!(plain_prefix("hello world", 5), "hello");
        assert_eq!(plain_prefix("hello world", 6), "hello");
        assert_eq!(plain_prefix("hi\nthere", 25), "hi there");
    }

    #[test]
    fn test_preview_uses_placeholder() {
        assert_eq!(preview("", 90, "No text yet"), "No text yet");
        assert_eq!(preview("one\ntwo", 90, "No text yet"), "one two");
        assert_eq!(preview("abcdef", 3, "-"), "abc…");
    }

    #[test]
    fn test_bounded_counts_chars_not_bytes() {
        assert_eq!(bounded("héllo", 2), "hé");
        assert_eq!(bounded("日本語テキスト", 3), "日本語");
        assert_eq!(bounded("short", 100), "short");
    }

    #[test]
    fn test_bounded_single_line_title() {
        assert_eq!(bounded_single_line_title("a\r\nb\rc", 25), "a b c");
        assert_eq!(bounded_single_line_title("line one\nline two", 6), "line o");
    }

    #[test]
    fn test_zero_limits_yield_empty() {
        assert_eq!(menu_label("", "", 0), "");
        assert_eq!(menu_label("name", "text", 0), "");
        assert_eq!(plain_prefix("text", 0), "");
        assert_eq!(preview("", 0, "placeholder"), "");
        assert_eq!(bounded("text", 0), "");
        assert_eq!(bounded_single_line_title("text", 0), "");
    }
}
