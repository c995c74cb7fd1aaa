//! Plain-text extraction from HTML clipboard data
use regex::{Captures, Regex};
use std::sync::OnceLock;

// Stands in for a <pre> block while the surrounding markup is flowed
const PRE_MARK: char = '\u{E000}';

struct HtmlPatterns {
    hidden: Regex,
    pre: Regex,
    pre_mark: Regex,
    whitespace: Regex,
    line_break: Regex,
    block: Regex,
    list_item: Regex,
    cell: Regex,
    tag: Regex,
    entity: Regex,
    blank_lines: Regex,
}

fn patterns() -> &'static HtmlPatterns {
    static PATTERNS: OnceLock<HtmlPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| HtmlPatterns {
        hidden: Regex::new(
            r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>|<head\b.*?</head\s*>",
        )
        .expect("valid hidden-content pattern"),
        pre: Regex::new(r"(?is)<pre\b[^>]*>(.*?)</pre\s*>").expect("valid pre pattern"),
        pre_mark: Regex::new(&format!("{PRE_MARK}([0-9]+){PRE_MARK}"))
            .expect("valid pre marker pattern"),
        whitespace: Regex::new(r"[ \t\r\n\x0C]+").expect("valid whitespace pattern"),
        line_break: Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"),
        block: Regex::new(
            r"(?i)</?(?:p|div|ul|ol|tr|table|h[1-6]|blockquote|section|article|header|footer|dt|dd)\b[^>]*>",
        )
        .expect("valid block pattern"),
        list_item: Regex::new(r"(?i)</li\s*>").expect("valid list item pattern"),
        cell: Regex::new(r"(?i)</t[dh]\s*>").expect("valid cell pattern"),
        tag: Regex::new(r"<[^>]*>").expect("valid tag pattern"),
        entity: Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
            .expect("valid entity pattern"),
        blank_lines: Regex::new(r"\n{3,}").expect("valid blank line pattern"),
    })
}

/// Decode HTML bytes to plain text; `None` for empty input
pub fn decode_html(data: &[u8]) -> Option<String> {
    if data.is_empty() {
        return None;
    }

    let p = patterns();
    let source = String::from_utf8_lossy(data);

    let visible = p.hidden.replace_all(&source, "");

    let mut preformatted = Vec::new();
    let protected = p.pre.replace_all(&visible, |caps: &Captures| {
        // A newline right after <pre> is not content
        let body = caps[1].strip_prefix('\n').unwrap_or(&caps[1]);
        let body = p.line_break.replace_all(body, "\n");
        preformatted.push(text_content(p, &body));
        format!("<div>{PRE_MARK}{}{PRE_MARK}</div>", preformatted.len() - 1)
    });

    // Source line breaks are insignificant outside <pre>
    let flowed = p.whitespace.replace_all(&protected, " ");
    let with_breaks = p.line_break.replace_all(&flowed, "\n");
    let with_blocks = p.block.replace_all(&with_breaks, "\n");
    let with_items = p.list_item.replace_all(&with_blocks, "\n");
    let with_cells = p.cell.replace_all(&with_items, "\t");
    let decoded = text_content(p, &with_cells);

    let lines: Vec<&str> = decoded.split('\n').map(|line| line.trim_matches(' ')).collect();
    let joined = lines.join("\n");
    let collapsed = p.blank_lines.replace_all(&joined, "\n\n");
    let restored = p.pre_mark.replace_all(&collapsed, |caps: &Captures| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| preformatted.get(index))
            .cloned()
            .unwrap_or_default()
    });
    Some(restored.into_owned())
}

/// Strip remaining tags and decode entities
fn text_content(p: &HtmlPatterns, html: &str) -> String {
    let stripped = p.tag.replace_all(html, "");
    p.entity
        .replace_all(&stripped, |caps: &Captures| decode_entity(&caps[1], &caps[0]))
        .into_owned()
}

fn decode_entity(body: &str, raw: &str) -> String {
    let numeric = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok()
    } else {
        None
    };

    if let Some(code) = numeric {
        return char::from_u32(code).map(String::from).unwrap_or_else(|| raw.to_string());
    }

    let named = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "hellip" => "…",
        "mdash" => "—",
        "ndash" => "–",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "bull" => "•",
        "middot" => "·",
        "euro" => "€",
        "pound" => "£",
        "yen" => "¥",
        "cent" => "¢",
        "deg" => "°",
        "times" => "×",
        "divide" => "÷",
        "laquo" => "«",
        "raquo" => "»",
        _ => return raw.to_string(),
    };
    named.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(html: &str) -> String {
        decode_html(html.as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_html(b""), None);
    }

    #[test]
    fn test_strips_inline_tags() {
        assert_eq!(decode("<span style=\"color:red\">red</span> <b>bold</b>"), "red bold");
    }

    #[test]
    fn test_blocks_and_breaks_become_newlines() {
        let text = decode("<div>first</div><div>second<br>third</div>");
        assert_eq!(text.trim(), "first\n\nsecond\nthird");
    }

    #[test]
    fn test_source_newlines_are_flowed() {
        assert_eq!(decode("one\n   two"), "one two");
    }

    #[test]
    fn test_pre_keeps_its_whitespace() {
        let text = decode("<p>intro\n  text</p><pre>a\n  b &amp; <i>c</i></pre>");
        assert_eq!(text.trim(), "intro text\n\na\n  b & c");
    }

    #[test]
    fn test_pre_drops_leading_newline() {
        assert_eq!(decode("<pre>\nfn main() {}\n</pre>").trim(), "fn main() {}");
    }

    #[test]
    fn test_list_items_are_one_per_line() {
        assert_eq!(decode("<ul><li>one</li><li>two</li></ul>").trim(), "one\ntwo");
        assert_eq!(decode("<ol>\n  <li>one</li>\n  <li>two</li>\n</ol>").trim(), "one\ntwo");
    }

    #[test]
    fn test_drops_hidden_content() {
        let html = "<html><head><title>t</title><style>p{}</style></head>\
                    <body><!-- note --><script>alert(1)</script>shown</body></html>";
        assert_eq!(decode(html), "shown");
    }

    #[test]
    fn test_entities() {
        assert_eq!(
            decode("a &amp; b &lt;c&gt; &#233; &#x263A; &bogus;"),
            "a & b <c> é ☺ &bogus;"
        );
    }

    #[test]
    fn test_table_cells_are_tab_separated() {
        let text = decode("<table><tr><td>a</td><td>b</td></tr></table>");
        assert_eq!(text.trim(), "a\tb");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let text = decode_html(b"ok \xFF done").unwrap();
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" done"));
    }
}
