use super::{decode_html, decode_rtf, ClipboardPayload, Pasteboard};
use crate::format::normalized_line_breaks;

/// Normalize line breaks and trim; `None` when nothing is left
pub fn normalize(text: &str) -> Option<String> {
    let normalized = normalized_line_breaks(text);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn rtf_text(data: &[u8]) -> Option<String> {
    decode_rtf(data).as_deref().and_then(normalize)
}

fn html_text(data: &[u8]) -> Option<String> {
    decode_html(data).as_deref().and_then(normalize)
}

/// First representation that normalizes to non-empty text
///
/// Order: plain string, rich-text rendering, RTF, HTML. Richer formats are
/// only mined for their text; formatting never survives.
pub fn from_clipboard_payload(payload: &ClipboardPayload) -> Option<String> {
    payload
        .plain
        .as_deref()
        .and_then(normalize)
        .or_else(|| payload.rich_text.as_deref().and_then(normalize))
        .or_else(|| payload.rtf.as_deref().and_then(rtf_text))
        .or_else(|| payload.html.as_deref().and_then(html_text))
}

/// Same order as [`from_clipboard_payload`], fetching each representation
/// only when every earlier one came up empty
pub fn from_pasteboard(pasteboard: &dyn Pasteboard) -> Option<String> {
    pasteboard
        .plain_text()
        .as_deref()
        .and_then(normalize)
        .or_else(|| pasteboard.rich_text().as_deref().and_then(normalize))
        .or_else(|| pasteboard.rtf_data().as_deref().and_then(rtf_text))
        .or_else(|| pasteboard.html_data().as_deref().and_then(html_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_converts_line_breaks() {
        assert_eq!(normalize("  a\r\nb\rc  \n").as_deref(), Some("a\nb\nc"));
    }

    #[test]
    fn test_normalize_empty_is_none() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" \r\n\t "), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["x", "  a\r\n\r\nb ", "\rline\r", "tab\tinside"] {
            let once = normalize(input).unwrap();
            assert_eq!(normalize(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_payload_prefers_plain_text() {
        let payload = ClipboardPayload {
            plain: Some("plain".into()),
            rich_text: Some("rich".into()),
            rtf: Some(br"{\rtf1 rtf}".to_vec()),
            html: Some(b"<p>html</p>".to_vec()),
        };
        assert_eq!(from_clipboard_payload(&payload).as_deref(), Some("plain"));
    }

    #[test]
    fn test_payload_skips_blank_representations() {
        let payload = ClipboardPayload {
            plain: Some("   ".into()),
            rich_text: Some("\n".into()),
            rtf: None,
            html: Some(b"<p>from <b>html</b></p>".to_vec()),
        };
        assert_eq!(from_clipboard_payload(&payload).as_deref(), Some("from html"));
    }

    #[test]
    fn test_payload_falls_back_to_rtf() {
        let payload = ClipboardPayload {
            rtf: Some(br"{\rtf1\ansi{\fonttbl\f0 Helvetica;}\f0 Hello\par World}".to_vec()),
            ..ClipboardPayload::default()
        };
        assert_eq!(from_clipboard_payload(&payload).as_deref(), Some("Hello\nWorld"));
    }

    #[test]
    fn test_empty_payload_has_no_text() {
        assert_eq!(from_clipboard_payload(&ClipboardPayload::default()), None);
    }
}
