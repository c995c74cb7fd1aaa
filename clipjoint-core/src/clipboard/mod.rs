//! Clipboard access and payload normalization
mod html;
mod normalize;
mod rtf;

use anyhow::Result;
use std::cell::RefCell;

pub use html::decode_html;
pub use normalize::{from_clipboard_payload, from_pasteboard, normalize};
pub use rtf::decode_rtf;

/// The representations currently on the clipboard, as the OS hands them out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// Plain string representation
    pub plain: Option<String>,
    /// Plain rendering of an attributed (rich text) object
    pub rich_text: Option<String>,
    /// Raw RTF bytes
    pub rtf: Option<Vec<u8>>,
    /// Raw HTML bytes
    pub html: Option<Vec<u8>>,
}

impl ClipboardPayload {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_none()
            && self.rich_text.is_none()
            && self.rtf.is_none()
            && self.html.is_none()
    }
}

/// Representations a pasteboard can be asked for, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardFormat {
    Plain,
    RichText,
    Rtf,
    Html,
}

/// OS pasteboard seam
///
/// Each representation is fetched on its own so a reader can stop at the
/// first one that yields text.
pub trait Pasteboard {
    /// Counter the OS bumps on every content change
    fn change_count(&self) -> i64;

    fn plain_text(&self) -> Option<String>;

    /// Plain rendering of an attributed string, which may be expensive to produce
    fn rich_text(&self) -> Option<String>;

    fn rtf_data(&self) -> Option<Vec<u8>>;

    fn html_data(&self) -> Option<Vec<u8>>;

    /// Clear the clipboard, then put `text` on it as plain text
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Last normalized clipboard read, keyed by the pasteboard change counter
#[derive(Debug, Clone)]
pub struct ClipboardCache {
    change_count: i64,
    text: Option<String>,
}

impl ClipboardCache {
    pub fn new() -> Self {
        Self {
            change_count: -1,
            text: None,
        }
    }

    /// Normalized clipboard text, re-read only when the counter moved or `force_refresh` is set
    pub fn text(&mut self, pasteboard: &dyn Pasteboard, force_refresh: bool) -> Option<String> {
        let change_count = pasteboard.change_count();
        if !force_refresh && self.change_count == change_count {
            return self.text.clone();
        }

        let text = from_pasteboard(pasteboard);
        log::debug!(
            "Clipboard cache refreshed (change count {} -> {}, has text: {})",
            self.change_count,
            change_count,
            text.is_some()
        );
        self.change_count = change_count;
        self.text = text;
        self.text.clone()
    }

    pub fn invalidate(&mut self) {
        self.change_count = -1;
        self.text = None;
    }
}

impl Default for ClipboardCache {
    fn default() -> Self {
        Self::new()
    }
}

/// In-process pasteboard with the same change-counter semantics as the OS one
#[derive(Debug, Default)]
pub struct MemoryPasteboard {
    change_count: i64,
    payload: ClipboardPayload,
    reads: RefCell<Vec<ClipboardFormat>>,
}

impl MemoryPasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents, bumping the change counter like a copy in another app would
    pub fn set_payload(&mut self, payload: ClipboardPayload) {
        self.payload = payload;
        self.change_count += 1;
    }

    /// Number of representation reads so far
    pub fn reads(&self) -> usize {
        self.reads.borrow().len()
    }

    pub fn reads_of(&self, format: ClipboardFormat) -> usize {
        self.reads.borrow().iter().filter(|read| **read == format).count()
    }

    pub fn contents(&self) -> &ClipboardPayload {
        &self.payload
    }

    fn record(&self, format: ClipboardFormat) {
        self.reads.borrow_mut().push(format);
    }
}

impl Pasteboard for MemoryPasteboard {
    fn change_count(&self) -> i64 {
        self.change_count
    }

    fn plain_text(&self) -> Option<String> {
        self.record(ClipboardFormat::Plain);
        self.payload.plain.clone()
    }

    fn rich_text(&self) -> Option<String> {
        self.record(ClipboardFormat::RichText);
        self.payload.rich_text.clone()
    }

    fn rtf_data(&self) -> Option<Vec<u8>> {
        self.record(ClipboardFormat::Rtf);
        self.payload.rtf.clone()
    }

    fn html_data(&self) -> Option<Vec<u8>> {
        self.record(ClipboardFormat::Html);
        self.payload.html.clone()
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.set_payload(ClipboardPayload::plain(text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_reuses_read_until_counter_moves() {
        let mut pasteboard = MemoryPasteboard::new();
        pasteboard.set_payload(ClipboardPayload::plain("  hello\r\n"));
        let mut cache = ClipboardCache::new();

        assert_eq!(cache.text(&pasteboard, false).as_deref(), Some("hello"));
        assert_eq!(cache.text(&pasteboard, false).as_deref(), Some("hello"));
        assert_eq!(pasteboard.reads(), 1);

        pasteboard.set_payload(ClipboardPayload::plain("world"));
        assert_eq!(cache.text(&pasteboard, false).as_deref(), Some("world"));
        assert_eq!(pasteboard.reads(), 2);
    }

    #[test]
    fn test_cache_force_refresh_rereads() {
        let mut pasteboard = MemoryPasteboard::new();
        pasteboard.set_payload(ClipboardPayload::plain("text"));
        let mut cache = ClipboardCache::new();

        cache.text(&pasteboard, false);
        cache.text(&pasteboard, true);
        assert_eq!(pasteboard.reads(), 2);
    }

    #[test]
    fn test_cache_first_read_always_hits_pasteboard() {
        // A fresh pasteboard reports change count 0, the cache starts at -1
        let pasteboard = MemoryPasteboard::new();
        let mut cache = ClipboardCache::new();

        assert_eq!(cache.text(&pasteboard, false), None);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::Plain), 1);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::Html), 1);
    }

    #[test]
    fn test_plain_text_hit_skips_richer_formats() {
        let mut pasteboard = MemoryPasteboard::new();
        pasteboard.set_payload(ClipboardPayload {
            plain: Some("plain".into()),
            rich_text: Some("rich".into()),
            rtf: Some(br"{\rtf1 rtf}".to_vec()),
            html: Some(b"<p>html</p>".to_vec()),
        });
        let mut cache = ClipboardCache::new();

        assert_eq!(cache.text(&pasteboard, false).as_deref(), Some("plain"));
        assert_eq!(pasteboard.reads(), 1);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::RichText), 0);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::Rtf), 0);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::Html), 0);
    }

    #[test]
    fn test_blank_plain_text_falls_through_in_order() {
        let mut pasteboard = MemoryPasteboard::new();
        pasteboard.set_payload(ClipboardPayload {
            plain: Some("  ".into()),
            rtf: Some(br"{\rtf1\ansi from rtf}".to_vec()),
            html: Some(b"<p>html</p>".to_vec()),
            ..ClipboardPayload::default()
        });
        let mut cache = ClipboardCache::new();

        assert_eq!(cache.text(&pasteboard, false).as_deref(), Some("from rtf"));
        assert_eq!(pasteboard.reads_of(ClipboardFormat::RichText), 1);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::Rtf), 1);
        assert_eq!(pasteboard.reads_of(ClipboardFormat::Html), 0);
    }

    #[test]
    fn test_invalidate_forces_reread() {
        let mut pasteboard = MemoryPasteboard::new();
        pasteboard.set_payload(ClipboardPayload::plain("text"));
        let mut cache = ClipboardCache::new();

        cache.text(&pasteboard, false);
        cache.invalidate();
        cache.text(&pasteboard, false);
        assert_eq!(pasteboard.reads(), 2);
    }

    #[test]
    fn test_memory_pasteboard_write_replaces_payload() {
        let mut pasteboard = MemoryPasteboard::new();
        pasteboard.set_payload(ClipboardPayload {
            html: Some(b"<b>x</b>".to_vec()),
            ..ClipboardPayload::default()
        });
        let before = pasteboard.change_count();

        pasteboard.write_text("plain").unwrap();
        assert_eq!(pasteboard.contents().plain.as_deref(), Some("plain"));
        assert!(pasteboard.contents().html.is_none());
        assert!(pasteboard.change_count() > before);
    }
}
