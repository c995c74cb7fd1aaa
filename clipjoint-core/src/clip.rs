use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{CLIP_NAME_CHAR_LIMIT, CLIP_TEXT_CHAR_LIMIT};
use crate::format;

/// A named unit of stored text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    id: Uuid,
    pub name: String,
    pub text: String,
}

impl Clip {
    /// Create a clip with a fresh id
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// Create a clip with a known id (for persisted data and tests)
    pub fn with_id(id: Uuid, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Label for the clip's menu row
    pub fn menu_label(&self) -> String {
        format::menu_label(&self.name, &self.text, CLIP_NAME_CHAR_LIMIT)
    }

    /// Copy of this clip with name and text clamped to the current limits and line-break rules
    pub(crate) fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            name: format::bounded_single_line_title(&self.name, CLIP_NAME_CHAR_LIMIT),
            text: format::bounded(
                &format::normalized_line_breaks(&self.text),
                CLIP_TEXT_CHAR_LIMIT,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let id = Uuid::parse_str("6f1c1d1e-3a52-4c39-9d0b-0c2e7f3f9a11").unwrap();
        let clip = Clip::with_id(id, "Name", "Text");
        let json = serde_json::to_value(&clip).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "6f1c1d1e-3a52-4c39-9d0b-0c2e7f3f9a11",
                "name": "Name",
                "text": "Text",
            })
        );
    }

    #[test]
    fn test_list_round_trip() {
        let clips = vec![
            Clip::new("a", "first\nline"),
            Clip::new("", ""),
            Clip::new("ünïcödé", "日本語"),
        ];
        let encoded = serde_json::to_vec(&clips).unwrap();
        let decoded: Vec<Clip> = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, clips);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(Clip::new("a", "a").id(), Clip::new("a", "a").id());
    }

    #[test]
    fn test_menu_label_falls_back_to_text() {
        assert_eq!(Clip::new("", "some text").menu_label(), "some text");
        assert_eq!(Clip::new(" ", "").menu_label(), "(Empty Clip)");
    }

    #[test]
    fn test_sanitized_clamps_name_and_text() {
        let clip = Clip::new("line one\r\nline two and more words", "x\r".repeat(10_005));
        let sanitized = clip.sanitized();
        assert_eq!(sanitized.id(), clip.id());
        assert_eq!(sanitized.name, "line one line two and mor");
        assert_eq!(sanitized.text.chars().count(), 20_000);
        assert!(!sanitized.text.contains('\r'));
    }
}
