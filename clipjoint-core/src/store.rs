//! Ordered, bounded, persisted clip collection
//!
//! The store is the single source of truth for clips. Every mutation is
//! followed by a full re-serialization of the list into the preference store;
//! insertion order is display order is persistence order. Loading sanitizes
//! whatever was persisted against the current limits before writing it back
//! once.
use anyhow::Result;
use log::{debug, info, warn};
use std::collections::HashSet;
use uuid::Uuid;

use crate::clip::Clip;
use crate::clipboard::{normalize, ClipboardCache, Pasteboard};
use crate::constants::{
    BLANK_CLIP_NAME, CLIP_NAME_CHAR_LIMIT, CLIP_TEXT_CHAR_LIMIT, MAX_CLIP_COUNT,
};
use crate::format;
use crate::notice::Notice;
use crate::preferences::PreferenceStore;

/// Direction for swapping a clip with its neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    #[inline]
    pub fn offset(self) -> isize {
        match self {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
        }
    }
}

pub struct ClipStore<P, B> {
    clips: Vec<Clip>,
    preferences: P,
    pasteboard: B,
    storage_key: String,
    clipboard_cache: ClipboardCache,
    notices: Vec<Notice>,
}

impl<P: PreferenceStore, B: Pasteboard> ClipStore<P, B> {
    /// Load persisted clips (or the built-in examples), sanitize them and persist the result
    pub fn load(preferences: P, pasteboard: B, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let loaded = Self::load_clips(&preferences, &storage_key).unwrap_or_else(default_clips);

        let mut seen = HashSet::new();
        let mut clips: Vec<Clip> = loaded
            .iter()
            .map(|clip| {
                let mut sanitized = clip.sanitized();
                if !seen.insert(sanitized.id()) {
                    warn!(
                        "Duplicate clip id {} in saved data, assigning a new one",
                        sanitized.id()
                    );
                    sanitized = Clip::new(sanitized.name, sanitized.text);
                    seen.insert(sanitized.id());
                }
                sanitized
            })
            .collect();

        if clips.len() > MAX_CLIP_COUNT {
            let excess = clips.len() - MAX_CLIP_COUNT;
            warn!("Dropping {} oldest clips over the {} clip limit", excess, MAX_CLIP_COUNT);
            clips.drain(..excess);
        }

        let mut store = Self {
            clips,
            preferences,
            pasteboard,
            storage_key,
            clipboard_cache: ClipboardCache::new(),
            notices: Vec::new(),
        };
        store.persist();
        info!("Loaded {} clips", store.clips.len());
        store
    }

    fn load_clips(preferences: &P, key: &str) -> Option<Vec<Clip>> {
        let Some(data) = preferences.data(key) else {
            info!("No saved clips under '{}', seeding examples", key);
            return None;
        };

        match serde_json::from_slice(&data) {
            Ok(clips) => Some(clips),
            Err(e) => {
                warn!("Saved clips under '{}' could not be decoded, seeding examples: {}", key, e);
                None
            }
        }
    }

    fn persist(&mut self) {
        let encoded = match serde_json::to_vec(&self.clips) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode clips: {}", e);
                return;
            }
        };

        if let Err(e) = self.preferences.set_data(&self.storage_key, &encoded) {
            warn!("Failed to persist clips: {:#}", e);
        }
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|clip| clip.id() == id)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn has_clips(&self) -> bool {
        !self.clips.is_empty()
    }

    pub fn can_add_another_clip(&self) -> bool {
        self.clips.len() < MAX_CLIP_COUNT
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn pasteboard(&self) -> &B {
        &self.pasteboard
    }

    pub fn pasteboard_mut(&mut self) -> &mut B {
        &mut self.pasteboard
    }

    /// Feedback raised since the last call, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.clips.iter().position(|clip| clip.id() == id)
    }

    /// Append `text` as a new clip named after its first characters
    pub fn add_clip(&mut self, text: &str) -> bool {
        if !self.can_add_another_clip() {
            info!("Clip limit of {} reached", MAX_CLIP_COUNT);
            self.notices.push(Notice::ClipLimitReached);
            return false;
        }

        let Some(normalized) = normalize(text) else {
            debug!("Ignoring blank clip text");
            return false;
        };

        let text = format::bounded(&normalized, CLIP_TEXT_CHAR_LIMIT);
        let name = format::plain_prefix(&text, CLIP_NAME_CHAR_LIMIT);
        let clip = Clip::new(name, text);
        debug!("Added clip {} ({} chars)", clip.id(), clip.text.chars().count());
        self.clips.push(clip);
        self.persist();
        true
    }

    /// Append the current clipboard text as a new clip
    pub fn add_clipboard_clip(&mut self) -> bool {
        let Some(text) = self.clipboard_text(true) else {
            info!("Clipboard has no importable text");
            self.notices.push(Notice::ClipboardHasNoText);
            return false;
        };

        let added = self.add_clip(&text);
        if added {
            self.notices.push(Notice::ClipAdded);
        }
        added
    }

    /// Append an empty clip for the user to fill in
    pub fn add_blank_clip(&mut self) -> Option<Uuid> {
        if !self.can_add_another_clip() {
            info!("Clip limit of {} reached", MAX_CLIP_COUNT);
            self.notices.push(Notice::ClipLimitReached);
            return None;
        }

        let clip = Clip::new(BLANK_CLIP_NAME, "");
        let id = clip.id();
        self.clips.push(clip);
        self.persist();
        debug!("Added blank clip {}", id);
        Some(id)
    }

    pub fn update_name(&mut self, id: Uuid, name: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        self.clips[index].name = format::bounded_single_line_title(name, CLIP_NAME_CHAR_LIMIT);
        self.persist();
    }

    pub fn update_text(&mut self, id: Uuid, text: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        let normalized = format::normalized_line_breaks(text);
        self.clips[index].text = format::bounded(&normalized, CLIP_TEXT_CHAR_LIMIT);
        self.persist();
    }

    pub fn delete_clip(&mut self, id: Uuid) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        self.clips.remove(index);
        self.persist();
        debug!("Deleted clip {}", id);
    }

    pub fn can_move_clip(&self, id: Uuid, direction: MoveDirection) -> bool {
        self.move_destination(id, direction).is_some()
    }

    /// Swap the clip with its neighbor in `direction`
    pub fn move_clip(&mut self, id: Uuid, direction: MoveDirection) {
        let Some((index, destination)) = self.move_destination(id, direction) else {
            return;
        };

        self.clips.swap(index, destination);
        self.persist();
    }

    fn move_destination(&self, id: Uuid, direction: MoveDirection) -> Option<(usize, usize)> {
        let index = self.index_of(id)?;
        let destination = index.checked_add_signed(direction.offset())?;
        (destination < self.clips.len()).then_some((index, destination))
    }

    /// Put the clip's text on the clipboard
    pub fn copy_clip(&mut self, id: Uuid) -> Result<()> {
        let Some(clip) = self.clip(id) else {
            debug!("Copy requested for unknown clip {}", id);
            return Ok(());
        };

        let text = clip.text.clone();
        self.pasteboard.write_text(&text)?;
        self.notices.push(Notice::Copied);
        debug!("Copied clip {} to clipboard", id);
        Ok(())
    }

    /// Whether the clipboard currently holds text that `add_clipboard_clip` would accept
    pub fn can_import_clipboard_text(&mut self, force_refresh: bool) -> bool {
        self.clipboard_text(force_refresh).is_some()
    }

    /// Normalized clipboard text, re-read only when the change counter moved or
    /// `force_refresh` is set
    pub fn clipboard_text(&mut self, force_refresh: bool) -> Option<String> {
        self.clipboard_cache.text(&self.pasteboard, force_refresh)
    }
}

/// Examples shown on first launch or when saved data cannot be read
pub fn default_clips() -> Vec<Clip> {
    vec![
        Clip::new("Bob's your uncle", "Bob's your uncle"),
        Clip::new("Joe Bagodonuts", "Joe Bagodonuts"),
        Clip::new(
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumps over the lazy dog, or something like that. \
             Honestly, feels kind of mean to shame the dog like this.",
        ),
    ]
}
