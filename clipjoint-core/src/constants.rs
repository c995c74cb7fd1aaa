//! Limits and estimates shared by the store, the formatter and the menu
//!
//! The clip limits are persisted-data invariants: every clip loaded from disk
//! is re-sanitized against them, so lowering a value here truncates existing
//! clips on the next launch.

/// Maximum number of clips the store will hold
pub const MAX_CLIP_COUNT: usize = 300;

/// Maximum clip name length, and the width of a menu label, in characters
pub const CLIP_NAME_CHAR_LIMIT: usize = 25;

/// Maximum clip text length in characters
pub const CLIP_TEXT_CHAR_LIMIT: usize = 20_000;

/// Name given to clips created with "New Blank Clip"
pub const BLANK_CLIP_NAME: &str = "New Clip";

/// Preference key holding the JSON clip array
pub const DEFAULT_STORAGE_KEY: &str = "clipjoint.savedClips.v1";

/// Label shown for a clip with neither name nor text
pub const EMPTY_CLIP_PLACEHOLDER: &str = "(Empty Clip)";

/// Preview length used inside the clip editor
pub const EDITOR_PREVIEW_CHAR_LIMIT: usize = 90;

/// Placeholder for an editor preview of an empty clip
pub const EDITOR_EMPTY_PLACEHOLDER: &str = "No text yet";

/// Visible height assumed when no display can be queried
pub const FALLBACK_VISIBLE_HEIGHT: f64 = 900.0;
