pub mod clip;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod menu;
pub mod notice;
pub mod preferences;
pub mod schedule;
pub mod settings;
pub mod store;

pub use clip::Clip;
pub use clipboard::{ClipboardFormat, ClipboardPayload, MemoryPasteboard, Pasteboard};
pub use config::Config;
pub use geometry::{active_display, Display, Point, Rect, Size};
pub use layout::MenuMetrics;
pub use menu::{build_menu, MenuCommand, MenuEntry, MenuState};
pub use notice::{hud_origin, Notice};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use schedule::{RefreshPlan, TimerSlot, TimerToken};
pub use settings::{AppSettings, LoginItemError, LoginItemService, UnsupportedLoginItems};
pub use store::{ClipStore, MoveDirection};
