//! AppKit bindings for ClipJoint: pasteboard, user defaults, screens, the
//! feedback HUD, edit prompts, login items and the global shortcut.
#![cfg(target_os = "macos")]

mod foundation;

pub mod defaults;
pub mod hotkey;
pub mod hud;
pub mod login_item;
pub mod pasteboard;
pub mod prompt;
pub mod screen;

pub use defaults::UserDefaults;
pub use hotkey::HotkeyManager;
pub use hud::HudWindow;
pub use login_item::MainAppLoginItem;
pub use pasteboard::GeneralPasteboard;
pub use prompt::TextPrompt;
pub use screen::{displays, pointer_location};
