//! Toolkit-independent model of the status item menu
//!
//! The UI layer renders `MenuEntry` trees and maps activated item ids back to
//! `MenuCommand`s with `MenuCommand::parse`.
use std::fmt;
use uuid::Uuid;

use crate::clip::Clip;
use crate::constants::{EDITOR_EMPTY_PLACEHOLDER, EDITOR_PREVIEW_CHAR_LIMIT, MAX_CLIP_COUNT};
use crate::format;
use crate::layout::partition;
use crate::store::MoveDirection;

pub const ADD_CLIP_TITLE: &str = "Add Clip from Clipboard";
pub const OVERFLOW_TITLE: &str = "More";
pub const NO_CLIPS_TITLE: &str = "No saved clips";
pub const EDIT_CLIPS_TITLE: &str = "Edit Clips";
pub const LAUNCH_AT_LOGIN_TITLE: &str = "Launch at Login";
pub const RENAME_TITLE: &str = "Rename…";
pub const EDIT_TEXT_TITLE: &str = "Edit Text…";

/// Everything a menu item can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    CopyClip(Uuid),
    AddFromClipboard,
    NewBlankClip,
    /// Prompt for a new name
    Rename(Uuid),
    /// Prompt for new text
    EditText(Uuid),
    RenameFromClipboard(Uuid),
    ReplaceTextFromClipboard(Uuid),
    Move(Uuid, MoveDirection),
    Delete(Uuid),
    ToggleLaunchAtLogin,
    Quit,
}

impl MenuCommand {
    /// Stable string id for the toolkit's menu item
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Inverse of `id`
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "add-clipboard" => return Some(MenuCommand::AddFromClipboard),
            "new-blank" => return Some(MenuCommand::NewBlankClip),
            "launch-at-login" => return Some(MenuCommand::ToggleLaunchAtLogin),
            "quit" => return Some(MenuCommand::Quit),
            _ => {}
        }

        let (verb, clip_id) = id.split_once(':')?;
        let clip_id = Uuid::parse_str(clip_id).ok()?;
        let command = match verb {
            "copy" => MenuCommand::CopyClip(clip_id),
            "edit-name" => MenuCommand::Rename(clip_id),
            "edit-text" => MenuCommand::EditText(clip_id),
            "rename" => MenuCommand::RenameFromClipboard(clip_id),
            "replace" => MenuCommand::ReplaceTextFromClipboard(clip_id),
            "up" => MenuCommand::Move(clip_id, MoveDirection::Up),
            "down" => MenuCommand::Move(clip_id, MoveDirection::Down),
            "delete" => MenuCommand::Delete(clip_id),
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCommand::CopyClip(id) => write!(f, "copy:{id}"),
            MenuCommand::AddFromClipboard => f.write_str("add-clipboard"),
            MenuCommand::NewBlankClip => f.write_str("new-blank"),
            MenuCommand::Rename(id) => write!(f, "edit-name:{id}"),
            MenuCommand::EditText(id) => write!(f, "edit-text:{id}"),
            MenuCommand::RenameFromClipboard(id) => write!(f, "rename:{id}"),
            MenuCommand::ReplaceTextFromClipboard(id) => write!(f, "replace:{id}"),
            MenuCommand::Move(id, MoveDirection::Up) => write!(f, "up:{id}"),
            MenuCommand::Move(id, MoveDirection::Down) => write!(f, "down:{id}"),
            MenuCommand::Delete(id) => write!(f, "delete:{id}"),
            MenuCommand::ToggleLaunchAtLogin => f.write_str("launch-at-login"),
            MenuCommand::Quit => f.write_str("quit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Action {
        command: MenuCommand,
        title: String,
        enabled: bool,
    },
    Check {
        command: MenuCommand,
        title: String,
        checked: bool,
    },
    /// Disabled, informational row
    Label(String),
    Submenu {
        title: String,
        enabled: bool,
        entries: Vec<MenuEntry>,
    },
    About,
    Separator,
}

impl MenuEntry {
    fn action(command: MenuCommand, title: impl Into<String>, enabled: bool) -> Self {
        MenuEntry::Action {
            command,
            title: title.into(),
            enabled,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            MenuEntry::Action { title, .. }
            | MenuEntry::Check { title, .. }
            | MenuEntry::Submenu { title, .. } => Some(title),
            MenuEntry::Label(title) => Some(title),
            MenuEntry::About | MenuEntry::Separator => None,
        }
    }
}

/// Inputs for one rendering of the menu
#[derive(Debug, Clone, Copy)]
pub struct MenuState<'a> {
    pub clips: &'a [Clip],
    /// Clip rows that fit at the top level (see `MenuMetrics::top_level_budget`)
    pub top_level_budget: usize,
    pub clipboard_has_text: bool,
    pub launch_at_login: bool,
    pub launch_at_login_error: Option<&'a str>,
}

/// Build the full menu, top to bottom
pub fn build_menu(state: &MenuState<'_>) -> Vec<MenuEntry> {
    let can_add_clip = state.clips.len() < MAX_CLIP_COUNT;
    let mut entries = vec![
        MenuEntry::About,
        MenuEntry::Check {
            command: MenuCommand::ToggleLaunchAtLogin,
            title: LAUNCH_AT_LOGIN_TITLE.to_string(),
            checked: state.launch_at_login,
        },
    ];
    if let Some(error) = state.launch_at_login_error {
        entries.push(MenuEntry::Label(error.to_string()));
    }
    entries.push(MenuEntry::Separator);

    if state.clips.is_empty() {
        entries.push(MenuEntry::Label(NO_CLIPS_TITLE.to_string()));
    } else {
        let sections = partition(state.clips, state.top_level_budget);
        entries.extend(sections.primary.iter().map(copy_entry));
        if !sections.overflow.is_empty() {
            entries.push(MenuEntry::Submenu {
                title: OVERFLOW_TITLE.to_string(),
                enabled: true,
                entries: sections.overflow.iter().map(copy_entry).collect(),
            });
        }
    }

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action(
        MenuCommand::AddFromClipboard,
        ADD_CLIP_TITLE,
        state.clipboard_has_text && can_add_clip,
    ));
    entries.push(MenuEntry::Submenu {
        title: EDIT_CLIPS_TITLE.to_string(),
        enabled: true,
        entries: editor_entries(state, can_add_clip),
    });
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action(MenuCommand::Quit, "Quit", true));
    entries
}

fn copy_entry(clip: &Clip) -> MenuEntry {
    MenuEntry::action(MenuCommand::CopyClip(clip.id()), clip.menu_label(), true)
}

fn editor_entries(state: &MenuState<'_>, can_add_clip: bool) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry::action(
        MenuCommand::NewBlankClip,
        "New Blank Clip",
        can_add_clip,
    )];
    if !state.clips.is_empty() {
        entries.push(MenuEntry::Separator);
    }

    let last = state.clips.len().saturating_sub(1);
    for (index, clip) in state.clips.iter().enumerate() {
        let id = clip.id();
        let preview =
            format::preview(&clip.text, EDITOR_PREVIEW_CHAR_LIMIT, EDITOR_EMPTY_PLACEHOLDER);
        entries.push(MenuEntry::Submenu {
            title: clip.menu_label(),
            enabled: true,
            entries: vec![
                MenuEntry::Label(preview),
                MenuEntry::Separator,
                MenuEntry::action(MenuCommand::Rename(id), RENAME_TITLE, true),
                MenuEntry::action(MenuCommand::EditText(id), EDIT_TEXT_TITLE, true),
                MenuEntry::action(
                    MenuCommand::RenameFromClipboard(id),
                    "Rename from Clipboard",
                    state.clipboard_has_text,
                ),
                MenuEntry::action(
                    MenuCommand::ReplaceTextFromClipboard(id),
                    "Replace Text with Clipboard",
                    state.clipboard_has_text,
                ),
                MenuEntry::Separator,
                MenuEntry::action(MenuCommand::Move(id, MoveDirection::Up), "Move Up", index > 0),
                MenuEntry::action(
                    MenuCommand::Move(id, MoveDirection::Down),
                    "Move Down",
                    index < last,
                ),
                MenuEntry::Separator,
                MenuEntry::action(MenuCommand::Delete(id), "Delete", true),
            ],
        });
    }
    entries
}
