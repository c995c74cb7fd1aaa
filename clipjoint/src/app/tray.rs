//! Status item and its native menu, rendered from `MenuEntry` trees
use anyhow::{Context, Result};
use clipjoint_core::{MenuCommand, MenuEntry};
use log::debug;
use tray_icon::menu::{
    AboutMetadata, CheckMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu,
};
use tray_icon::{TrayIcon, TrayIconBuilder};

use super::icon;

/// Rows whose enabled state follows the clipboard between rebuilds
#[derive(Clone, Copy, PartialEq, Eq)]
enum ClipboardGate {
    /// Needs clipboard text and room for another clip
    AddClip,
    /// Needs clipboard text
    Edit,
}

pub(super) struct TrayMenu {
    tray: TrayIcon,
    gated: Vec<(MenuItem, ClipboardGate)>,
    budget: usize,
}

impl TrayMenu {
    /// Create the status item; must run after the event loop has started
    pub(super) fn new(entries: &[MenuEntry], budget: usize) -> Result<Self> {
        let (menu, gated) = build_menu(entries)?;
        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip("ClipJoint")
            .with_icon(icon::status_icon()?)
            .with_icon_as_template(true)
            .build()
            .context("Failed to create status item")?;

        Ok(Self { tray, gated, budget })
    }

    /// Clip-row budget the current menu was built with
    pub(super) fn budget(&self) -> usize {
        self.budget
    }

    pub(super) fn rebuild(&mut self, entries: &[MenuEntry], budget: usize) -> Result<()> {
        let (menu, gated) = build_menu(entries)?;
        self.tray.set_menu(Some(Box::new(menu)));
        self.gated = gated;
        self.budget = budget;
        debug!("Menu rebuilt with {} top-level clip rows", budget);
        Ok(())
    }

    pub(super) fn set_clipboard_state(&self, has_text: bool, can_add_clip: bool) {
        for (item, gate) in &self.gated {
            let enabled = match gate {
                ClipboardGate::AddClip => has_text && can_add_clip,
                ClipboardGate::Edit => has_text,
            };
            item.set_enabled(enabled);
        }
    }
}

fn build_menu(entries: &[MenuEntry]) -> Result<(Menu, Vec<(MenuItem, ClipboardGate)>)> {
    let mut gated = Vec::new();
    let items = build_items(entries, &mut gated)?;
    let menu = Menu::with_items(&as_refs(&items)).context("Failed to build menu")?;
    Ok((menu, gated))
}

fn as_refs(items: &[Box<dyn IsMenuItem>]) -> Vec<&dyn IsMenuItem> {
    items.iter().map(|item| item.as_ref()).collect()
}

fn build_items(
    entries: &[MenuEntry],
    gated: &mut Vec<(MenuItem, ClipboardGate)>,
) -> Result<Vec<Box<dyn IsMenuItem>>> {
    let mut items: Vec<Box<dyn IsMenuItem>> = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            MenuEntry::Action { command, title, enabled } => {
                let item = MenuItem::with_id(command.id(), title, *enabled, None);
                let gate = match command {
                    MenuCommand::AddFromClipboard => Some(ClipboardGate::AddClip),
                    MenuCommand::RenameFromClipboard(_)
                    | MenuCommand::ReplaceTextFromClipboard(_) => Some(ClipboardGate::Edit),
                    _ => None,
                };
                if let Some(gate) = gate {
                    gated.push((item.clone(), gate));
                }
                items.push(Box::new(item));
            }
            MenuEntry::Check { command, title, checked } => {
                let item = CheckMenuItem::with_id(command.id(), title, true, *checked, None);
                items.push(Box::new(item));
            }
            MenuEntry::Label(title) => {
                items.push(Box::new(MenuItem::new(title, false, None)));
            }
            MenuEntry::Submenu { title, enabled, entries } => {
                let children = build_items(entries, gated)?;
                let submenu = Submenu::with_items(title, *enabled, &as_refs(&children))
                    .with_context(|| format!("Failed to build submenu '{}'", title))?;
                items.push(Box::new(submenu));
            }
            MenuEntry::About => {
                let metadata = AboutMetadata {
                    name: Some("ClipJoint".to_string()),
                    version: Some(env!("CARGO_PKG_VERSION").to_string()),
                    ..Default::default()
                };
                let about = PredefinedMenuItem::about(Some("About ClipJoint"), Some(metadata));
                items.push(Box::new(about));
            }
            MenuEntry::Separator => items.push(Box::new(PredefinedMenuItem::separator())),
        }
    }

    Ok(items)
}
