use super::state::AppState;
use clipjoint_core::{MenuCommand, Notice};
use clipjoint_macos::TextPrompt;
use log::{debug, error};

impl AppState {
    /// Run a menu or hotkey command, then show its feedback and refresh the menu
    pub(super) fn execute(&mut self, command: MenuCommand) {
        debug!("Executing {:?}", command);

        match command {
            MenuCommand::CopyClip(id) => {
                if let Err(e) = self.store.copy_clip(id) {
                    error!("Failed to copy clip to the clipboard: {:#}", e);
                }
            }
            MenuCommand::AddFromClipboard => {
                self.store.add_clipboard_clip();
            }
            MenuCommand::NewBlankClip => {
                self.store.add_blank_clip();
            }
            MenuCommand::Rename(id) => {
                let Some(current) = self.store.clip(id).map(|clip| clip.name.clone()) else {
                    return;
                };
                if let Some(name) = TextPrompt::name(&current).run() {
                    self.store.update_name(id, &name);
                }
            }
            MenuCommand::EditText(id) => {
                let Some(current) = self.store.clip(id).map(|clip| clip.text.clone()) else {
                    return;
                };
                if let Some(text) = TextPrompt::text(&current).run() {
                    self.store.update_text(id, &text);
                }
            }
            MenuCommand::RenameFromClipboard(id) => match self.store.clipboard_text(true) {
                Some(text) => self.store.update_name(id, &text),
                None => self.show_notice(&Notice::ClipboardHasNoText),
            },
            MenuCommand::ReplaceTextFromClipboard(id) => match self.store.clipboard_text(true) {
                Some(text) => self.store.update_text(id, &text),
                None => self.show_notice(&Notice::ClipboardHasNoText),
            },
            MenuCommand::Move(id, direction) => self.store.move_clip(id, direction),
            MenuCommand::Delete(id) => self.store.delete_clip(id),
            MenuCommand::ToggleLaunchAtLogin => {
                let enabled = self.settings.launch_at_login_enabled();
                self.settings.set_launch_at_login(!enabled);
            }
            // Handled by the event loop
            MenuCommand::Quit => {}
        }

        for notice in self.store.drain_notices() {
            self.show_notice(&notice);
        }

        self.clipboard_has_text = self.store.can_import_clipboard_text(false);
        self.rebuild_menu();
    }
}
