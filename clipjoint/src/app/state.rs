use clipjoint_core::geometry::usable_height;
use clipjoint_core::{
    AppSettings, ClipStore, Config, MenuState, Notice, PreferenceStore, TimerSlot, TimerToken,
};
use clipjoint_macos::{
    displays, pointer_location, GeneralPasteboard, HotkeyManager, HudWindow, MainAppLoginItem,
};
use log::{debug, error};
use std::time::Duration;
use tokio::runtime::Handle;
use tray_icon::menu::MenuEvent;
use winit::event_loop::{EventLoop, EventLoopProxy};

use super::tray::TrayMenu;

pub(super) type Store = ClipStore<Box<dyn PreferenceStore>, GeneralPasteboard>;

/// Events posted to the main loop from other threads and timers
#[derive(Debug)]
pub(super) enum UserEvent {
    Menu(MenuEvent),
    /// The status item was clicked, i.e. its menu is opening
    TrayClicked,
    AddClipHotkey,
    /// Re-read the clipboard after the menu opened
    Repoll,
    /// Periodic change-counter check
    Poll,
    HideHud(TimerToken),
}

/// Main application state
pub struct App {
    pub(super) event_loop: EventLoop<UserEvent>,
    pub(super) state: AppState,
}

/// Everything the event loop mutates
pub(super) struct AppState {
    pub(super) config: Config,
    pub(super) store: Store,
    pub(super) settings: AppSettings<MainAppLoginItem>,
    pub(super) proxy: EventLoopProxy<UserEvent>,
    pub(super) runtime: Handle,
    /// Created once the event loop is running
    pub(super) tray: Option<TrayMenu>,
    pub(super) hud: Option<HudWindow>,
    pub(super) hud_timer: TimerSlot,
    pub(super) clipboard_has_text: bool,
    pub(super) _hotkey_manager: Option<HotkeyManager>,
}

impl AppState {
    /// Clip rows that fit at the top level of the menu on the display under the pointer
    pub(super) fn top_level_budget(&self) -> usize {
        let height = usable_height(&displays(), pointer_location());
        self.config.menu.top_level_budget(height)
    }

    pub(super) fn menu_state(&self, top_level_budget: usize) -> MenuState<'_> {
        MenuState {
            clips: self.store.clips(),
            top_level_budget,
            clipboard_has_text: self.clipboard_has_text,
            launch_at_login: self.settings.launch_at_login_enabled(),
            launch_at_login_error: self.settings.launch_at_login_error(),
        }
    }

    /// Rebuild the status item menu from the current store and settings
    pub(super) fn rebuild_menu(&mut self) {
        let budget = self.top_level_budget();
        let entries = clipjoint_core::build_menu(&self.menu_state(budget));
        if let Some(tray) = self.tray.as_mut() {
            if let Err(e) = tray.rebuild(&entries, budget) {
                error!("Failed to rebuild menu: {:#}", e);
            }
        }
    }

    /// Re-check the clipboard and update the rows that depend on it
    pub(super) fn refresh_clipboard_state(&mut self, force_refresh: bool) {
        let has_text = self.store.can_import_clipboard_text(force_refresh);
        if has_text != self.clipboard_has_text {
            debug!("Clipboard has importable text: {}", has_text);
        }
        self.clipboard_has_text = has_text;

        if let Some(tray) = self.tray.as_ref() {
            tray.set_clipboard_state(has_text, self.store.can_add_another_clip());
        }
    }

    /// Flash `notice` in the HUD and arm its hide timer
    pub(super) fn show_notice(&mut self, notice: &Notice) {
        if !self.config.hud.enabled {
            return;
        }

        let hud_config = &self.config.hud;
        let hud = self.hud.get_or_insert_with(|| {
            HudWindow::new(hud_config.fade_in_secs(), hud_config.fade_out_secs())
        });
        hud.show(notice.message());

        let token = self.hud_timer.arm();
        self.schedule(self.config.hud.display_duration(), UserEvent::HideHud(token));
    }

    pub(super) fn hide_hud(&mut self, token: TimerToken) {
        if !self.hud_timer.fire(token) {
            return;
        }
        if let Some(hud) = self.hud.as_ref() {
            hud.hide();
        }
    }

    /// Post `event` back to the event loop after `delay`
    pub(super) fn schedule(&self, delay: Duration, event: UserEvent) {
        let proxy = self.proxy.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = proxy.send_event(event);
        });
    }
}
