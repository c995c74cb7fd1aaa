use anyhow::{anyhow, Result};
use global_hotkey::{hotkey::HotKey, GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use log::{debug, info};
use parking_lot::Mutex;
use std::str::FromStr;

/// Manages the global "add clip from clipboard" shortcut
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

/// Parse a shortcut such as "cmd+ctrl+v" or "shift+alt+KeyC"
pub fn parse_shortcut(shortcut: &str) -> Result<HotKey> {
    HotKey::from_str(shortcut).map_err(|e| anyhow!("Invalid shortcut '{}': {}", shortcut, e))
}

impl HotkeyManager {
    /// Register `shortcut` and run `callback` every time it is pressed
    pub fn new<F>(shortcut: &str, callback: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        info!("Initializing global hotkey manager");

        let hotkey = parse_shortcut(shortcut)?;
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| anyhow!("Failed to create hotkey manager: {}", e))?;

        manager
            .register(hotkey)
            .map_err(|e| anyhow!("Failed to register hotkey: {}", e))?;

        let callback = Mutex::new(callback);
        let hotkey_id = hotkey.id();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if event.id == hotkey_id && event.state == HotKeyState::Pressed {
                debug!("Global hotkey pressed");
                (*callback.lock())();
            }
        }));

        info!("Registered global hotkey: {}", shortcut);

        Ok(Self { manager, hotkey })
    }

    /// Unregister the hotkey
    pub fn unregister(&self) -> Result<()> {
        self.manager
            .unregister(self.hotkey)
            .map_err(|e| anyhow!("Failed to unregister hotkey: {}", e))
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        GlobalHotKeyEvent::set_event_handler(None::<fn(GlobalHotKeyEvent)>);
        let _ = self.unregister();
    }
}
