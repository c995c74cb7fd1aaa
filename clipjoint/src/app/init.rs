use super::state::{AppState, UserEvent};
use super::App;
use anyhow::Result;
use clipjoint_core::{AppSettings, ClipStore, Config, FilePreferences, PreferenceStore, TimerSlot};
use clipjoint_macos::{GeneralPasteboard, HotkeyManager, MainAppLoginItem, UserDefaults};
use log::{info, warn};
use std::time::Duration;
use tokio::runtime::Handle;
use tray_icon::menu::MenuEvent;
use tray_icon::TrayIconEvent;
use winit::event_loop::{EventLoopBuilder, EventLoopProxy};
use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};

impl App {
    /// Create a new application
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing application");

        // Menu bar only: no Dock icon, no app menu
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event()
            .with_activation_policy(ActivationPolicy::Accessory)
            .build()?;
        let proxy = event_loop.create_proxy();

        let preferences = preference_store(&config);
        let store =
            ClipStore::load(preferences, GeneralPasteboard::new(), config.storage.key.clone());
        let settings = AppSettings::new(MainAppLoginItem::new());
        info!("Launch at login: {}", settings.launch_at_login_enabled());

        let hotkey_manager = config.hotkey.add_clip_shortcut().and_then(|shortcut| {
            let hotkey_proxy = proxy.clone();
            match HotkeyManager::new(shortcut, move || {
                let _ = hotkey_proxy.send_event(UserEvent::AddClipHotkey);
            }) {
                Ok(manager) => Some(manager),
                Err(e) => {
                    warn!("Quick-add shortcut unavailable: {:#}", e);
                    None
                }
            }
        });

        forward_tray_events(&proxy);

        let runtime = Handle::current();
        if let Some(interval) = config.clipboard.poll_interval() {
            spawn_clipboard_poll(&runtime, proxy.clone(), interval);
        }

        Ok(Self {
            event_loop,
            state: AppState {
                config,
                store,
                settings,
                proxy,
                runtime,
                tray: None,
                hud: None,
                hud_timer: TimerSlot::new(),
                clipboard_has_text: false,
                _hotkey_manager: hotkey_manager,
            },
        })
    }
}

fn preference_store(config: &Config) -> Box<dyn PreferenceStore> {
    match &config.storage.file {
        Some(path) => {
            info!("Keeping clips in {}", path.display());
            Box::new(FilePreferences::new(path))
        }
        None => Box::new(UserDefaults::standard()),
    }
}

/// Forward menu activations and status item clicks to the event loop
fn forward_tray_events(proxy: &EventLoopProxy<UserEvent>) {
    let menu_proxy = proxy.clone();
    std::thread::spawn(move || {
        let rx = MenuEvent::receiver();
        while let Ok(event) = rx.recv() {
            if menu_proxy.send_event(UserEvent::Menu(event)).is_err() {
                break;
            }
        }
    });

    let tray_proxy = proxy.clone();
    std::thread::spawn(move || {
        let rx = TrayIconEvent::receiver();
        while rx.recv().is_ok() {
            if tray_proxy.send_event(UserEvent::TrayClicked).is_err() {
                break;
            }
        }
    });
}

fn spawn_clipboard_poll(runtime: &Handle, proxy: EventLoopProxy<UserEvent>, period: Duration) {
    runtime.spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if proxy.send_event(UserEvent::Poll).is_err() {
                break;
            }
        }
    });
}
