use super::state::{AppState, UserEvent};
use super::tray::TrayMenu;
use super::App;
use anyhow::Result;
use clipjoint_core::{build_menu, MenuCommand, RefreshPlan};
use log::{debug, error, info, warn};
use winit::event::{Event, StartCause};
use winit::event_loop::ControlFlow;

impl App {
    /// Run the application event loop
    pub fn run(self) -> Result<()> {
        let App { event_loop, mut state } = self;

        info!("Starting event loop");

        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::NewEvents(StartCause::Init) => {
                    state.create_tray();
                }

                Event::UserEvent(UserEvent::Menu(menu_event)) => {
                    let Some(command) = MenuCommand::parse(&menu_event.id.0) else {
                        // About and label rows
                        debug!("Ignoring menu event {:?}", menu_event.id);
                        return;
                    };

                    if command == MenuCommand::Quit {
                        info!("Quit requested");
                        elwt.exit();
                        return;
                    }
                    state.execute(command);
                }

                Event::UserEvent(UserEvent::TrayClicked) => {
                    state.menu_opened();
                }

                Event::UserEvent(UserEvent::AddClipHotkey) => {
                    state.execute(MenuCommand::AddFromClipboard);
                }

                Event::UserEvent(UserEvent::Repoll) => {
                    state.refresh_clipboard_state(true);
                }

                Event::UserEvent(UserEvent::Poll) => {
                    state.refresh_clipboard_state(false);
                }

                Event::UserEvent(UserEvent::HideHud(token)) => {
                    state.hide_hud(token);
                }

                _ => {}
            }
        })?;

        Ok(())
    }
}

impl AppState {
    fn create_tray(&mut self) {
        self.clipboard_has_text = self.store.can_import_clipboard_text(true);
        let budget = self.top_level_budget();
        let entries = build_menu(&self.menu_state(budget));

        match TrayMenu::new(&entries, budget) {
            Ok(tray) => {
                info!("Status item ready with {} clips", self.store.len());
                self.tray = Some(tray);
            }
            Err(e) => error!("Failed to create status item: {:#}", e),
        }
    }

    /// The menu is about to show: reconcile settings and clipboard state
    fn menu_opened(&mut self) {
        let was_enabled = self.settings.launch_at_login_enabled();
        self.settings.refresh();

        // Geometry may have changed since the last rebuild; the new layout applies
        // from the next opening
        let budget = self.top_level_budget();
        let budget_changed = self.tray.as_ref().is_some_and(|tray| tray.budget() != budget);
        if budget_changed || was_enabled != self.settings.launch_at_login_enabled() {
            self.rebuild_menu();
        }

        if self.tray.is_none() {
            warn!("Status item missing, clicks are ignored");
            return;
        }

        let plan = RefreshPlan::after_menu_opened(self.config.clipboard.settle_delay());
        for delay in plan.delays() {
            self.schedule(*delay, UserEvent::Repoll);
        }
    }
}
