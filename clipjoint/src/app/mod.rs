mod commands;
mod event_loop;
mod icon;
mod init;
mod state;
mod tray;

pub use state::App;
