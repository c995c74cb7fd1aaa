#[cfg(target_os = "macos")]
mod app;

use anyhow::Result;
use clipjoint_core::Config;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting ClipJoint");

    // Load configuration
    let config = Config::load(None)?;
    info!("Loaded configuration: {:?}", config);

    run(config)
}

#[cfg(target_os = "macos")]
fn run(config: Config) -> Result<()> {
    let app = app::App::new(config)?;
    app.run()
}

#[cfg(not(target_os = "macos"))]
fn run(_config: Config) -> Result<()> {
    anyhow::bail!("ClipJoint lives in the macOS menu bar and cannot run on this platform")
}
