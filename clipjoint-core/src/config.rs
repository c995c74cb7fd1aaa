use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_STORAGE_KEY;
use crate::layout::MenuMetrics;

/// Configuration for ClipJoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub menu: MenuMetrics,
    pub clipboard: ClipboardConfig,
    pub hud: HudConfig,
    pub hotkey: HotkeyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Preference key holding the clip list
    pub key: String,
    /// Keep preferences in this JSON file instead of the system defaults database
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Delay before the second clipboard re-poll after the menu opens
    pub settle_delay_ms: u64,
    /// Interval of the cheap change-counter check while the app is idle (0 disables)
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Show the feedback HUD at all
    pub enabled: bool,
    /// How long the HUD stays up, in milliseconds
    pub display_ms: u64,
    pub fade_in_ms: u64,
    pub fade_out_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Global shortcut that adds the clipboard as a clip (e.g. "cmd+ctrl+v"); empty disables
    pub add_clip: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            file: None,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 80,
            poll_interval_ms: 1_000,
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            display_ms: 950,
            fade_in_ms: 140,
            fade_out_ms: 160,
        }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            add_clip: "cmd+ctrl+v".to_string(),
        }
    }
}

impl ClipboardConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        (self.poll_interval_ms > 0).then(|| Duration::from_millis(self.poll_interval_ms))
    }
}

impl HudConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn fade_in_secs(&self) -> f64 {
        self.fade_in_ms as f64 / 1000.0
    }

    pub fn fade_out_secs(&self) -> f64 {
        self.fade_out_ms as f64 / 1000.0
    }
}

impl HotkeyConfig {
    /// The configured shortcut, `None` when disabled
    pub fn add_clip_shortcut(&self) -> Option<&str> {
        let trimmed = self.add_clip.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save(Some(config_path))?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = Self::resolve_path(path)?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }

    fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path),
            None => config_dir()
                .map(|dir| dir.join("config.toml"))
                .context("No home directory to keep configuration in"),
        }
    }
}

/// `~/.config/clipjoint`
pub(crate) fn config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("clipjoint");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipjoint").join("config.toml");

        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.menu.row_height = 24.0;
        config.hotkey.add_clip = String::new();
        config.storage.file = Some(dir.path().join("prefs.json"));
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.hotkey.add_clip_shortcut(), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[menu]\nfixed_row_count = 10\n\n[hud]\nenabled = false\n").unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.menu.fixed_row_count, 10);
        assert_eq!(config.menu.row_height, 22.0);
        assert!(!config.hud.enabled);
        assert_eq!(config.hud.display_ms, 950);
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[menu\n").unwrap();

        assert!(Config::load(Some(path)).is_err());
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.clipboard.settle_delay(), Duration::from_millis(80));
        assert_eq!(config.clipboard.poll_interval(), Some(Duration::from_secs(1)));
        assert_eq!(config.hud.fade_in_secs(), 0.14);
        assert_eq!(config.hotkey.add_clip_shortcut(), Some("cmd+ctrl+v"));

        let disabled = ClipboardConfig {
            poll_interval_ms: 0,
            ..ClipboardConfig::default()
        };
        assert_eq!(disabled.poll_interval(), None);
    }
}
