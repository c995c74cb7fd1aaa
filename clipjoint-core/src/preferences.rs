//! Key-value preference storage backing the clip list
use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// A named-entry byte store (NSUserDefaults on macOS)
pub trait PreferenceStore {
    /// Stored bytes for `key`, `None` when the entry does not exist
    fn data(&self, key: &str) -> Option<Vec<u8>>;

    /// Overwrite the entry for `key`
    fn set_data(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        (**self).data(key)
    }

    fn set_data(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set_data(key, value)
    }
}

/// Volatile store used by tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    entries: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_data` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set_data(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Preferences kept as a JSON object of key → UTF-8 string in a single file
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/clipjoint/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        crate::config::config_dir().map(|dir| dir.join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let entries = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(entries)
    }
}

impl PreferenceStore for FilePreferences {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key).map(String::into_bytes),
            Err(e) => {
                log::warn!("Ignoring unreadable preferences: {:#}", e);
                None
            }
        }
    }

    fn set_data(&mut self, key: &str, value: &[u8]) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), String::from_utf8_lossy(value).into_owned());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_preferences() {
        let mut prefs = MemoryPreferences::new();
        assert_eq!(prefs.data("k"), None);

        prefs.set_data("k", b"[1]").unwrap();
        assert_eq!(prefs.data("k").as_deref(), Some(&b"[1]"[..]));
        assert_eq!(prefs.writes(), 1);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut prefs: Box<dyn PreferenceStore> = Box::new(MemoryPreferences::new());
        prefs.set_data("k", b"v").unwrap();
        assert_eq!(prefs.data("k").as_deref(), Some(&b"v"[..]));
    }

    #[test]
    fn test_file_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = FilePreferences::new(&path);
        assert_eq!(prefs.data("clips"), None);

        prefs.set_data("clips", br#"[{"id":"x"}]"#).unwrap();
        prefs.set_data("other", b"1").unwrap();

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.data("clips").as_deref(), Some(&br#"[{"id":"x"}]"#[..]));
        assert_eq!(reopened.data("other").as_deref(), Some(&b"1"[..]));
    }

    #[test]
    fn test_file_preferences_recover_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let mut prefs = FilePreferences::new(&path);
        assert_eq!(prefs.data("clips"), None);

        prefs.set_data("clips", b"[]").unwrap();
        assert_eq!(prefs.data("clips").as_deref(), Some(&b"[]"[..]));
    }
}
