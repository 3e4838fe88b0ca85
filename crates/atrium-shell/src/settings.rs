//! Settings record and manager.
//!
//! The record persists wholesale under one key. Loading merges persisted
//! values over the defaults (missing fields keep their default), so records
//! written by older revisions keep working.

use atrium_store::{KvStore, keys, load_json, save_json};
use atrium_types::error::{AtriumError, Result};
use serde::{Deserialize, Serialize};

/// Flat settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme_color: String,
    pub background_color: String,
    pub font_family: String,
    pub icon_size: u32,
    pub language: String,
    pub theme: String,
    /// 24-hour header clock; false renders 12-hour with AM/PM.
    pub clock_24h: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_color: "#007AFF".to_string(),
            background_color: "#F2F2F7".to_string(),
            font_family: "system".to_string(),
            icon_size: 80,
            language: "tr".to_string(),
            theme: "light".to_string(),
            clock_24h: true,
        }
    }
}

impl Settings {
    /// Concrete CSS font stack for the `font_family` value.
    pub fn resolved_font(&self) -> &str {
        if self.font_family == "system" {
            "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
        } else {
            &self.font_family
        }
    }
}

/// Owns the single settings instance and its persistence.
#[derive(Debug)]
pub struct SettingsManager {
    settings: Settings,
}

impl SettingsManager {
    /// Load settings, falling back to defaults on absent or malformed data.
    pub fn load(store: &dyn KvStore) -> Self {
        let settings = match load_json::<Settings>(store, keys::SETTINGS) {
            Ok(Some(s)) => s,
            Ok(None) => Settings::default(),
            Err(err) => {
                log::warn!("settings load failed: {err}");
                Settings::default()
            },
        };
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutate settings through a closure, then persist wholesale.
    pub fn edit(&mut self, store: &mut dyn KvStore, f: impl FnOnce(&mut Settings)) {
        f(&mut self.settings);
        self.persist(store);
    }

    /// Reset to defaults and drop the persisted record.
    pub fn reset(&mut self, store: &mut dyn KvStore) {
        self.settings = Settings::default();
        if let Err(err) = store.remove(keys::SETTINGS) {
            log::warn!("settings reset failed: {err}");
        }
    }

    /// Export as pretty-printed JSON.
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.settings)?)
    }

    /// Import a JSON document, merging over the defaults.
    ///
    /// A document that fails to parse is rejected with `Config` and leaves
    /// the current settings untouched.
    pub fn import(&mut self, store: &mut dyn KvStore, json: &str) -> Result<()> {
        let imported: Settings = serde_json::from_str(json)
            .map_err(|err| AtriumError::Config(format!("invalid settings document: {err}")))?;
        self.settings = imported;
        self.persist(store);
        Ok(())
    }

    fn persist(&self, store: &mut dyn KvStore) {
        if let Err(err) = save_json(store, keys::SETTINGS, &self.settings) {
            log::warn!("settings persist failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_store::MemoryStore;

    #[test]
    fn defaults_match_original_palette() {
        let s = Settings::default();
        assert_eq!(s.theme_color, "#007AFF");
        assert_eq!(s.background_color, "#F2F2F7");
        assert_eq!(s.icon_size, 80);
        assert_eq!(s.language, "tr");
        assert!(s.clock_24h);
    }

    #[test]
    fn load_from_empty_store_uses_defaults() {
        let store = MemoryStore::new();
        let mgr = SettingsManager::load(&store);
        assert_eq!(mgr.settings(), &Settings::default());
    }

    #[test]
    fn load_merges_partial_record_over_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(keys::SETTINGS, r##"{"themeColor":"#FF0000","iconSize":96}"##)
            .unwrap();
        let mgr = SettingsManager::load(&store);
        assert_eq!(mgr.settings().theme_color, "#FF0000");
        assert_eq!(mgr.settings().icon_size, 96);
        // Untouched fields keep their defaults.
        assert_eq!(mgr.settings().language, "tr");
    }

    #[test]
    fn malformed_record_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(keys::SETTINGS, "###").unwrap();
        let mgr = SettingsManager::load(&store);
        assert_eq!(mgr.settings(), &Settings::default());
    }

    #[test]
    fn edit_persists_wholesale() {
        let mut store = MemoryStore::new();
        let mut mgr = SettingsManager::load(&store);
        mgr.edit(&mut store, |s| {
            s.language = "en".to_string();
            s.icon_size = 64;
        });

        let reloaded = SettingsManager::load(&store);
        assert_eq!(reloaded.settings().language, "en");
        assert_eq!(reloaded.settings().icon_size, 64);
    }

    #[test]
    fn persisted_keys_are_camel_case() {
        let mut store = MemoryStore::new();
        let mut mgr = SettingsManager::load(&store);
        mgr.edit(&mut store, |_| {});
        let raw = store.get(keys::SETTINGS).unwrap().unwrap();
        assert!(raw.contains("\"themeColor\""));
        assert!(raw.contains("\"backgroundColor\""));
        assert!(raw.contains("\"iconSize\""));
    }

    #[test]
    fn reset_restores_defaults_and_clears_store() {
        let mut store = MemoryStore::new();
        let mut mgr = SettingsManager::load(&store);
        mgr.edit(&mut store, |s| s.icon_size = 120);
        mgr.reset(&mut store);
        assert_eq!(mgr.settings(), &Settings::default());
        assert!(store.get(keys::SETTINGS).unwrap().is_none());
    }

    #[test]
    fn export_import_roundtrip() {
        let mut store = MemoryStore::new();
        let mut mgr = SettingsManager::load(&store);
        mgr.edit(&mut store, |s| s.theme = "dark".to_string());
        let doc = mgr.export().unwrap();

        let mut store2 = MemoryStore::new();
        let mut mgr2 = SettingsManager::load(&store2);
        mgr2.import(&mut store2, &doc).unwrap();
        assert_eq!(mgr2.settings().theme, "dark");
    }

    #[test]
    fn failed_import_leaves_settings_untouched() {
        let mut store = MemoryStore::new();
        let mut mgr = SettingsManager::load(&store);
        mgr.edit(&mut store, |s| s.icon_size = 72);

        let err = mgr.import(&mut store, "not a settings document").unwrap_err();
        assert!(matches!(err, AtriumError::Config(_)));
        assert_eq!(mgr.settings().icon_size, 72);
    }

    #[test]
    fn resolved_font_expands_system() {
        let mut s = Settings::default();
        assert!(s.resolved_font().contains("Segoe UI"));
        s.font_family = "monospace".to_string();
        assert_eq!(s.resolved_font(), "monospace");
    }
}
