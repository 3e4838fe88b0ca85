//! Key-value persistence for ATRIUM DESK.
//!
//! All durable state (app list, settings, window geometry, search history,
//! language, last-opened app) lives behind the [`KvStore`] trait as
//! JSON-encoded string values. Stores are independent per key: no
//! transaction spans multiple keys, and a failed write on one key never
//! rolls back another.

mod dir;
mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

use atrium_types::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Well-known store keys. The JSON shape of each value is the only
/// "protocol" this system has.
pub mod keys {
    /// Ordered list of app records.
    pub const APPS: &str = "desktop_apps";
    /// Flat settings record.
    pub const SETTINGS: &str = "desktop_settings";
    /// Map of app id to window geometry.
    pub const WINDOW_STATES: &str = "window_states";
    /// Bounded list of recent search queries.
    pub const SEARCH_HISTORY: &str = "search_history";
    /// Single language code.
    pub const LANGUAGE: &str = "desktop_language";
    /// Id of the most recently opened app.
    pub const LAST_OPENED: &str = "last_opened_app";
}

/// Opaque string-to-string persistent store.
pub trait KvStore {
    /// Fetch the raw value for a key, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All present keys, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

/// Load and decode a JSON value.
///
/// Malformed persisted JSON is treated as absent: the value is logged at
/// `warn` and `None` is returned so callers fall back to defaults. Only the
/// store itself failing surfaces as an error.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            log::warn!("discarding malformed value for key {key:?}: {err}");
            Ok(None)
        },
    }
}

/// Encode and write a JSON value.
pub fn save_json<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
