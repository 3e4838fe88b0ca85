//! Shell managers for ATRIUM DESK.
//!
//! Settings, search, localization, modal dialogs, and the icon context
//! menu: the UI event wiring of the environment, expressed as plain state
//! machines over the key-value store.

mod context_menu;
mod language;
mod modal;
mod search;
mod settings;

pub use context_menu::{ContextMenuManager, MenuAction};
pub use language::LanguageManager;
pub use modal::{AppForm, Modal, ModalManager};
pub use search::SearchManager;
pub use settings::{Settings, SettingsManager};
