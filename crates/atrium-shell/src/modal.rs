//! Modal dialog state.
//!
//! At most one modal is active; opening a second replaces the first. The
//! add/edit form ships with its validation so the environment rejects
//! incomplete submissions with the right message key.

use atrium_types::app::AppId;
use atrium_types::error::{AtriumError, Result};

/// The modals the shell can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    AddApp,
    Settings,
    EditApp(AppId),
}

/// Tracks the active modal.
#[derive(Debug, Default)]
pub struct ModalManager {
    active: Option<Modal>,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Escape pressed: dismiss whatever is open.
    pub fn close_all(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Modal> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

/// Contents of the add/edit app form.
#[derive(Debug, Clone, Default)]
pub struct AppForm {
    pub name: String,
    pub icon: String,
    pub prompt: String,
}

impl AppForm {
    /// Name and prompt are required; the error carries the message key for
    /// the language manager.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.prompt.trim().is_empty() {
            return Err(AtriumError::Config("fill_all_fields".into()));
        }
        Ok(())
    }
}
