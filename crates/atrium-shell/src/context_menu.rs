//! Icon context menu state.

use atrium_types::app::AppId;
use atrium_types::geometry::Point;

/// Entries in the icon context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Edit,
    Delete,
}

/// Right-click menu targeting one app icon.
#[derive(Debug, Default)]
pub struct ContextMenuManager {
    state: Option<(Point, AppId)>,
}

impl ContextMenuManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the menu at a position for an app; replaces any open menu.
    pub fn show(&mut self, at: Point, app_id: AppId) {
        self.state = Some((at, app_id));
    }

    pub fn hide(&mut self) {
        self.state = None;
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    pub fn position(&self) -> Option<Point> {
        self.state.as_ref().map(|(p, _)| *p)
    }

    pub fn target(&self) -> Option<&AppId> {
        self.state.as_ref().map(|(_, id)| id)
    }

    /// Activate an entry: returns the action with its target and hides the
    /// menu. `None` when no menu is open.
    pub fn select(&mut self, action: MenuAction) -> Option<(MenuAction, AppId)> {
        self.state.take().map(|(_, id)| (action, id))
    }
}
