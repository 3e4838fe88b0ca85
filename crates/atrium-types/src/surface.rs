//! Rendering surface trait.
//!
//! The environment dispatches all presentation through this trait boundary --
//! it never talks to a concrete display. A host binds it to a real canvas; a
//! test binds it to a recorder.

use crate::app::{App, AppId};
use crate::error::Result;
use crate::geometry::{Point, Size};

/// Capability interface over the host's rendering surface.
///
/// Icon nodes are keyed by app id: the environment creates one per app,
/// moves it during drag/arrange, and removes it on delete. Window content is
/// pushed through `refresh_window` whenever generation completes while the
/// window is open.
pub trait Surface {
    /// Current pixel bounds of the desktop canvas (icon area).
    fn canvas_bounds(&self) -> Size;

    /// Current pixel bounds of the full viewport (window area).
    fn viewport_bounds(&self) -> Size;

    /// Create the icon node for an app at its stored position.
    fn create_icon_node(&mut self, app: &App) -> Result<()>;

    /// Move an existing icon node.
    fn move_icon_node(&mut self, id: &AppId, position: Point) -> Result<()>;

    /// Update the label on an existing icon node.
    fn set_icon_label(&mut self, id: &AppId, name: &str) -> Result<()>;

    /// Remove the icon node for a deleted app.
    fn remove_icon_node(&mut self, id: &AppId) -> Result<()>;

    /// Replace the rendered content of an open window.
    fn refresh_window(&mut self, id: &AppId, content: &str) -> Result<()>;
}
