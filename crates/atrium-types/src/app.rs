//! App and window records as persisted by the environment.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Opaque unique identifier for an app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A user-defined desktop app: name, glyph, prompt, generated content, and
/// the icon position on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: AppId,
    pub name: String,
    /// Glyph key rendered as the icon face.
    pub icon: String,
    /// Free-text prompt the content generator works from.
    #[serde(default)]
    pub prompt: String,
    /// Generated HTML document, empty until generation completes.
    #[serde(default)]
    pub content: String,
    pub position: Point,
}

/// Geometry snapshot for one app window. Persisted independently of the app
/// so it survives window close/reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
}

impl WindowGeometry {
    pub const fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            minimized: false,
            maximized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_display_and_eq() {
        let id = AppId::new("welcome");
        assert_eq!(id.to_string(), "welcome");
        assert_eq!(id, AppId::from("welcome"));
    }

    #[test]
    fn app_id_serializes_transparent() {
        let id = AppId::new("1712000000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""1712000000000""#);
    }

    #[test]
    fn app_roundtrip_with_defaults() {
        // Records written before content generation carry no prompt/content.
        let json = r#"{"id":"calc","name":"Calculator","icon":"C","position":{"x":50,"y":180}}"#;
        let app: App = serde_json::from_str(json).unwrap();
        assert_eq!(app.id, AppId::from("calc"));
        assert!(app.prompt.is_empty());
        assert!(app.content.is_empty());
        assert_eq!(app.position, Point::new(50, 180));

        let back = serde_json::to_string(&app).unwrap();
        let again: App = serde_json::from_str(&back).unwrap();
        assert_eq!(app, again);
    }

    #[test]
    fn window_geometry_flags_default_false() {
        let json = r#"{"position":{"x":100,"y":100},"size":{"width":600,"height":400}}"#;
        let g: WindowGeometry = serde_json::from_str(json).unwrap();
        assert!(!g.minimized);
        assert!(!g.maximized);
    }
}
