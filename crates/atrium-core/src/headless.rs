//! Headless surface: fixed bounds, recorded operations.
//!
//! Stands in for a real display in tests and scripted sessions. Every call
//! is recorded so callers can assert on (or log) what would have been
//! rendered.

use atrium_types::app::{App, AppId};
use atrium_types::error::Result;
use atrium_types::geometry::{Point, Size};
use atrium_types::surface::Surface;

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    CreateIcon(AppId),
    MoveIcon(AppId, Point),
    SetLabel(AppId, String),
    RemoveIcon(AppId),
    RefreshWindow(AppId),
}

/// A display-less surface with configurable bounds.
#[derive(Debug)]
pub struct HeadlessSurface {
    canvas: Size,
    viewport: Size,
    pub ops: Vec<SurfaceOp>,
}

impl HeadlessSurface {
    pub fn new(canvas: Size, viewport: Size) -> Self {
        Self {
            canvas,
            viewport,
            ops: Vec::new(),
        }
    }

    /// Count of recorded icon creations.
    pub fn icon_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::CreateIcon(_)))
            .count()
    }

    /// Last recorded move for an icon, if any.
    pub fn last_move(&self, id: &AppId) -> Option<Point> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::MoveIcon(moved, p) if moved == id => Some(*p),
            _ => None,
        })
    }
}

impl Surface for HeadlessSurface {
    fn canvas_bounds(&self) -> Size {
        self.canvas
    }

    fn viewport_bounds(&self) -> Size {
        self.viewport
    }

    fn create_icon_node(&mut self, app: &App) -> Result<()> {
        self.ops.push(SurfaceOp::CreateIcon(app.id.clone()));
        Ok(())
    }

    fn move_icon_node(&mut self, id: &AppId, position: Point) -> Result<()> {
        self.ops.push(SurfaceOp::MoveIcon(id.clone(), position));
        Ok(())
    }

    fn set_icon_label(&mut self, id: &AppId, name: &str) -> Result<()> {
        self.ops
            .push(SurfaceOp::SetLabel(id.clone(), name.to_string()));
        Ok(())
    }

    fn remove_icon_node(&mut self, id: &AppId) -> Result<()> {
        self.ops.push(SurfaceOp::RemoveIcon(id.clone()));
        Ok(())
    }

    fn refresh_window(&mut self, id: &AppId, _content: &str) -> Result<()> {
        self.ops.push(SurfaceOp::RefreshWindow(id.clone()));
        Ok(())
    }
}
