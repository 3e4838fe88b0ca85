//! Edge/corner resize math.
//!
//! A resize is anchored to the geometry captured at pointer-down and driven
//! by the cumulative pointer delta, so intermediate moves don't accumulate
//! rounding. West/north drags move the origin together with the size so the
//! opposite edge stays fixed -- including when the minimum size clamps the
//! resize.

use atrium_types::app::AppId;
use atrium_types::geometry::{Point, Size};

/// Smallest window the resize handles will produce.
pub const MIN_WINDOW_SIZE: u32 = 200;

/// Which edge or corner handle was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    fn north(&self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    fn south(&self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    fn east(&self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    fn west(&self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

/// Apply a cumulative pointer delta to a starting geometry.
pub fn resize_rect(
    start_origin: Point,
    start_size: Size,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (Point, Size) {
    let min = MIN_WINDOW_SIZE as i32;
    let (sw, sh) = (start_size.width as i32, start_size.height as i32);

    let mut width = sw;
    let mut height = sh;
    let mut x = start_origin.x;
    let mut y = start_origin.y;

    if edge.east() {
        width = (sw + dx).max(min);
    }
    if edge.west() {
        width = (sw - dx).max(min);
        x = start_origin.x + dx;
        if width == min {
            // Keep the east edge pinned when the floor clamps the width.
            x = start_origin.x + sw - min;
        }
    }
    if edge.south() {
        height = (sh + dy).max(min);
    }
    if edge.north() {
        height = (sh - dy).max(min);
        y = start_origin.y + dy;
        if height == min {
            y = start_origin.y + sh - min;
        }
    }

    (Point::new(x, y), Size::new(width as u32, height as u32))
}

/// One pointer-resize of one window: captures the start geometry and maps
/// pointer deltas to new geometry until released.
#[derive(Debug)]
pub struct ResizeSession {
    app_id: AppId,
    edge: ResizeEdge,
    start_origin: Point,
    start_size: Size,
}

impl ResizeSession {
    pub fn begin(app_id: AppId, edge: ResizeEdge, origin: Point, size: Size) -> Self {
        Self {
            app_id,
            edge,
            start_origin: origin,
            start_size: size,
        }
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Geometry for the current cumulative pointer delta.
    pub fn update(&self, dx: i32, dy: i32) -> (Point, Size) {
        resize_rect(self.start_origin, self.start_size, self.edge, dx, dy)
    }
}
