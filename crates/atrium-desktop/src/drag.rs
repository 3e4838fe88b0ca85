//! Interactive drag state for a single icon.
//!
//! One `DragSession` exists at a time, created on pointer-down over an icon
//! and consumed on pointer-up/cancel. A press only becomes a drag once the
//! pointer travels past the threshold on either axis; a sub-threshold
//! press-release is a click and moves nothing.

use atrium_types::app::AppId;
use atrium_types::geometry::{Point, Size};

use crate::placement::PlacementEngine;

/// Pointer-drag of one desktop icon, in canvas-local coordinates.
#[derive(Debug)]
pub struct DragSession {
    icon_id: AppId,
    /// Pointer position at press, for the activation threshold.
    start: Point,
    /// Pointer offset into the icon at press, so the icon doesn't jump to
    /// the pointer tip.
    grab_offset: Point,
    /// Set once the pointer travels past the drag threshold.
    dragging: bool,
    /// Last resolved icon position while dragging.
    position: Point,
}

impl DragSession {
    /// Begin a potential drag: pointer pressed at `pointer` over an icon
    /// whose origin is `icon_origin`.
    pub fn begin(icon_id: AppId, pointer: Point, icon_origin: Point) -> Self {
        Self {
            icon_id,
            start: pointer,
            grab_offset: Point::new(pointer.x - icon_origin.x, pointer.y - icon_origin.y),
            dragging: false,
            position: icon_origin,
        }
    }

    pub fn icon_id(&self) -> &AppId {
        &self.icon_id
    }

    /// Whether the press has become an actual drag.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed a pointer move. Returns the icon's new position when the drag is
    /// active, `None` while still below the activation threshold.
    ///
    /// `others` holds the positions of every icon except the dragged one;
    /// the target is snapped to the grid, clamped to the canvas, then
    /// reflowed off any icon it would overlap.
    pub fn update(
        &mut self,
        engine: &PlacementEngine,
        pointer: Point,
        others: &[Point],
        canvas: Size,
    ) -> Option<Point> {
        if !self.dragging {
            let dx = (pointer.x - self.start.x).abs();
            let dy = (pointer.y - self.start.y).abs();
            let threshold = engine.config().drag_threshold;
            if dx > threshold || dy > threshold {
                self.dragging = true;
            } else {
                return None;
            }
        }

        let target = Point::new(pointer.x - self.grab_offset.x, pointer.y - self.grab_offset.y);
        let snapped = engine.config().snap_to_grid(target);
        let clamped = engine.config().clamp_to_canvas(snapped, canvas);
        let resolved = engine.find_non_overlapping_position(clamped, others, canvas);

        self.position = resolved;
        Some(resolved)
    }

    /// Release the pointer. Returns the final position to persist when an
    /// actual drag happened, `None` for a plain click. Drag state is
    /// released either way.
    pub fn finish(self) -> Option<Point> {
        if self.dragging { Some(self.position) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::PlacementConfig;

    fn engine() -> PlacementEngine {
        PlacementEngine::new(PlacementConfig::default(), 1)
    }

    const CANVAS: Size = Size::new(800, 600);

    #[test]
    fn sub_threshold_press_is_a_click() {
        let e = engine();
        let mut drag = DragSession::begin("calc".into(), Point::new(50, 50), Point::new(40, 40));
        // 5px on each axis is exactly the threshold, not past it.
        assert!(drag.update(&e, Point::new(55, 55), &[], CANVAS).is_none());
        assert!(!drag.is_dragging());
        assert_eq!(drag.finish(), None);
    }

    #[test]
    fn crossing_threshold_activates_drag() {
        let e = engine();
        let mut drag = DragSession::begin("calc".into(), Point::new(50, 50), Point::new(40, 40));
        let moved = drag.update(&e, Point::new(56, 50), &[], CANVAS);
        assert!(drag.is_dragging());
        // Target (46, 40) snaps onto the 20px lattice.
        assert_eq!(moved, Some(Point::new(40, 40)));
    }

    #[test]
    fn drag_snaps_and_clamps() {
        let e = engine();
        let mut drag = DragSession::begin("calc".into(), Point::new(10, 10), Point::new(0, 0));
        // Way off the right/bottom edge: clamp to (700, 490).
        let moved = drag.update(&e, Point::new(5000, 5000), &[], CANVAS);
        assert_eq!(moved, Some(Point::new(700, 490)));
    }

    #[test]
    fn drag_reflows_off_occupied_icon() {
        let e = engine();
        let others = [Point::new(200, 200)];
        let mut drag = DragSession::begin("calc".into(), Point::new(0, 0), Point::new(0, 0));
        let moved = drag.update(&e, Point::new(200, 200), &others, CANVAS).unwrap();
        assert_ne!(moved, Point::new(200, 200));
        assert!(e.is_position_available(&others, moved));
    }

    #[test]
    fn finish_reports_last_position_once_dragging() {
        let e = engine();
        let mut drag = DragSession::begin("calc".into(), Point::new(10, 10), Point::new(0, 0));
        drag.update(&e, Point::new(130, 70), &[], CANVAS);
        assert_eq!(drag.finish(), Some(Point::new(120, 60)));
    }

    #[test]
    fn once_armed_stays_armed_near_start() {
        let e = engine();
        let mut drag = DragSession::begin("calc".into(), Point::new(10, 10), Point::new(0, 0));
        drag.update(&e, Point::new(40, 10), &[], CANVAS);
        // Returning near the press point keeps the drag active.
        let moved = drag.update(&e, Point::new(11, 10), &[], CANVAS);
        assert!(drag.is_dragging());
        assert!(moved.is_some());
    }
}
