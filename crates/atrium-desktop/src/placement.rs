//! Non-overlapping icon placement.
//!
//! Two icons "overlap" when their positions are closer than the threshold on
//! *both* axes -- the per-axis test makes a square exclusion zone around
//! every icon. New icons get the first free cell of a row-major grid scan;
//! dragged icons are reflowed to the nearest free lattice point by a bounded
//! square spiral walk.

use atrium_types::geometry::{Point, Size, clamp, snap};

use crate::rng::Lcg;

/// Geometry constants for the placement engine.
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Lattice cell size for drag snapping and the spiral step.
    pub grid_size: i32,
    /// Icon edge length in pixels.
    pub icon_size: i32,
    /// Gap between icons in the grid scan and row packing.
    pub icon_margin: i32,
    /// Pointer travel (per axis) before a press becomes a drag.
    pub drag_threshold: i32,
    /// Reserved strip at the canvas bottom (icon plus label).
    pub bottom_reserve: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            icon_size: 100,
            icon_margin: 20,
            drag_threshold: 5,
            bottom_reserve: 110,
        }
    }
}

impl PlacementConfig {
    /// Minimum per-axis distance for two icons to count as non-overlapping.
    pub fn overlap_threshold(&self) -> i32 {
        self.icon_size - 20
    }

    /// Largest legal x for an icon origin.
    pub fn max_x(&self, canvas: Size) -> i32 {
        canvas.width as i32 - self.icon_size
    }

    /// Largest legal y for an icon origin.
    pub fn max_y(&self, canvas: Size) -> i32 {
        canvas.height as i32 - self.bottom_reserve
    }

    /// Clamp a position into the legal icon area of the canvas.
    pub fn clamp_to_canvas(&self, p: Point, canvas: Size) -> Point {
        Point::new(
            clamp(p.x, 0, self.max_x(canvas)),
            clamp(p.y, 0, self.max_y(canvas)),
        )
    }

    /// Snap both axes to the nearest lattice point.
    pub fn snap_to_grid(&self, p: Point) -> Point {
        Point::new(snap(p.x, self.grid_size), snap(p.y, self.grid_size))
    }

    fn in_bounds(&self, p: Point, canvas: Size) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max_x(canvas) && p.y <= self.max_y(canvas)
    }
}

/// Random fallback attempts after the grid scan finds no free cell.
const RANDOM_ATTEMPTS: u32 = 50;
/// Lattice points visited by the spiral walk before giving up.
const SPIRAL_BUDGET: u32 = 100;

/// Icon placement engine. Holds the geometry config and the RNG used by the
/// saturated-canvas fallback.
#[derive(Debug)]
pub struct PlacementEngine {
    config: PlacementConfig,
    rng: Lcg,
}

impl PlacementEngine {
    pub fn new(config: PlacementConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Lcg::new(seed),
        }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Whether `p` clears the overlap threshold against every occupied
    /// position.
    pub fn is_position_available(&self, occupied: &[Point], p: Point) -> bool {
        let threshold = self.config.overlap_threshold();
        !occupied.iter().any(|&o| {
            let (dx, dy) = o.axis_distance(p);
            dx < threshold && dy < threshold
        })
    }

    /// Position for a newly created icon.
    ///
    /// Scans grid cells row-major (cell stride = icon size + margin) and
    /// returns the first free one. When the scan comes up empty, up to 50
    /// random candidates are tried; when those fail too, the margin origin
    /// is returned unconditionally, accepting overlap.
    pub fn find_available_position(&mut self, occupied: &[Point], canvas: Size) -> Point {
        let c = &self.config;
        let stride = c.icon_size + c.icon_margin;

        let mut y = c.icon_margin;
        while y < canvas.height as i32 - c.icon_size {
            let mut x = c.icon_margin;
            while x < canvas.width as i32 - c.icon_size {
                let p = Point::new(x, y);
                if self.is_position_available(occupied, p) {
                    return p;
                }
                x += stride;
            }
            y += stride;
        }

        self.find_random_available_position(occupied, canvas)
    }

    fn find_random_available_position(&mut self, occupied: &[Point], canvas: Size) -> Point {
        let max_x = self.config.max_x(canvas).max(0) as u32;
        let max_y = self.config.max_y(canvas).max(0) as u32;

        for _ in 0..RANDOM_ATTEMPTS {
            let p = Point::new(
                self.rng.next_below(max_x) as i32,
                self.rng.next_below(max_y) as i32,
            );
            if self.is_position_available(occupied, p) {
                return p;
            }
        }

        log::warn!("canvas saturated, placing icon at the margin origin");
        Point::new(self.config.icon_margin, self.config.icon_margin)
    }

    /// Resolve a drag target against the *other* icons.
    ///
    /// A free target is returned unchanged. A colliding target starts a
    /// square spiral walk (right, down, left, up; leg length grows by one
    /// every two turns) over the lattice, returning the first visited point
    /// that is both free and in bounds. Budget exhausted: the original
    /// target is returned, overlap and all.
    pub fn find_non_overlapping_position(
        &self,
        target: Point,
        others: &[Point],
        canvas: Size,
    ) -> Point {
        if self.is_position_available(others, target) {
            return target;
        }

        let step = self.config.grid_size;
        let mut p = target;
        let mut direction = 0u8;
        let mut leg_len = 1u32;
        let mut leg_pos = 0u32;

        for _ in 0..SPIRAL_BUDGET {
            if self.is_position_available(others, p) && self.config.in_bounds(p, canvas) {
                return p;
            }

            match direction {
                0 => p.x += step,
                1 => p.y += step,
                2 => p.x -= step,
                _ => p.y -= step,
            }

            leg_pos += 1;
            if leg_pos == leg_len {
                leg_pos = 0;
                direction = (direction + 1) % 4;
                if direction.is_multiple_of(2) {
                    leg_len += 1;
                }
            }
        }

        target
    }

    /// Deterministic row packing for "arrange icons": left-to-right,
    /// top-to-bottom from the margin, wrapping when the next icon would
    /// cross the canvas width. Depends only on the index, so repeated calls
    /// are idempotent.
    pub fn arrange_icons(&self, count: usize, canvas: Size) -> Vec<Point> {
        let c = &self.config;
        let stride = c.icon_size + c.icon_margin;

        let mut positions = Vec::with_capacity(count);
        let mut x = c.icon_margin;
        let mut y = c.icon_margin;
        for _ in 0..count {
            positions.push(Point::new(x, y));
            x += stride;
            if x + c.icon_size > canvas.width as i32 {
                x = c.icon_margin;
                y += stride;
            }
        }
        positions
    }
}
