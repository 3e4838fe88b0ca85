//! Icon placement and drag-reflow engine for ATRIUM DESK.
//!
//! Computes non-overlapping pixel positions for desktop icons: row-major
//! grid scan for new icons, grid snapping and a bounded square spiral search
//! during interactive drag, and deterministic row packing for "arrange
//! icons". Placement never fails -- when the search budget is exhausted it
//! returns a best-effort (possibly overlapping) position.

mod drag;
mod placement;
mod rng;

pub use drag::DragSession;
pub use placement::{PlacementConfig, PlacementEngine};
pub use rng::Lcg;
