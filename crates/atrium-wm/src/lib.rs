//! Window geometry manager for ATRIUM DESK.
//!
//! Tracks open app windows (position, size, z-order, minimized/maximized
//! flags) and persists a geometry snapshot per app id so a window reopens
//! where it was closed. State machine per window: `closed -> open(normal)
//! <-> minimized`, and orthogonally `normal <-> maximized`.

mod manager;
mod resize;

pub use manager::{HEADER_OFFSET, ManagedWindow, WindowManager};
pub use resize::{MIN_WINDOW_SIZE, ResizeEdge, ResizeSession, resize_rect};
