//! Display-agnostic pointer input events.
//!
//! Every host surface maps its native input (mouse, touch) to these events.
//! The core framework never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button / touch pressed at absolute position.
    Down { x: i32, y: i32 },
    /// Pointer moved to absolute position while pressed.
    Move { x: i32, y: i32 },
    /// Primary button / touch released at absolute position.
    Up { x: i32, y: i32 },
    /// The drag sequence was cancelled by the host (focus loss, touch
    /// cancel). Drag state must be released as if the pointer went up.
    Cancel,
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<(i32, i32)> {
        match self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => Some((*x, *y)),
            Self::Cancel => None,
        }
    }
}
