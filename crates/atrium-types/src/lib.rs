//! Foundation types and traits for ATRIUM DESK.
//!
//! This crate contains the display-agnostic core types shared by all ATRIUM
//! crates: geometry, app and window records, pointer events, the rendering
//! surface trait, and error types.

pub mod app;
pub mod error;
pub mod geometry;
pub mod input;
pub mod surface;
