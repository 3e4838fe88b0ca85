//! Desktop environment aggregate for ATRIUM DESK.
//!
//! Ties the placement engine, window manager, shell managers, and content
//! generation queue to one app list and one key-value store. There is no
//! hidden global state: every collaborator is injected, so the whole
//! environment runs headless under test.

pub mod config;
mod environment;
mod headless;

pub use config::DeskConfig;
pub use environment::{DesktopEnvironment, GENERATION_DELAY_TICKS};
pub use headless::{HeadlessSurface, SurfaceOp};

// Re-exports so hosts depend on one crate.
pub use atrium_platform as platform;
pub use atrium_store as store;
pub use atrium_types as types;
