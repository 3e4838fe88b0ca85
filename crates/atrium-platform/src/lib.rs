//! Platform service abstractions for ATRIUM DESK.

mod services;

pub use services::{Clock, FixedClock, SystemClock, WallTime, Weekday, entropy_seed};
