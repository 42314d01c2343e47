//! Platform abstraction layer
//!
//! Keeps the game independent of any windowing backend:
//! - Input events the host translates into `HostEvent`
//! - Frame timing (monotonic clock and frame pacing)

pub mod input;
pub mod time;

pub use input::{HostEvent, Key};
pub use time::FrameClock;
