//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of IO:
//! - Session clock advanced by the caller (no wall-clock reads)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bounce;
pub mod rect;
pub mod runner;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weather;

pub use bounce::{BounceState, tick_bounce};
pub use rect::{Aabb, clamp_to_window, is_off_screen};
pub use runner::{RunnerInput, RunnerPhase, RunnerState, tick_runner};
pub use spawn::{SpawnEdge, spawn_obstacle, spawn_rain_drop};
pub use state::{FlashStatus, GameEvent, GameMode, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
pub use weather::{RainDrop, WeatherKind, WeatherSystem};
