//! Dodge Arcade - small 2D arcade games
//!
//! Core modules:
//! - `sim`: Simulation (player movement, obstacles, weather, collisions)
//! - `renderer`: CPU-side draw lists handed to the host renderer
//! - `platform`: Host events and frame pacing
//! - `persistence`: Save/load of an in-progress session
//! - `tuning`: Data-driven game balance
//! - `app`: Menu / play / game-over screens
//! - `audio`, `ui`: Sound cues and on-screen text for the host

pub mod app;
pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Player square
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Obstacle square edge
    pub const OBJECT_SIZE: f32 = 30.0;

    /// The player stops steering once this close to the target
    pub const ARRIVE_DISTANCE: f32 = 5.0;

    /// Points awarded per full second survived
    pub const POINTS_PER_SECOND: u64 = 10;

    /// Frame budget (~60 fps)
    pub const FRAME_DELAY_MS: u32 = 16;
    pub const TARGET_FPS: u32 = 60;
}

/// Top-left corner that centres a box of `size` in the window
#[inline]
pub fn centered(size: Vec2) -> Vec2 {
    Vec2::new(
        consts::WINDOW_WIDTH / 2.0 - size.x / 2.0,
        consts::WINDOW_HEIGHT / 2.0 - size.y / 2.0,
    )
}

/// Score for a session that has run `elapsed_ms`
#[inline]
pub fn score_for_elapsed(elapsed_ms: u64) -> u64 {
    (elapsed_ms / 1000) * consts::POINTS_PER_SECOND
}
