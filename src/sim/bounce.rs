//! Bouncing rectangle
//!
//! A square slides horizontally across the middle of the window and
//! reverses whenever it touches either side.

use glam::Vec2;

use super::rect::Aabb;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

pub const BOX_SIZE: f32 = 50.0;
pub const BOX_SPEED: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BounceState {
    pub x: f32,
    /// Signed horizontal speed, pixels per tick
    pub speed: f32,
}

impl Default for BounceState {
    fn default() -> Self {
        Self {
            x: (WINDOW_WIDTH - BOX_SIZE) / 2.0,
            speed: BOX_SPEED,
        }
    }
}

impl BounceState {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, WINDOW_HEIGHT / 2.0 - BOX_SIZE / 2.0),
            Vec2::splat(BOX_SIZE),
        )
    }
}

pub fn tick_bounce(state: &mut BounceState) {
    state.x += state.speed;
    if state.x + BOX_SIZE >= WINDOW_WIDTH || state.x <= 0.0 {
        state.speed = -state.speed;
    }
}
