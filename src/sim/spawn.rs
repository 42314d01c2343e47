//! Spawners for obstacles and rain drops

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use super::weather::RainDrop;
use crate::consts::{OBJECT_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Screen edge an obstacle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
        SpawnEdge::Right,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Place an obstacle just outside `edge`, heading across the screen.
/// `offset` is the position along the edge.
pub fn obstacle_at_edge(edge: SpawnEdge, offset: f32, speed: f32) -> Obstacle {
    let (pos, vel) = match edge {
        SpawnEdge::Top => (Vec2::new(offset, -OBJECT_SIZE), Vec2::new(0.0, speed)),
        SpawnEdge::Bottom => (Vec2::new(offset, WINDOW_HEIGHT), Vec2::new(0.0, -speed)),
        SpawnEdge::Left => (Vec2::new(-OBJECT_SIZE, offset), Vec2::new(speed, 0.0)),
        SpawnEdge::Right => (Vec2::new(WINDOW_WIDTH, offset), Vec2::new(-speed, 0.0)),
    };
    Obstacle::new(pos, vel)
}

/// Random obstacle from a random edge
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Obstacle {
    let edge = SpawnEdge::random(rng);
    let span = match edge {
        SpawnEdge::Top | SpawnEdge::Bottom => WINDOW_WIDTH - OBJECT_SIZE,
        SpawnEdge::Left | SpawnEdge::Right => WINDOW_HEIGHT - OBJECT_SIZE,
    };
    // Whole-pixel offsets
    let offset = rng.random_range(0..span as u32) as f32;
    obstacle_at_edge(edge, offset, speed)
}

/// New rain drop at the top of the screen
pub fn spawn_rain_drop<R: Rng + ?Sized>(rng: &mut R) -> RainDrop {
    RainDrop {
        pos: Vec2::new(rng.random_range(0..WINDOW_WIDTH as u32) as f32, -10.0),
        speed: 5.0 + rng.random_range(0..5) as f32,
        length: 10.0 + rng.random_range(0..10) as f32,
    }
}
