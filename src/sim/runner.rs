//! Endless runner
//!
//! The runner stands on the ground on the left; obstacles scroll in from
//! the right and must be jumped over. Frame-based physics at 60 ticks/s.

use glam::Vec2;

use super::rect::Aabb;
use crate::consts::{TARGET_FPS, WINDOW_WIDTH};

pub const GROUND_Y: f32 = 500.0;
pub const RUNNER_WIDTH: f32 = 50.0;
pub const RUNNER_HEIGHT: f32 = 80.0;
pub const RUNNER_X: f32 = 100.0;
pub const HURDLE_WIDTH: f32 = 40.0;
pub const HURDLE_HEIGHT: f32 = 80.0;
/// Upward velocity applied by a jump (pixels per tick)
pub const JUMP_VELOCITY: f32 = -18.0;
/// Downward acceleration (pixels per tick²)
pub const GRAVITY: f32 = 0.8;
pub const HURDLE_SPEED: f32 = 5.0;
/// Seconds between hurdles
pub const SPAWN_EVERY_SECS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerPhase {
    Running,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Default)]
pub struct RunnerInput {
    /// Space
    pub jump: bool,
    /// P
    pub pause: bool,
    /// R
    pub restart: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    pub pos: Vec2,
    pub vel_y: f32,
    pub airborne: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            pos: Vec2::new(RUNNER_X, GROUND_Y - RUNNER_HEIGHT),
            vel_y: 0.0,
            airborne: false,
        }
    }
}

impl Runner {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(RUNNER_WIDTH, RUNNER_HEIGHT))
    }

    /// Only jumps from the ground
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel_y = JUMP_VELOCITY;
            self.airborne = true;
        }
    }

    pub fn update(&mut self) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;
        let floor = GROUND_Y - RUNNER_HEIGHT;
        if self.pos.y >= floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
            self.airborne = false;
        }
    }
}

/// A hurdle resting on the ground
#[derive(Debug, Clone, PartialEq)]
pub struct Hurdle {
    pub x: f32,
    pub speed: f32,
}

impl Hurdle {
    pub fn new(x: f32, speed: f32) -> Self {
        Self { x, speed }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, GROUND_Y - HURDLE_HEIGHT),
            Vec2::new(HURDLE_WIDTH, HURDLE_HEIGHT),
        )
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + HURDLE_WIDTH < 0.0
    }
}

#[derive(Debug, Clone)]
pub struct RunnerState {
    pub phase: RunnerPhase,
    pub runner: Runner,
    pub hurdles: Vec<Hurdle>,
    /// Hurdles cleared
    pub score: u64,
    pub hurdle_speed: f32,
    /// Seconds until the next hurdle
    pub spawn_timer: f32,
}

impl Default for RunnerState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunnerState {
    pub fn new() -> Self {
        Self {
            phase: RunnerPhase::Running,
            runner: Runner::default(),
            hurdles: Vec::new(),
            score: 0,
            hurdle_speed: HURDLE_SPEED,
            spawn_timer: SPAWN_EVERY_SECS,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

/// Advance the runner by one frame
pub fn tick_runner(state: &mut RunnerState, input: &RunnerInput) {
    if input.restart {
        log::info!("Runner restarted (previous score {})", state.score);
        state.restart();
    }
    if input.pause {
        state.phase = match state.phase {
            RunnerPhase::Running => RunnerPhase::Paused,
            RunnerPhase::Paused => RunnerPhase::Running,
            RunnerPhase::GameOver => RunnerPhase::GameOver,
        };
    }
    if state.phase != RunnerPhase::Running {
        return;
    }
    if input.jump {
        state.runner.jump();
    }

    state.runner.update();

    let runner_box = state.runner.bounds();
    let mut hit = false;
    let mut cleared = 0;
    state.hurdles.retain_mut(|h| {
        h.x -= h.speed;
        if h.bounds().overlaps(&runner_box) {
            hit = true;
        }
        if h.is_off_screen() {
            cleared += 1;
            return false;
        }
        true
    });
    state.score += cleared;

    if hit {
        state.phase = RunnerPhase::GameOver;
        log::info!("Runner hit a hurdle. Score: {}", state.score);
    }

    state.spawn_timer -= 1.0 / TARGET_FPS as f32;
    if state.spawn_timer <= 0.0 {
        state.hurdles.push(Hurdle::new(WINDOW_WIDTH, state.hurdle_speed));
        state.spawn_timer = SPAWN_EVERY_SECS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jump() -> RunnerInput {
        RunnerInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut r = Runner::default();
        r.jump();
        assert!(r.airborne);
        let floor = GROUND_Y - RUNNER_HEIGHT;
        let mut peak = floor;
        for _ in 0..100 {
            r.update();
            peak = peak.min(r.pos.y);
        }
        assert!(!r.airborne);
        assert_eq!(r.pos.y, floor);
        // Rises roughly v²/2g
        assert!(floor - peak > 180.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut r = Runner::default();
        r.jump();
        r.update();
        let vel = r.vel_y;
        r.jump();
        assert_eq!(r.vel_y, vel);
    }

    #[test]
    fn test_hurdle_spawns_every_two_seconds() {
        let mut s = RunnerState::new();
        for _ in 0..119 {
            tick_runner(&mut s, &RunnerInput::default());
        }
        assert!(s.hurdles.is_empty());
        // Timer hits zero around tick 120 (float steps of 1/60)
        tick_runner(&mut s, &RunnerInput::default());
        tick_runner(&mut s, &RunnerInput::default());
        assert_eq!(s.hurdles.len(), 1);
        assert!(s.hurdles[0].x >= WINDOW_WIDTH - HURDLE_SPEED);
    }

    #[test]
    fn test_standing_still_hits_hurdle() {
        let mut s = RunnerState::new();
        s.hurdles.push(Hurdle::new(160.0, HURDLE_SPEED));
        for _ in 0..10 {
            tick_runner(&mut s, &RunnerInput::default());
        }
        assert_eq!(s.phase, RunnerPhase::GameOver);
    }

    #[test]
    fn test_jumping_clears_hurdle() {
        let mut s = RunnerState::new();
        s.hurdles.push(Hurdle::new(200.0, HURDLE_SPEED));
        tick_runner(&mut s, &jump());
        for _ in 0..80 {
            tick_runner(&mut s, &RunnerInput::default());
            assert_ne!(s.phase, RunnerPhase::GameOver);
        }
        assert_eq!(s.score, 1);
        assert!(s.hurdles.is_empty());
    }

    #[test]
    fn test_pause_and_restart() {
        let mut s = RunnerState::new();
        let pause = RunnerInput {
            pause: true,
            ..Default::default()
        };
        tick_runner(&mut s, &pause);
        assert_eq!(s.phase, RunnerPhase::Paused);
        let timer = s.spawn_timer;
        tick_runner(&mut s, &RunnerInput::default());
        assert_eq!(s.spawn_timer, timer);

        s.phase = RunnerPhase::GameOver;
        s.score = 7;
        // Pause does not resurrect a finished run
        tick_runner(&mut s, &pause);
        assert_eq!(s.phase, RunnerPhase::GameOver);

        let restart = RunnerInput {
            restart: true,
            ..Default::default()
        };
        tick_runner(&mut s, &restart);
        assert_eq!(s.phase, RunnerPhase::Running);
        assert_eq!(s.score, 0);
    }
}
