//! Game state and core simulation types
//!
//! Everything a dodge session needs lives here; the tick in `tick.rs`
//! mutates it once per frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::{Aabb, clamp_to_window, is_off_screen};
use super::weather::{WeatherKind, WeatherSystem};
use crate::consts::*;
use crate::persistence::{ObstacleRecord, SaveGame};
use crate::tuning::Tuning;
use crate::{centered, score_for_elapsed};

/// Game mode, each with its own pacing and high score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Open-ended; obstacles speed up and spawn faster over time
    Classic,
    /// Fixed-length dense run at constant speed
    SurvivalRush,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::SurvivalRush => "Survival Rush",
        }
    }

    /// Only Classic sessions can be saved and resumed
    pub fn can_save(&self) -> bool {
        matches!(self, GameMode::Classic)
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    /// Run ended (collision or survival timer)
    GameOver,
}

/// Things that happened during a tick, for audio/logging/high scores
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ObstacleSpawned,
    Flashed { from: Vec2, to: Vec2 },
    WeatherChanged(WeatherKind),
    /// Player hit an obstacle; run over
    Collision { score: u64 },
    /// Survival Rush timer ran out; run over
    SurvivalComplete { score: u64 },
}

/// Flash ability indicator shown under the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashStatus {
    Cooling { secs_remaining: u64 },
    Ready,
    Hidden,
}

/// The player's square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Where the player is steering to (top-left corner)
    pub target: Vec2,
    pub size: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let pos = centered(size);
        Self {
            pos,
            target: pos,
            size,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Aim so the pointer ends up under the middle of the square
    pub fn aim_at_pointer(&mut self, pointer: Vec2) {
        self.target = pointer - self.size / 2.0;
    }

    /// Step toward the target at `speed`, never overshooting on either axis
    pub fn move_toward_target(&mut self, speed: f32) {
        let delta = self.target - self.pos;
        let dist = delta.length();
        if dist <= ARRIVE_DISTANCE {
            return;
        }

        let mut step = delta / dist * speed;
        if step.x.abs() > delta.x.abs() {
            step.x = delta.x;
        }
        if step.y.abs() > delta.y.abs() {
            step.y = delta.y;
        }

        self.pos = clamp_to_window(self.pos + step, self.size);
    }

    /// Teleport `distance` toward the target. Returns (from, to), or None
    /// when already sitting on the target (no direction to jump in).
    pub fn flash_toward_target(&mut self, distance: f32) -> Option<(Vec2, Vec2)> {
        let dir = (self.target - self.pos).try_normalize()?;
        let from = self.pos;
        self.pos = clamp_to_window(self.pos + dir * distance, self.size);
        Some((from, self.pos))
    }
}

/// An obstacle flying across the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(OBJECT_SIZE),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Complete state of one dodge session
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    pub phase: GamePhase,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Session time; only advances while playing
    pub elapsed_ms: u64,
    pub score: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub weather: WeatherSystem,
    /// Speed given to newly spawned obstacles
    pub obstacle_speed: f32,
    pub spawn_interval_ms: u64,
    pub last_spawn_ms: u64,
    /// None until the first flash
    pub last_flash_ms: Option<u64>,
    pub tuning: Tuning,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a fresh session
    pub fn new(mode: GameMode, seed: u64, tuning: Tuning) -> Self {
        Self {
            mode,
            phase: GamePhase::Playing,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            elapsed_ms: 0,
            score: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            weather: WeatherSystem::new(),
            obstacle_speed: tuning.initial_obstacle_speed,
            spawn_interval_ms: tuning.initial_spawn_interval(mode),
            last_spawn_ms: 0,
            last_flash_ms: None,
            tuning,
            events: Vec::new(),
        }
    }

    /// Resume a saved Classic session
    pub fn from_save(save: &SaveGame, seed: u64, tuning: Tuning) -> Self {
        let mut state = Self::new(GameMode::Classic, seed, tuning);
        if save.player.is_finite() {
            state.player.pos = clamp_to_window(save.player, state.player.size);
        }
        state.player.target = state.player.pos;
        state.elapsed_ms = save.elapsed_ms;
        state.score = save.score;
        // Obstacles already off screen would never be culled before the first draw
        state.obstacles = save
            .obstacles
            .iter()
            .filter(|o| o.pos.is_finite() && o.vel.is_finite())
            .map(|o| Obstacle::new(o.pos, o.vel))
            .filter(|o| !is_off_screen(o.pos, o.size))
            .collect();
        state.obstacle_speed = state.tuning.classic_obstacle_speed(save.elapsed_ms);
        state.spawn_interval_ms = state.tuning.classic_spawn_interval(save.elapsed_ms);
        state.last_spawn_ms = save.elapsed_ms;
        state
    }

    /// Capture what the save file needs
    pub fn snapshot(&self) -> SaveGame {
        SaveGame {
            player: self.player.pos,
            elapsed_ms: self.elapsed_ms,
            score: self.score,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleRecord {
                    pos: o.pos,
                    vel: o.vel,
                })
                .collect(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Recompute the score from the session clock
    pub fn update_score(&mut self) {
        self.score = score_for_elapsed(self.elapsed_ms);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Milliseconds since the last flash (first flash counts as long overdue)
    pub fn since_last_flash(&self) -> u64 {
        match self.last_flash_ms {
            Some(t) => self.elapsed_ms.saturating_sub(t),
            None => self
                .elapsed_ms
                .saturating_add(self.tuning.flash_cooldown_ms)
                .saturating_add(1),
        }
    }

    pub fn flash_ready(&self) -> bool {
        self.since_last_flash() >= self.tuning.flash_cooldown_ms
    }

    pub fn flash_status(&self) -> FlashStatus {
        let since = self.since_last_flash();
        let cooldown = self.tuning.flash_cooldown_ms;
        if since < cooldown {
            FlashStatus::Cooling {
                secs_remaining: (cooldown - since) / 1000,
            }
        } else if since < cooldown.saturating_add(self.tuning.ready_display_ms) {
            FlashStatus::Ready
        } else {
            FlashStatus::Hidden
        }
    }

    /// Whole seconds left in a Survival Rush run (None in Classic)
    pub fn time_left_secs(&self) -> Option<u64> {
        match self.mode {
            GameMode::SurvivalRush => Some(
                self.tuning
                    .survival_duration_ms
                    .saturating_sub(self.elapsed_ms)
                    / 1000,
            ),
            GameMode::Classic => None,
        }
    }
}
