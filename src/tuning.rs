//! Data-driven game balance
//!
//! Speeds are in pixels per tick, times in milliseconds of session time.

use serde::{Deserialize, Serialize};

use crate::sim::GameMode;

/// Balance table for the dodge game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Steering speed toward the pointer
    pub player_speed: f32,
    /// Multiplier applied to `player_speed` while it rains
    pub rain_speed_factor: f32,

    // === Obstacles ===
    pub initial_obstacle_speed: f32,
    /// Added to the obstacle speed every `speed_increase_interval_ms` (Classic)
    pub speed_increment: f32,
    pub speed_increase_interval_ms: u64,

    // === Spawning ===
    pub spawn_interval_ms: u64,
    pub survival_spawn_interval_ms: u64,
    /// Classic spawn interval shrinks by this much ...
    pub spawn_interval_decrease_ms: u64,
    /// ... every this many milliseconds
    pub spawn_interval_decrease_every_ms: u64,
    pub spawn_interval_min_ms: u64,

    // === Flash ===
    pub flash_cooldown_ms: u64,
    pub flash_distance: f32,
    /// How long "Ready" stays on the HUD once the cooldown is over
    pub ready_display_ms: u64,

    // === Survival Rush ===
    pub survival_duration_ms: u64,

    // === Weather ===
    pub classic_weather_interval_ms: u64,
    pub classic_weather_duration_ms: u64,
    pub survival_weather_interval_ms: u64,
    pub survival_weather_duration_ms: u64,
    /// Chance per tick of a new rain drop while it rains
    pub rain_drop_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            rain_speed_factor: 0.8,

            initial_obstacle_speed: 3.0,
            speed_increment: 0.5,
            speed_increase_interval_ms: 10_000,

            spawn_interval_ms: 500,
            survival_spawn_interval_ms: 200,
            spawn_interval_decrease_ms: 50,
            spawn_interval_decrease_every_ms: 30_000,
            spawn_interval_min_ms: 100,

            flash_cooldown_ms: 15_000,
            flash_distance: 200.0,
            ready_display_ms: 15_000,

            survival_duration_ms: 60_000,

            classic_weather_interval_ms: 30_000,
            classic_weather_duration_ms: 10_000,
            survival_weather_interval_ms: 10_000,
            survival_weather_duration_ms: 5_000,
            rain_drop_chance: 0.1,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), String> {
        let speeds = [
            ("player_speed", self.player_speed),
            ("rain_speed_factor", self.rain_speed_factor),
            ("initial_obstacle_speed", self.initial_obstacle_speed),
            ("speed_increment", self.speed_increment),
            ("flash_distance", self.flash_distance),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        if !(0.0..=1.0).contains(&self.rain_drop_chance) {
            return Err(format!(
                "rain_drop_chance must be within 0..=1, got {}",
                self.rain_drop_chance
            ));
        }
        Ok(())
    }

    /// Spawn interval a fresh session of `mode` starts with
    pub fn initial_spawn_interval(&self, mode: GameMode) -> u64 {
        match mode {
            GameMode::Classic => self.spawn_interval_ms,
            GameMode::SurvivalRush => self.survival_spawn_interval_ms,
        }
    }

    /// Minimum clear time between two weather spells
    pub fn weather_interval(&self, mode: GameMode) -> u64 {
        match mode {
            GameMode::Classic => self.classic_weather_interval_ms,
            GameMode::SurvivalRush => self.survival_weather_interval_ms,
        }
    }

    /// Maximum length of a weather spell
    pub fn weather_duration(&self, mode: GameMode) -> u64 {
        match mode {
            GameMode::Classic => self.classic_weather_duration_ms,
            GameMode::SurvivalRush => self.survival_weather_duration_ms,
        }
    }

    /// Classic obstacle speed after `elapsed_ms`
    pub fn classic_obstacle_speed(&self, elapsed_ms: u64) -> f32 {
        let steps = elapsed_ms / self.speed_increase_interval_ms.max(1);
        self.initial_obstacle_speed + steps as f32 * self.speed_increment
    }

    /// Classic spawn interval after `elapsed_ms`
    pub fn classic_spawn_interval(&self, elapsed_ms: u64) -> u64 {
        let steps = elapsed_ms / self.spawn_interval_decrease_every_ms.max(1);
        self.spawn_interval_ms
            .saturating_sub(steps * self.spawn_interval_decrease_ms)
            .max(self.spawn_interval_min_ms)
    }
}
