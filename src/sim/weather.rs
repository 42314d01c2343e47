//! Weather: clear skies, rain (slows the player) and fog (hides obstacles)
//!
//! Transitions are driven purely by session time. A spell of rain or fog
//! lasts at most the mode's weather duration; the next one can only start
//! after the mode's weather interval has passed since the last change.

use glam::Vec2;
use rand::Rng;

use super::spawn::spawn_rain_drop;
use super::state::GameMode;
use crate::consts::WINDOW_HEIGHT;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherKind {
    #[default]
    Clear,
    Rain,
    Fog,
}

impl WeatherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::Rain => "Rain",
            WeatherKind::Fog => "Fog",
        }
    }
}

/// A falling rain streak (visual only)
#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    /// Top of the streak
    pub pos: Vec2,
    /// Fall speed, pixels per tick
    pub speed: f32,
    pub length: f32,
}

#[derive(Debug, Clone, Default)]
pub struct WeatherSystem {
    pub kind: WeatherKind,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub last_change_ms: u64,
    pub rain_drops: Vec<RainDrop>,
}

impl WeatherSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance weather to `now_ms`. Returns the new kind if it changed.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        mode: GameMode,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<WeatherKind> {
        let mut changed = None;

        if self.kind != WeatherKind::Clear {
            if self.active_for(now_ms) >= self.duration_ms {
                self.kind = WeatherKind::Clear;
                self.rain_drops.clear();
                self.last_change_ms = now_ms;
                return Some(WeatherKind::Clear);
            }
        } else if now_ms.saturating_sub(self.last_change_ms) >= tuning.weather_interval(mode) {
            self.kind = if rng.random_bool(0.5) {
                WeatherKind::Rain
            } else {
                WeatherKind::Fog
            };
            self.start_ms = now_ms;
            self.duration_ms = tuning.weather_duration(mode);
            self.last_change_ms = now_ms;
            changed = Some(self.kind);
        }

        if self.kind == WeatherKind::Rain && rng.random_bool(drop_chance(tuning)) {
            self.rain_drops.push(spawn_rain_drop(rng));
        }

        for drop in &mut self.rain_drops {
            drop.pos.y += drop.speed;
        }
        self.rain_drops.retain(|d| d.pos.y <= WINDOW_HEIGHT);

        changed
    }

    /// Player speed multiplier for the current weather
    pub fn player_speed_factor(&self, tuning: &Tuning) -> f32 {
        match self.kind {
            WeatherKind::Rain => tuning.rain_speed_factor,
            _ => 1.0,
        }
    }

    /// How long the current spell has run (0 when clear)
    pub fn active_for(&self, now_ms: u64) -> u64 {
        match self.kind {
            WeatherKind::Clear => 0,
            _ => now_ms.saturating_sub(self.start_ms),
        }
    }
}

/// Per-tick rain drop probability, forced into a valid range
fn drop_chance(tuning: &Tuning) -> f64 {
    if tuning.rain_drop_chance.is_nan() {
        0.0
    } else {
        tuning.rain_drop_chance.clamp(0.0, 1.0)
    }
}
