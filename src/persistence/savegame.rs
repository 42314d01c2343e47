//! Saved session snapshot and its two on-disk encodings
//!
//! The plain-text layout (kept for `savegame.txt`):
//!
//! ```text
//! <player x> <player y>
//! <elapsed ms>
//! <score>
//! <obstacle count N>
//! <x> <y> <dx> <dy>      (N lines)
//! ```
//!
//! Tokens are whitespace separated; line breaks are not significant when
//! reading. The JSON form wraps the same data in a versioned envelope.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::PersistError;

/// Current JSON envelope version
pub const SAVE_VERSION: u32 = 1;

/// One obstacle as stored in a save
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRecord {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// An in-progress Classic session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Player top-left corner
    pub player: Vec2,
    pub elapsed_ms: u64,
    pub score: u64,
    pub obstacles: Vec<ObstacleRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SaveEnvelope {
    version: u32,
    game: SaveGame,
}

impl SaveGame {
    /// Encode in the plain-text layout
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{} {}\n{}\n{}\n{}\n",
            self.player.x,
            self.player.y,
            self.elapsed_ms,
            self.score,
            self.obstacles.len()
        );
        for o in &self.obstacles {
            out.push_str(&format!("{} {} {} {}\n", o.pos.x, o.pos.y, o.vel.x, o.vel.y));
        }
        out
    }

    /// Decode the plain-text layout
    pub fn from_text(text: &str) -> Result<Self, PersistError> {
        let mut tokens = Tokens(text.split_whitespace());

        let player = Vec2::new(tokens.f32("player x")?, tokens.f32("player y")?);
        let elapsed_ms = tokens.millis("elapsed time")?;
        let score = tokens.u64("score")?;
        let count = tokens.u64("obstacle count")? as usize;

        let mut obstacles = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            let pos = Vec2::new(tokens.f32("obstacle x")?, tokens.f32("obstacle y")?);
            let vel = Vec2::new(tokens.f32("obstacle dx")?, tokens.f32("obstacle dy")?);
            obstacles.push(ObstacleRecord { pos, vel });
        }

        Ok(Self {
            player,
            elapsed_ms,
            score,
            obstacles,
        })
    }

    /// Encode as a versioned JSON envelope
    pub fn to_json(&self) -> Result<String, PersistError> {
        let envelope = SaveEnvelope {
            version: SAVE_VERSION,
            game: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Decode a versioned JSON envelope
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let envelope: SaveEnvelope = serde_json::from_str(json)?;
        if envelope.version != SAVE_VERSION {
            return Err(PersistError::UnsupportedVersion(envelope.version));
        }
        envelope.game.check_finite()?;
        Ok(envelope.game)
    }

    /// Reject positions and velocities that are NaN or infinite
    fn check_finite(&self) -> Result<(), PersistError> {
        let bad = |field: &'static str, v: Vec2| PersistError::BadField {
            field,
            value: format!("{} {}", v.x, v.y),
        };
        if !self.player.is_finite() {
            return Err(bad("player position", self.player));
        }
        for o in &self.obstacles {
            if !o.pos.is_finite() {
                return Err(bad("obstacle position", o.pos));
            }
            if !o.vel.is_finite() {
                return Err(bad("obstacle velocity", o.vel));
            }
        }
        Ok(())
    }
}

struct Tokens<'a>(std::str::SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, PersistError> {
        self.0.next().ok_or(PersistError::MissingField(field))
    }

    /// Finite floats only; `NaN` and `inf` parse but are rejected
    fn f32(&mut self, field: &'static str) -> Result<f32, PersistError> {
        let raw = self.next(field)?;
        match raw.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(PersistError::BadField {
                field,
                value: raw.to_string(),
            }),
        }
    }

    fn u64(&mut self, field: &'static str) -> Result<u64, PersistError> {
        let raw = self.next(field)?;
        raw.parse().map_err(|_| PersistError::BadField {
            field,
            value: raw.to_string(),
        })
    }

    /// Whole milliseconds; older saves may carry a fractional value
    fn millis(&mut self, field: &'static str) -> Result<u64, PersistError> {
        let raw = self.next(field)?;
        if let Ok(ms) = raw.parse::<u64>() {
            return Ok(ms);
        }
        match raw.parse::<f64>() {
            Ok(ms) if ms.is_finite() && ms >= 0.0 => Ok(ms as u64),
            _ => Err(PersistError::BadField {
                field,
                value: raw.to_string(),
            }),
        }
    }
}
