//! Best score per game mode
//!
//! Persisted as one plain-text integer per mode. Scores only ever go up.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::GameMode;

/// Single-file high score written by the older one-mode build; read as the
/// Classic score when the per-mode file is absent.
pub const LEGACY_FILE: &str = "highscore.txt";

/// File names for each mode's high score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScoreFiles {
    pub classic: String,
    pub survival_rush: String,
}

impl Default for HighScoreFiles {
    fn default() -> Self {
        Self {
            classic: "highscore_classic.txt".to_string(),
            survival_rush: "highscore_survivalrush.txt".to_string(),
        }
    }
}

impl HighScoreFiles {
    pub fn for_mode(&self, mode: GameMode) -> &str {
        match mode {
            GameMode::Classic => &self.classic,
            GameMode::SurvivalRush => &self.survival_rush,
        }
    }
}

/// High scores for both modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub classic: u64,
    pub survival_rush: u64,
}

impl HighScores {
    /// Both scores zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mode: GameMode) -> u64 {
        match mode {
            GameMode::Classic => self.classic,
            GameMode::SurvivalRush => self.survival_rush,
        }
    }

    /// Check if a score beats the current best
    pub fn qualifies(&self, mode: GameMode, score: u64) -> bool {
        score > self.get(mode)
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, mode: GameMode, score: u64) -> bool {
        if !self.qualifies(mode, score) {
            return false;
        }
        match mode {
            GameMode::Classic => self.classic = score,
            GameMode::SurvivalRush => self.survival_rush = score,
        }
        log::info!("New {} high score: {}", mode.as_str(), score);
        true
    }

    /// Load from `dir`; missing or unreadable files count as 0
    pub fn load(dir: &Path, files: &HighScoreFiles) -> Self {
        let classic = read_score(&dir.join(&files.classic))
            .or_else(|| read_score(&dir.join(LEGACY_FILE)))
            .unwrap_or(0);
        let survival_rush = read_score(&dir.join(&files.survival_rush)).unwrap_or(0);
        log::info!(
            "High scores loaded: classic {}, survival rush {}",
            classic,
            survival_rush
        );
        Self {
            classic,
            survival_rush,
        }
    }

    /// Write both scores to `dir`
    pub fn save(&self, dir: &Path, files: &HighScoreFiles) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        for mode in [GameMode::Classic, GameMode::SurvivalRush] {
            fs::write(dir.join(files.for_mode(mode)), self.get(mode).to_string())?;
        }
        log::info!("High scores saved");
        Ok(())
    }
}

fn read_score(path: &Path) -> Option<u64> {
    let text = fs::read_to_string(path).ok()?;
    let first = text.split_whitespace().next()?;
    match first.parse() {
        Ok(score) => Some(score),
        Err(_) => {
            log::warn!("Ignoring malformed high score in {}", path.display());
            None
        }
    }
}
