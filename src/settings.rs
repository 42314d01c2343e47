//! Game settings and preferences
//!
//! Read from an optional JSON file; anything missing falls back to defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FRAME_DELAY_MS;
use crate::highscores::HighScoreFiles;
use crate::tuning::Tuning;

/// Default settings file name
pub const SETTINGS_FILE: &str = "dodge.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Tuning(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Files ===
    /// Directory for saves and high scores
    pub data_dir: PathBuf,
    /// Save file name; a `.json` extension selects the JSON format
    pub save_file: String,
    pub highscore_files: HighScoreFiles,

    // === Loop ===
    /// Frame budget in milliseconds
    pub frame_delay_ms: u32,
    /// Fixed RNG seed (random per session when unset)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Balance ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            save_file: "savegame.txt".to_string(),
            highscore_files: HighScoreFiles::default(),

            frame_delay_ms: FRAME_DELAY_MS,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Full path of the save file
    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(&self.save_file)
    }

    /// Load settings from `path`, using defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings: Settings = serde_json::from_str(&json)?;
                settings.tuning.validate().map_err(SettingsError::Tuning)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            r#"{ "save_file": "slot.json", "tuning": { "flash_cooldown_ms": 5000 } }"#,
        )
        .unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.save_file, "slot.json");
        assert_eq!(settings.tuning.flash_cooldown_ms, 5000);
        assert_eq!(settings.tuning.player_speed, 5.0);
        assert_eq!(settings.frame_delay_ms, 16);
        assert_eq!(settings.save_path(), PathBuf::from(".").join("slot.json"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_out_of_range_tuning_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            r#"{ "tuning": { "rain_drop_chance": 1.5, "classic_weather_interval_ms": 0 } }"#,
        )
        .unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Tuning(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let mut settings = Settings::default();
        settings.muted = true;
        settings.seed = Some(7);
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
