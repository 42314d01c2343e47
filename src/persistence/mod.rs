//! Save/load of an in-progress session
//!
//! Features:
//! - Legacy whitespace-delimited text file (`savegame.txt`)
//! - Versioned JSON envelope (`*.json`)
//! - Atomic replace (write tmp, then rename over the save)
//! - Missing file means "no saved game", not an error

pub mod savegame;

pub use savegame::{ObstacleRecord, SAVE_VERSION, SaveGame};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save file ended before {0}")]
    MissingField(&'static str),
    #[error("bad {field}: {value:?}")]
    BadField { field: &'static str, value: String },
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
}

/// On-disk encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Text,
    Json,
}

impl SaveFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SaveFormat::Json,
            _ => SaveFormat::Text,
        }
    }
}

/// Write a save, replacing any previous one
pub fn save_to_path(path: &Path, save: &SaveGame) -> Result<(), PersistError> {
    let contents = match SaveFormat::for_path(path) {
        SaveFormat::Text => save.to_text(),
        SaveFormat::Json => save.to_json()?,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;

    log::info!(
        "Game saved to {} ({} obstacles, {}ms)",
        path.display(),
        save.obstacles.len(),
        save.elapsed_ms
    );
    Ok(())
}

/// Scratch file next to `path`; keeps the real extension so saves in
/// different formats never share one
fn tmp_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{ext}.tmp")),
        None => path.with_extension("tmp"),
    }
}

/// Read a save. `Ok(None)` when there is no save file.
pub fn load_from_path(path: &Path) -> Result<Option<SaveGame>, PersistError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let save = match SaveFormat::for_path(path) {
        SaveFormat::Text => SaveGame::from_text(&contents)?,
        SaveFormat::Json => SaveGame::from_json(&contents)?,
    };
    log::info!("Loaded save from {}", path.display());
    Ok(Some(save))
}
