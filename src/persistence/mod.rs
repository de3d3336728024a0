//! Save/load of simulation snapshots
//!
//! Features:
//! - Versioned JSON envelope
//! - Named saves plus a single quick-save slot
//! - Write to a temp file, then rename over the target

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::Snapshot;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;
/// File extension for save files
pub const SAVE_EXTENSION: &str = "gamesave";
/// File stem of the quick-save slot
pub const QUICK_SAVE_NAME: &str = "quicksave";
/// Label stored in quick saves
pub const QUICK_SAVE_LABEL: &str = "QUICKSAVE";

/// On-disk wrapper around a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveEnvelope {
    version: u32,
    snapshot: Snapshot,
}

/// Milliseconds since the Unix epoch, for snapshot timestamps
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// A directory of save files
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a save called `name` would be written to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SAVE_EXTENSION}"))
    }

    pub fn quick_save_path(&self) -> PathBuf {
        self.path_for(QUICK_SAVE_NAME)
    }

    /// Write `snapshot` as `<dir>/<name>.gamesave`
    pub fn save(&self, name: &str, snapshot: &Snapshot) -> Result<PathBuf> {
        let path = self.path_for(name);
        self.write(&path, snapshot)?;
        log::info!(
            "Saved {} bodies to {}",
            snapshot.bodies.len(),
            path.display()
        );
        Ok(path)
    }

    /// Read and decode a save file
    pub fn load(&self, path: &Path) -> Result<Snapshot> {
        let json = std::fs::read_to_string(path)?;
        let envelope: SaveEnvelope = serde_json::from_str(&json)?;
        if envelope.version > SAVE_VERSION {
            return Err(Error::UnsupportedVersion(envelope.version));
        }
        log::info!(
            "Loaded '{}' ({} bodies) from {}",
            envelope.snapshot.label,
            envelope.snapshot.bodies.len(),
            path.display()
        );
        Ok(envelope.snapshot)
    }

    pub fn quick_save(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        self.save(QUICK_SAVE_NAME, snapshot)
    }

    pub fn quick_load(&self) -> Result<Snapshot> {
        let path = self.quick_save_path();
        if !path.exists() {
            return Err(Error::NoQuickSave(path));
        }
        self.load(&path)
    }

    /// All save files in the directory, sorted by path
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut saves = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == SAVE_EXTENSION) {
                saves.push(path);
            }
        }
        saves.sort();
        Ok(saves)
    }

    fn write(&self, path: &Path, snapshot: &Snapshot) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let envelope = SaveEnvelope {
            version: SAVE_VERSION,
            snapshot: snapshot.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
