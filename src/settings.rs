//! Simulation settings
//!
//! Loaded from a JSON file next to the host; any field left out takes its
//! default, and an unreadable file falls back to defaults entirely.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{Arena, PhysicsParams, PlacementParams};

/// Tunable simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Placement ===
    pub body_count: usize,
    /// Extra clearance between generated bodies
    pub min_gap: f32,
    pub max_attempts_per_body: u32,
    /// Placement seed; `None` seeds from the OS
    pub seed: Option<u64>,

    // === Physics ===
    pub bounce_factor: f32,
    pub acceleration_rate: f32,
    /// Speed restored by the reset control
    pub base_speed: f32,

    // === Host ===
    pub tick_interval_ms: u64,
    /// Directory for save files
    pub save_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            body_count: BODY_COUNT,
            min_gap: MIN_GAP,
            max_attempts_per_body: MAX_ATTEMPTS_PER_BODY,
            seed: None,

            bounce_factor: BOUNCE_FACTOR,
            acceleration_rate: ACCELERATION_RATE,
            base_speed: BASE_SPEED,

            tick_interval_ms: TICK_INTERVAL_MS,
            save_dir: PathBuf::from("Saves"),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.arena_width.is_finite() && self.arena_width > 0.0)
            || !(self.arena_height.is_finite() && self.arena_height > 0.0)
        {
            return Err(Error::InvalidParam(format!(
                "arena must be positive, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !(0.0..=1.0).contains(&self.bounce_factor) {
            return Err(Error::InvalidParam(format!(
                "bounce_factor must be in [0, 1], got {}",
                self.bounce_factor
            )));
        }
        if !self.min_gap.is_finite() || self.min_gap < 0.0 {
            return Err(Error::InvalidParam("min_gap must be finite and >= 0".into()));
        }
        if !(self.acceleration_rate.is_finite() && self.acceleration_rate >= 0.0)
            || !(self.base_speed.is_finite() && self.base_speed >= 0.0)
        {
            return Err(Error::InvalidParam(format!(
                "acceleration_rate and base_speed must be finite and >= 0, got {} and {}",
                self.acceleration_rate, self.base_speed
            )));
        }
        if self.max_attempts_per_body == 0 {
            return Err(Error::InvalidParam("max_attempts_per_body must be > 0".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidParam("tick_interval_ms must be > 0".into()));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn physics(&self) -> PhysicsParams {
        PhysicsParams {
            bounce_factor: self.bounce_factor,
            acceleration_rate: self.acceleration_rate,
            base_speed: self.base_speed,
        }
    }

    pub fn placement(&self) -> PlacementParams {
        PlacementParams {
            count: self.body_count,
            arena: self.arena(),
            min_gap: self.min_gap,
            max_attempts_per_body: self.max_attempts_per_body,
        }
    }
}
