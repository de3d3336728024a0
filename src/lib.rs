//! Bounce Arena - circles bouncing around a rectangular arena
//!
//! Core modules:
//! - `sim`: Simulation engine (placement, integration, walls, collisions)
//! - `persistence`: Save/load of simulation snapshots
//! - `settings`: Tunable constants loaded from JSON
//! - `error`: Crate-wide error type

pub mod error;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Host tick cadence in milliseconds (~60 steps per second)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Velocity multiplier applied on every wall or body bounce
    pub const BOUNCE_FACTOR: f32 = 0.9;
    /// Per-tick speed gain while a body is accelerating
    pub const ACCELERATION_RATE: f32 = 0.1;
    /// Speed per axis restored by the "reset speed" control
    pub const BASE_SPEED: f32 = 5.0;

    /// Placement defaults
    pub const BODY_COUNT: usize = 10;
    pub const MIN_GAP: f32 = 50.0;
    pub const MAX_ATTEMPTS_PER_BODY: u32 = 100;

    /// Diameter range for generated bodies (half-open)
    pub const DIAMETER_MIN: i32 = 30;
    pub const DIAMETER_MAX: i32 = 70;
    /// Per-axis velocity range for generated bodies (half-open)
    pub const VELOCITY_MIN: i32 = -3;
    pub const VELOCITY_MAX: i32 = 3;
    /// Per-channel color range for generated bodies (half-open)
    pub const COLOR_CHANNEL_MIN: u8 = 150;
    pub const COLOR_CHANNEL_MAX: u8 = 255;

    /// Normal used when two body centers coincide exactly
    pub const FALLBACK_NORMAL: (f32, f32) = (1.0, 0.0);
}

/// Sign of each component, with zero mapping to zero.
///
/// `f32::signum` returns 1.0 for +0.0, which would start a resting axis moving.
#[inline]
pub fn sign(v: Vec2) -> Vec2 {
    Vec2::new(sign_f32(v.x), sign_f32(v.y))
}

#[inline]
fn sign_f32(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
