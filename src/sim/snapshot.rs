//! Encoding-agnostic snapshots of the body population
//!
//! A snapshot is a plain serde-friendly view of the bodies plus a label and a
//! timestamp. It carries width and height separately, the way saved games
//! describe a bounding box, so restoring has to check the circle invariant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Arena, Body, Color};
use super::state::{PhysicsParams, Simulation};
use crate::error::{Error, Result};

/// Bounding box size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// One body as stored in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub position: Vec2,
    pub size: Size,
    pub color: Color,
    pub velocity: Vec2,
    #[serde(default)]
    pub accelerating: bool,
}

/// Saved view of a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub bodies: Vec<BodySnapshot>,
    /// Unix time in milliseconds when the snapshot was taken
    pub timestamp: u64,
    pub label: String,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            position: body.position,
            size: Size {
                width: body.diameter,
                height: body.diameter,
            },
            color: body.color,
            velocity: body.velocity,
            accelerating: body.accelerating,
        }
    }
}

impl TryFrom<BodySnapshot> for Body {
    type Error = String;

    fn try_from(saved: BodySnapshot) -> std::result::Result<Self, Self::Error> {
        let Size { width, height } = saved.size;
        if !width.is_finite() || width <= 0.0 {
            return Err(format!("size must be finite and > 0, got {width}"));
        }
        if width != height {
            return Err(format!("not circular: {width}x{height}"));
        }
        if !saved.position.is_finite() {
            return Err("position must be finite".to_string());
        }
        if !saved.velocity.is_finite() {
            return Err("velocity must be finite".to_string());
        }
        Ok(Body {
            position: saved.position,
            diameter: width,
            velocity: saved.velocity,
            color: saved.color,
            accelerating: saved.accelerating,
        })
    }
}

impl Snapshot {
    /// Validate every body and convert; one bad body rejects the whole snapshot
    pub fn into_bodies(self) -> Result<Vec<Body>> {
        self.bodies
            .into_iter()
            .enumerate()
            .map(|(i, saved)| {
                Body::try_from(saved).map_err(|why| Error::InvalidSnapshot(format!("body {i}: {why}")))
            })
            .collect()
    }
}

impl Simulation {
    /// Capture the current population
    pub fn to_snapshot(&self, label: impl Into<String>, timestamp: u64) -> Snapshot {
        Snapshot {
            bodies: self.bodies.iter().map(BodySnapshot::from).collect(),
            timestamp,
            label: label.into(),
        }
    }

    /// Replace the population with a snapshot's, restarting in `Running`
    ///
    /// On error the simulation is left untouched.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        let label = snapshot.label.clone();
        let bodies = snapshot.into_bodies()?;
        log::info!("restored {} bodies from '{}'", bodies.len(), label);
        self.replace_bodies(bodies);
        Ok(())
    }

    /// Build a running simulation from a snapshot
    pub fn from_snapshot(snapshot: Snapshot, arena: Arena, physics: PhysicsParams) -> Result<Self> {
        let mut sim = Self::new(Vec::new(), arena, physics);
        sim.restore(snapshot)?;
        Ok(sim)
    }
}
