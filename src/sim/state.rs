//! Simulation state and the host control surface
//!
//! Everything the host needs to hold between ticks lives in [`Simulation`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Arena, Body};
use super::placement::{PlacementParams, generate};
use crate::consts::*;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticks advance the bodies
    Running,
    /// Suspended by the host
    Paused,
    /// Stopped after a collision until the host resumes
    CollisionHalt,
}

/// Physics constants applied every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    pub bounce_factor: f32,
    pub acceleration_rate: f32,
    /// Per-axis speed restored by the reset control
    pub base_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            bounce_factor: BOUNCE_FACTOR,
            acceleration_rate: ACCELERATION_RATE,
            base_speed: BASE_SPEED,
        }
    }
}

/// Complete simulation state, owned by the host and threaded through `step`
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Bodies in placement order; the index identifies a body within a tick
    pub bodies: Vec<Body>,
    pub arena: Arena,
    pub physics: PhysicsParams,
    /// Ticks that advanced or resolved a collision
    pub time_ticks: u64,
    pub(crate) phase: SimPhase,
    pub(crate) collision_occurred: bool,
    pub(crate) menu_visible: bool,
    fullscreen_hint: bool,
}

impl Simulation {
    /// Wrap an existing population, starting in `Running`
    pub fn new(bodies: Vec<Body>, arena: Arena, physics: PhysicsParams) -> Self {
        Self {
            bodies,
            arena,
            physics,
            time_ticks: 0,
            phase: SimPhase::Running,
            collision_occurred: false,
            menu_visible: false,
            fullscreen_hint: false,
        }
    }

    /// Place a fresh population and start running
    pub fn populate<R: Rng + ?Sized>(
        rng: &mut R,
        placement: &PlacementParams,
        physics: PhysicsParams,
    ) -> Self {
        let bodies = generate(rng, placement);
        log::info!(
            "simulation created with {} bodies in {}x{} arena",
            bodies.len(),
            placement.arena.width,
            placement.arena.height
        );
        Self::new(bodies, placement.arena, physics)
    }

    #[inline]
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    #[inline]
    pub fn collision_occurred(&self) -> bool {
        self.collision_occurred
    }

    #[inline]
    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Cosmetic flag for the host window; the engine never reads it
    #[inline]
    pub fn fullscreen_hint(&self) -> bool {
        self.fullscreen_hint
    }

    /// Pause or unpause
    ///
    /// A collision halt is left alone; only
    /// [`resolve_after_collision_halt`](Self::resolve_after_collision_halt)
    /// clears it.
    pub fn set_running(&mut self, running: bool) {
        self.phase = match (self.phase, running) {
            (SimPhase::CollisionHalt, _) => {
                log::debug!("set_running({running}) ignored during collision halt");
                SimPhase::CollisionHalt
            }
            (_, true) => SimPhase::Running,
            (_, false) => SimPhase::Paused,
        };
    }

    /// Clear the collision flag and resume ticking
    ///
    /// Does nothing unless a collision halted the simulation, so a host pause
    /// is only lifted through [`set_running`](Self::set_running).
    pub fn resolve_after_collision_halt(&mut self) {
        if self.phase != SimPhase::CollisionHalt && !self.collision_occurred {
            return;
        }
        log::debug!("resuming after collision halt");
        self.collision_occurred = false;
        self.phase = SimPhase::Running;
    }

    /// Flip acceleration for the whole population
    ///
    /// If every body is already accelerating they all stop, otherwise they all
    /// start. Returns the new flag.
    pub fn toggle_accelerating(&mut self) -> bool {
        let accelerating = !self.bodies.iter().all(|b| b.accelerating);
        self.set_accelerating(accelerating);
        accelerating
    }

    pub fn set_accelerating(&mut self, accelerating: bool) {
        for body in &mut self.bodies {
            body.accelerating = accelerating;
        }
    }

    /// Snap every body to `speed` per axis in its current direction
    pub fn reset_velocity_to_base(&mut self, speed: f32) {
        for body in &mut self.bodies {
            body.reset_velocity(speed);
        }
    }

    pub fn toggle_fullscreen_hint(&mut self) -> bool {
        self.fullscreen_hint = !self.fullscreen_hint;
        self.fullscreen_hint
    }

    /// Show or hide the menu overlay; ticks are idle while it is shown
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_visible = !self.menu_visible;
        self.menu_visible
    }

    /// Adopt a resized arena, pulling every body back inside
    pub fn set_arena(&mut self, arena: Arena) {
        self.arena = arena;
        for body in &mut self.bodies {
            body.clamp_into(&arena);
        }
    }

    /// Swap in a new population and restart from `Running`
    pub(crate) fn replace_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
        self.phase = SimPhase::Running;
        self.collision_occurred = false;
    }
}
