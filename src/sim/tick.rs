//! Fixed-cadence simulation tick
//!
//! The host calls [`step`] on a timer (~16 ms). Each call either resolves the
//! first colliding pair and halts, or moves every body and bounces it off the
//! walls.

use super::bounds::{WallHits, reflect};
use super::collision::{Contact, find_first_collision, pair_mut, resolve};
use super::state::{SimPhase, Simulation};

/// Result of one call to [`step`]
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Bodies moved; one entry per body, in body order
    Advanced { wall_hits: Vec<WallHits> },
    /// A pair collided and was resolved; the simulation is now halted
    Collided { pair: (usize, usize), contact: Contact },
    /// Nothing happened (paused, halted, or menu open)
    Idle(SimPhase),
}

/// Host actions, usually bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Resume after a collision halt, otherwise toggle pause
    TogglePause,
    /// Start accelerating every body
    Accelerate,
    /// Back to base speed, stop accelerating
    ResetSpeed,
    ToggleFullscreen,
    ToggleMenu,
}

/// Advance the simulation by one tick
pub fn step(sim: &mut Simulation) -> StepOutcome {
    if sim.menu_visible {
        return StepOutcome::Idle(sim.phase);
    }
    if sim.phase != SimPhase::Running {
        return StepOutcome::Idle(sim.phase);
    }

    sim.time_ticks += 1;

    if let Some((i, j)) = find_first_collision(&sim.bodies) {
        let bounce = sim.physics.bounce_factor;
        let arena = sim.arena;
        let (a, b) = pair_mut(&mut sim.bodies, i, j);
        let contact = resolve(a, b, bounce);
        // Separation can push a body near a wall out of the arena
        a.clamp_into(&arena);
        b.clamp_into(&arena);

        sim.collision_occurred = true;
        sim.phase = SimPhase::CollisionHalt;
        log::debug!(
            "tick {}: bodies {} and {} collided (overlap {:.2})",
            sim.time_ticks,
            i,
            j,
            contact.overlap
        );
        return StepOutcome::Collided {
            pair: (i, j),
            contact,
        };
    }

    let arena = sim.arena;
    let physics = sim.physics;
    let wall_hits = sim
        .bodies
        .iter_mut()
        .map(|body| {
            body.integrate(physics.acceleration_rate);
            reflect(body, &arena, physics.bounce_factor)
        })
        .collect();

    StepOutcome::Advanced { wall_hits }
}

impl Simulation {
    /// Apply a host command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                if self.collision_occurred || self.phase == SimPhase::CollisionHalt {
                    self.resolve_after_collision_halt();
                } else {
                    let running = self.is_running();
                    self.set_running(!running);
                }
            }
            Command::Accelerate => self.set_accelerating(true),
            Command::ResetSpeed => self.reset_velocity_to_base(self.physics.base_speed),
            Command::ToggleFullscreen => {
                self.toggle_fullscreen_hint();
            }
            Command::ToggleMenu => {
                self.toggle_menu();
            }
        }
    }
}
