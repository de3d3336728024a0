//! Simulation engine
//!
//! All physics lives here. This module is pure and single-threaded:
//! - One `step` per host tick, no timers
//! - Injected RNG only (placement)
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod bounds;
pub mod collision;
pub mod placement;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{Arena, Body, Color};
pub use bounds::{WallHits, reflect};
pub use collision::{Contact, bodies_overlap, find_first_collision, resolve};
pub use placement::{PlacementParams, generate};
pub use snapshot::{BodySnapshot, Size, Snapshot};
pub use state::{PhysicsParams, SimPhase, Simulation};
pub use tick::{Command, StepOutcome, step};
