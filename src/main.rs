//! Bounce Arena headless host
//!
//! Drives the engine at the fixed tick cadence without a window: collisions
//! are logged and acknowledged after a short pause, and the final state is
//! written to the quick-save slot.

use std::path::Path;
use std::thread;
use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use bounce_arena::Settings;
use bounce_arena::persistence::{QUICK_SAVE_LABEL, SaveStore, now_millis};
use bounce_arena::sim::{Command, Simulation, StepOutcome, step};

/// How long the headless host runs (10 seconds at 60 Hz)
const RUN_TICKS: u32 = 600;
/// Ticks to sit on a collision halt before acknowledging it
const HALT_TICKS: u32 = 30;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Bounce Arena (headless) starting...");

    let settings = Settings::load(Path::new("settings.json"));
    let mut rng = match settings.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_os_rng(),
    };
    let mut sim = Simulation::populate(&mut rng, &settings.placement(), settings.physics());

    let tick = Duration::from_millis(settings.tick_interval_ms);
    let mut halted_for = 0;
    let mut collisions = 0u32;
    let mut wall_bounces = 0usize;

    for _ in 0..RUN_TICKS {
        match step(&mut sim) {
            StepOutcome::Advanced { wall_hits } => {
                wall_bounces += wall_hits.iter().filter(|h| h.any()).count();
            }
            StepOutcome::Collided { pair, contact } => {
                collisions += 1;
                log::info!(
                    "Collision! bodies {} and {} (impulse {:.2}) - press SPACE to continue",
                    pair.0,
                    pair.1,
                    contact.impulse
                );
            }
            StepOutcome::Idle(_) if sim.collision_occurred() => {
                halted_for += 1;
                if halted_for >= HALT_TICKS {
                    halted_for = 0;
                    sim.apply(Command::TogglePause);
                }
            }
            StepOutcome::Idle(_) => {}
        }
        thread::sleep(tick);
    }

    log::info!(
        "Ran {} ticks: {} collisions, {} wall bounces",
        sim.time_ticks,
        collisions,
        wall_bounces
    );

    let store = SaveStore::new(settings.save_dir.clone());
    match store.quick_save(&sim.to_snapshot(QUICK_SAVE_LABEL, now_millis())) {
        Ok(path) => log::info!("Quick save created at {}", path.display()),
        Err(e) => log::error!("Error during quick save: {}", e),
    }
}
