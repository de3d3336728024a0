//! Randomized non-overlapping initial placement
//!
//! Rejection sampling: each body gets a fixed attempt budget and is dropped
//! if no candidate clears every already-placed body by `min_gap`.

use glam::Vec2;
use rand::Rng;

use super::body::{Arena, Body, Color};
use crate::consts::*;

/// Inputs to [`generate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    pub count: usize,
    pub arena: Arena,
    /// Extra clearance between body edges
    pub min_gap: f32,
    pub max_attempts_per_body: u32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            count: BODY_COUNT,
            arena: Arena::new(ARENA_WIDTH, ARENA_HEIGHT),
            min_gap: MIN_GAP,
            max_attempts_per_body: MAX_ATTEMPTS_PER_BODY,
        }
    }
}

/// Generate up to `params.count` bodies that do not crowd each other
///
/// The returned population may be smaller than requested; shortfalls are
/// logged, never reported as errors.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, params: &PlacementParams) -> Vec<Body> {
    let mut bodies: Vec<Body> = Vec::with_capacity(params.count);

    if !params.arena.fits(DIAMETER_MIN as f32) {
        log::warn!(
            "arena {}x{} cannot fit a body of diameter {}, placing none",
            params.arena.width,
            params.arena.height,
            DIAMETER_MIN
        );
        return bodies;
    }

    for index in 0..params.count {
        let placed = (0..params.max_attempts_per_body)
            .filter_map(|_| sample_candidate(rng, &params.arena))
            .find(|candidate| {
                bodies
                    .iter()
                    .all(|existing| !too_close(candidate, existing, params.min_gap))
            });

        match placed {
            Some(body) => bodies.push(body),
            None => log::debug!(
                "body {} dropped after {} attempts",
                index,
                params.max_attempts_per_body
            ),
        }
    }

    if bodies.len() < params.count {
        log::warn!(
            "placed {} of {} bodies in {}x{} arena",
            bodies.len(),
            params.count,
            params.arena.width,
            params.arena.height
        );
    }

    bodies
}

/// Draw one candidate body, or `None` if its diameter does not fit the arena
fn sample_candidate<R: Rng + ?Sized>(rng: &mut R, arena: &Arena) -> Option<Body> {
    let diameter = rng.random_range(DIAMETER_MIN..DIAMETER_MAX) as f32;
    let velocity = Vec2::new(
        rng.random_range(VELOCITY_MIN..VELOCITY_MAX) as f32,
        rng.random_range(VELOCITY_MIN..VELOCITY_MAX) as f32,
    );
    let color = Color::rgb(
        rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX),
        rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX),
        rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX),
    );

    if !arena.fits(diameter) {
        return None;
    }

    let max = arena.max_corner(diameter);
    let position = Vec2::new(rng.random_range(0.0..=max.x), rng.random_range(0.0..=max.y));

    Some(Body::new(position, diameter, velocity, color))
}

/// Whether two bodies sit within `min_gap` of touching
#[inline]
fn too_close(a: &Body, b: &Body, min_gap: f32) -> bool {
    a.center().distance(b.center()) <= a.radius() + b.radius() + min_gap
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn params(count: usize, width: f32, height: f32, min_gap: f32, attempts: u32) -> PlacementParams {
        PlacementParams {
            count,
            arena: Arena::new(width, height),
            min_gap,
            max_attempts_per_body: attempts,
        }
    }

    fn assert_separated(bodies: &[Body], min_gap: f32) {
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let dist = a.center().distance(b.center());
                assert!(
                    dist > a.radius() + b.radius() + min_gap,
                    "bodies too close: {} <= {}",
                    dist,
                    a.radius() + b.radius() + min_gap
                );
            }
        }
    }

    #[test]
    fn test_default_scene_is_separated_and_contained() {
        let mut rng = Pcg32::seed_from_u64(42);
        let p = params(10, 800.0, 600.0, 50.0, 100);
        let bodies = generate(&mut rng, &p);

        assert!(!bodies.is_empty());
        assert!(bodies.len() <= 10);
        assert_separated(&bodies, 50.0);
        for b in &bodies {
            assert!(b.position.x >= 0.0 && b.position.x + b.diameter <= 800.0);
            assert!(b.position.y >= 0.0 && b.position.y + b.diameter <= 600.0);
            assert!(b.diameter >= 30.0 && b.diameter < 70.0);
            assert!(b.velocity.x >= -3.0 && b.velocity.x < 3.0);
            assert!(b.velocity.y >= -3.0 && b.velocity.y < 3.0);
            assert!(!b.accelerating);
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        let p = PlacementParams::default();
        let a = generate(&mut Pcg32::seed_from_u64(7), &p);
        let b = generate(&mut Pcg32::seed_from_u64(7), &p);
        assert_eq!(a, b);
    }

    #[test]
    fn test_crowded_arena_drops_bodies() {
        // Only a couple of 70px-class bodies with a 50px gap fit in 200x200
        let mut rng = Pcg32::seed_from_u64(3);
        let p = params(50, 200.0, 200.0, 50.0, 20);
        let bodies = generate(&mut rng, &p);
        assert!(bodies.len() < 50);
        assert!(!bodies.is_empty());
        assert_separated(&bodies, 50.0);
    }

    #[test]
    fn test_tiny_arena_places_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let bodies = generate(&mut rng, &params(5, 20.0, 500.0, 0.0, 100));
        assert!(bodies.is_empty());
    }

    #[test]
    fn test_zero_attempts_places_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let bodies = generate(&mut rng, &params(5, 800.0, 600.0, 0.0, 0));
        assert!(bodies.is_empty());
    }

    #[test]
    fn test_arena_just_above_minimum_only_fits_small_bodies() {
        let mut rng = Pcg32::seed_from_u64(11);
        let bodies = generate(&mut rng, &params(1, 40.0, 40.0, 0.0, 200));
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0].diameter <= 40.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn placed_bodies_never_crowd(seed in any::<u64>(), count in 0usize..15, gap in 0.0f32..80.0) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let bodies = generate(&mut rng, &params(count, 800.0, 600.0, gap, 50));
                prop_assert!(bodies.len() <= count);
                for (i, a) in bodies.iter().enumerate() {
                    prop_assert!(a.position.x >= 0.0 && a.position.x + a.diameter <= 800.0);
                    prop_assert!(a.position.y >= 0.0 && a.position.y + a.diameter <= 600.0);
                    for b in &bodies[i + 1..] {
                        prop_assert!(a.center().distance(b.center()) > a.radius() + b.radius() + gap);
                    }
                }
            }
        }
    }
}
