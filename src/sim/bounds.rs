//! Wall reflection for the rectangular arena

use super::body::{Arena, Body};

/// Which walls a body touched during one reflection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    /// Left or right wall
    pub x: bool,
    /// Top or bottom wall
    pub y: bool,
}

impl WallHits {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect a body off the arena walls
///
/// Each axis is checked independently, so a corner hit flips both components.
/// A body is in contact when `x < 0` or `x + diameter > width` (likewise for
/// y). On contact the velocity component is negated and scaled by
/// `bounce_factor`, then the position is clamped into `[0, extent - diameter]`.
pub fn reflect(body: &mut Body, arena: &Arena, bounce_factor: f32) -> WallHits {
    let max = arena.max_corner(body.diameter);
    let mut hits = WallHits::default();

    if body.position.x < 0.0 || body.position.x > arena.width - body.diameter {
        body.velocity.x = -body.velocity.x * bounce_factor;
        body.position.x = body.position.x.clamp(0.0, max.x);
        hits.x = true;
    }

    if body.position.y < 0.0 || body.position.y > arena.height - body.diameter {
        body.velocity.y = -body.velocity.y * bounce_factor;
        body.position.y = body.position.y.clamp(0.0, max.y);
        hits.y = true;
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Color;
    use glam::Vec2;

    const ARENA: Arena = Arena {
        width: 800.0,
        height: 600.0,
    };

    fn body(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), 40.0, Vec2::new(vx, vy), Color::WHITE)
    }

    #[test]
    fn test_inside_untouched() {
        let mut b = body(100.0, 100.0, 3.0, -2.0);
        let hits = reflect(&mut b, &ARENA, 0.9);
        assert!(!hits.any());
        assert_eq!(b.position, Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_left_wall_flips_and_damps() {
        let mut b = body(-3.0, 100.0, -4.0, 1.0);
        let hits = reflect(&mut b, &ARENA, 0.9);
        assert!(hits.x && !hits.y);
        assert_eq!(b.position.x, 0.0);
        assert!((b.velocity.x - 3.6).abs() < 1e-6);
        assert_eq!(b.velocity.y, 1.0);
    }

    #[test]
    fn test_right_wall_clamps_to_width_minus_diameter() {
        let mut b = body(775.0, 100.0, 5.0, 0.0);
        reflect(&mut b, &ARENA, 1.0);
        assert_eq!(b.position.x, 760.0);
        assert_eq!(b.velocity.x, -5.0);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut b = body(790.0, 590.0, 2.0, 2.0);
        let hits = reflect(&mut b, &ARENA, 0.5);
        assert!(hits.x && hits.y);
        assert_eq!(b.position, Vec2::new(760.0, 560.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_touching_edge_exactly_is_not_a_hit() {
        let mut b = body(760.0, 0.0, 1.0, -1.0);
        let hits = reflect(&mut b, &ARENA, 0.9);
        assert!(!hits.any());
    }

    #[test]
    fn test_arena_narrower_than_body_pins_to_origin() {
        let mut b = body(5.0, 5.0, 1.0, 1.0);
        reflect(&mut b, &Arena::new(20.0, 20.0), 1.0);
        assert_eq!(b.position, Vec2::ZERO);
    }
}
