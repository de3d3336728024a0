//! Body-body collision detection and response
//!
//! Detection is a brute-force scan over all pairs that stops at the first hit;
//! only one collision is resolved per tick even if several pairs overlap.
//! Response treats both bodies as unit masses.

use glam::Vec2;

use super::body::Body;
use crate::consts::FALLBACK_NORMAL;

/// What happened when a pair was resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first body's center to the second's
    pub normal: Vec2,
    /// Impulse scalar `j = (v_b - v_a) · n` before the bounce factor
    pub impulse: f32,
    /// Penetration depth before positional correction (negative if apart)
    pub overlap: f32,
}

/// Circle-circle overlap test; touching counts as a collision
#[inline]
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    a.center().distance(b.center()) <= a.radius() + b.radius()
}

/// Find the first overlapping pair in index order `(0,1), (0,2), ..., (1,2), ...`
pub fn find_first_collision(bodies: &[Body]) -> Option<(usize, usize)> {
    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            if bodies_overlap(a, b) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Apply an equal-mass impulse to both bodies and push them apart
///
/// The impulse is applied whatever the sign of the normal relative velocity,
/// so a pair that is already separating still gets its velocities exchanged
/// along the normal. Coincident centers use a fixed fallback normal.
pub fn resolve(a: &mut Body, b: &mut Body, bounce_factor: f32) -> Contact {
    let delta = b.center() - a.center();
    let distance = delta.length();

    let normal = if distance > 0.0 {
        delta / distance
    } else {
        log::debug!("coincident centers, using fallback normal");
        Vec2::new(FALLBACK_NORMAL.0, FALLBACK_NORMAL.1)
    };

    // 2 * (rv · n) / (m_a + m_b) with m = 1
    let relative = b.velocity - a.velocity;
    let impulse = relative.dot(normal);

    let dv = normal * impulse * bounce_factor;
    a.velocity += dv;
    b.velocity -= dv;

    let overlap = a.radius() + b.radius() - distance;
    let correction = normal * (overlap / 2.0);
    a.position -= correction;
    b.position += correction;

    Contact {
        normal,
        impulse,
        overlap,
    }
}

/// Borrow two distinct bodies mutably
///
/// Panics if `i == j` or either index is out of range; callers pass pairs from
/// `find_first_collision`.
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert!(i < j, "pair indices must be ordered");
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
