//! Bodies and the arena they live in

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sign;

/// Display color, carried through physics untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned playing field with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-left coordinate a body of `diameter` can take on each axis
    #[inline]
    pub fn max_corner(&self, diameter: f32) -> Vec2 {
        Vec2::new(
            (self.width - diameter).max(0.0),
            (self.height - diameter).max(0.0),
        )
    }

    /// Whether a body of `diameter` fits inside at all
    #[inline]
    pub fn fits(&self, diameter: f32) -> bool {
        diameter <= self.width && diameter <= self.height
    }
}

/// A circular body
///
/// `position` is the top-left corner of the bounding box, which is a
/// `diameter` x `diameter` square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub diameter: f32,
    pub velocity: Vec2,
    pub color: Color,
    /// When set, integration nudges speed up every tick
    #[serde(default)]
    pub accelerating: bool,
}

impl Body {
    pub fn new(position: Vec2, diameter: f32, velocity: Vec2, color: Color) -> Self {
        Self {
            position,
            diameter,
            velocity,
            color,
            accelerating: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.radius())
    }

    /// Advance one tick: accelerate if flagged, then move by velocity
    pub fn integrate(&mut self, acceleration_rate: f32) {
        if self.accelerating {
            self.velocity += sign(self.velocity) * acceleration_rate;
        }
        self.position += self.velocity;
    }

    /// Snap speed to `speed` per axis, keeping direction, and stop accelerating
    pub fn reset_velocity(&mut self, speed: f32) {
        self.velocity = sign(self.velocity) * speed;
        self.accelerating = false;
    }

    /// Pull the body back inside `arena` without touching velocity
    pub fn clamp_into(&mut self, arena: &Arena) {
        self.position = self.position.clamp(Vec2::ZERO, arena.max_corner(self.diameter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32, d: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), d, Vec2::new(vx, vy), Color::WHITE)
    }

    #[test]
    fn test_center_and_radius() {
        let b = body_at(10.0, 20.0, 40.0, 0.0, 0.0);
        assert_eq!(b.radius(), 20.0);
        assert_eq!(b.center(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut b = body_at(10.0, 10.0, 30.0, 2.0, -1.0);
        b.integrate(0.1);
        assert_eq!(b.position, Vec2::new(12.0, 9.0));
        assert_eq!(b.velocity, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_integrate_accelerating_grows_speed_before_moving() {
        let mut b = body_at(10.0, 10.0, 30.0, 2.0, -1.0);
        b.accelerating = true;
        b.integrate(0.5);
        assert_eq!(b.velocity, Vec2::new(2.5, -1.5));
        assert_eq!(b.position, Vec2::new(12.5, 8.5));
    }

    #[test]
    fn test_accelerating_leaves_resting_axis_alone() {
        let mut b = body_at(10.0, 10.0, 30.0, 0.0, 1.0);
        b.accelerating = true;
        b.integrate(0.5);
        assert_eq!(b.velocity.x, 0.0);
        assert_eq!(b.velocity.y, 1.5);
    }

    #[test]
    fn test_reset_velocity_keeps_direction() {
        let mut b = body_at(0.0, 0.0, 30.0, -7.3, 0.2);
        b.accelerating = true;
        b.reset_velocity(5.0);
        assert_eq!(b.velocity, Vec2::new(-5.0, 5.0));
        assert!(!b.accelerating);
    }

    #[test]
    fn test_clamp_into_smaller_arena() {
        let mut b = body_at(790.0, -4.0, 40.0, 1.0, 1.0);
        b.clamp_into(&Arena::new(400.0, 300.0));
        assert_eq!(b.position, Vec2::new(360.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 1.0));
    }
}
