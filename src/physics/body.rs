//! Kinematic state of a moving actor.

use glam::Vec2;

use super::rect::Rect;

/// Position, velocity and ground contact of an actor.
///
/// The resolver only writes `velocity` and `grounded`; the position moves
/// when [`KinematicBody::integrate`] is called with the corrected velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicBody {
    /// Anchor position of the actor in world space.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Whether the last resolved tick found a floor under the actor.
    pub grounded: bool,
}

impl KinematicBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Integrate position: p += v * dt.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Collider rect of the given size, placed with its pivot on the body's
    /// position.
    #[inline]
    pub fn collider(&self, size: Vec2, pivot: Vec2) -> Rect {
        Rect::from_anchor(self.position, size, pivot)
    }
}

/// Size and pivot of an actor's collision box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub size: Vec2,
    /// Normalized anchor of the body's position inside the box.
    pub pivot: Vec2,
}

impl BoxCollider {
    /// Collider anchored at its top-left corner.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            pivot: Vec2::ZERO,
        }
    }

    pub fn with_pivot(size: Vec2, pivot: Vec2) -> Self {
        Self { size, pivot }
    }

    /// World-space rect for a body at `position`.
    #[inline]
    pub fn rect_at(&self, position: Vec2) -> Rect {
        Rect::from_anchor(position, self.size, self.pivot)
    }
}
