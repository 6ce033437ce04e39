//! Physics components for ECS entities.
//!
//! An actor is any entity carrying both a [`KinematicBody`] and a
//! [`BoxCollider`]; the sweep system keeps the [`Grounded`] marker in sync
//! with the body's grounded flag.

use crate::physics::rect::Rect;

pub use crate::physics::body::{BoxCollider, KinematicBody};

/// Marker for actors standing on a floor after the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grounded;

/// Opt-in per-actor record of the last tick's broadphase candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugCandidates(pub Vec<Rect>);

/// Component bundle for a swept actor.
pub fn actor(body: KinematicBody, collider: BoxCollider) -> (KinematicBody, BoxCollider) {
    (body, collider)
}
