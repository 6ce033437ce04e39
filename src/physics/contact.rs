//! Contact data produced by the narrow phase.

use glam::Vec2;

/// Surface normal of a floor, i.e. a surface hit while travelling down.
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Result of a successful swept test against one static rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the tested rect in the candidate list it came from.
    pub candidate: usize,
    /// Fraction of the tick's travel at which the rects first touch, in `[0, 1)`.
    pub entry_time: f32,
    /// Axis-aligned unit normal of the surface that was hit.
    pub normal: Vec2,
    /// Position of the moving rect's center at `entry_time`.
    pub point: Vec2,
}

impl Contact {
    /// Tag the contact with the candidate it was computed against.
    #[inline]
    pub fn with_candidate(mut self, candidate: usize) -> Self {
        self.candidate = candidate;
        self
    }

    /// True if the contact is a floor the actor can stand on.
    #[inline]
    pub fn is_ground(&self) -> bool {
        self.normal == UP
    }
}

/// Contacts gathered for one tick, together with the grounding flag.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Contacts in candidate emission order.
    pub contacts: Vec<Contact>,
    /// Whether any contact had an upward normal.
    pub grounded: bool,
}

impl Collected {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}
