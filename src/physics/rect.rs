//! Axis-aligned rectangles used for both the moving collider and tiles.

use glam::Vec2;

use super::contact::Contact;
use super::narrowphase;

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// `pivot` is the normalized anchor of the owning entity inside the rect.
/// It only matters when converting from or to the entity's anchored
/// position; the geometry tests ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
    pub pivot: Vec2,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            pivot: Vec2::ZERO,
        }
    }

    /// Create a rect with an explicit pivot.
    pub fn with_pivot(position: Vec2, size: Vec2, pivot: Vec2) -> Self {
        Self {
            position,
            size,
            pivot,
        }
    }

    /// Create a rect from min/max corners.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min, max - min)
    }

    /// Place a rect so that its pivot lands on `anchor`.
    pub fn from_anchor(anchor: Vec2, size: Vec2, pivot: Vec2) -> Self {
        Self::with_pivot(anchor - size * pivot, size, pivot)
    }

    /// World-space point the pivot maps to.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.position + self.size * self.pivot
    }

    /// Move the rect so that its pivot lands on `anchor`.
    #[inline]
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.position = anchor - self.size * self.pivot;
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        self.position + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// True when the rect has no usable area or holds non-finite values.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
            || !self.position.is_finite()
            || !self.size.is_finite()
    }

    /// Test whether `other` lies entirely inside this rect (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        let (min, max) = (self.top_left(), self.bottom_right());
        let (other_min, other_max) = (other.top_left(), other.bottom_right());
        other_min.x >= min.x
            && other_min.y >= min.y
            && other_max.x <= max.x
            && other_max.y <= max.y
    }

    /// Test whether a point lies inside this rect (edges inclusive).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.top_left(), self.bottom_right());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Test whether the interiors of two rects overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (min, max) = (self.top_left(), self.bottom_right());
        let (other_min, other_max) = (other.top_left(), other.bottom_right());
        min.x < other_max.x && max.x > other_min.x && min.y < other_max.y && max.y > other_min.y
    }

    /// Smallest rect enclosing both rects.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_min_max(
            self.top_left().min(other.top_left()),
            self.bottom_right().max(other.bottom_right()),
        )
    }

    /// Copy of this rect moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect {
            position: self.position + offset,
            ..*self
        }
    }

    /// Copy of this rect grown by `amount` on every side.
    pub fn inflated(&self, amount: f32) -> Rect {
        Rect {
            position: self.position - Vec2::splat(amount),
            size: self.size + Vec2::splat(amount * 2.0),
            pivot: self.pivot,
        }
    }

    /// Sweep this rect by `velocity * dt` against a static `target`.
    ///
    /// See [`narrowphase::cast`].
    #[inline]
    pub fn cast(&self, velocity: Vec2, target: &Rect, dt: f32) -> Option<Contact> {
        narrowphase::cast(self, velocity, target, dt)
    }
}
