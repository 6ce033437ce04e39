//! Narrowphase collision detection: swept rect-vs-rect and contact collection.
//!
//! A moving rect swept against a static rect is reduced to a ray cast
//! against the static rect grown by the moving rect's size (Minkowski sum).
//! The ray starts at the moving rect's center and covers `velocity * dt`.

use glam::Vec2;

use super::contact::{Collected, Contact};
use super::rect::Rect;

/// Penetration depth, in world units, still treated as touching.
///
/// Rounding can leave a resolved actor a fraction of a unit inside the
/// surface it stopped on. Within this depth the next cast reports the
/// surface at `entry_time == 0` instead of losing it.
pub const CONTACT_SKIN: f32 = 1e-3;

/// Parametric entry/exit of a ray against one axis slab.
///
/// A motionless axis never enters or leaves the slab: it is unconstrained
/// when the origin is strictly inside, and blocks the whole cast otherwise.
/// An origin exactly on the slab boundary counts as outside, so a rect
/// sliding flush along a face is not reported as hitting it.
#[inline]
fn slab(origin: f32, direction: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    if direction == 0.0 {
        return (origin > min && origin < max).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }

    let near = (min - origin) / direction;
    let far = (max - origin) / direction;
    if near > far {
        Some((far, near))
    } else {
        Some((near, far))
    }
}

/// Sweep `moving` by `velocity * dt` against the static `target`.
///
/// Returns the first contact within this tick's travel, i.e. with
/// `0 <= entry_time < 1`. `entry_time == 0` means the rects already touch
/// and the motion pushes into `target`.
///
/// The normal lies on the axis that entered the target last and points
/// against the motion on that axis. When both axes enter at the same time
/// (an exact corner hit) the Y axis wins, so landing on a ledge corner
/// reports a floor rather than a wall.
///
/// A rect that starts up to [`CONTACT_SKIN`] inside `target` and keeps
/// pushing into it touches at `entry_time == 0`. Deeper overlaps are not
/// reported.
///
/// Degenerate rects and non-finite motion never produce a contact.
pub fn cast(moving: &Rect, velocity: Vec2, target: &Rect, dt: f32) -> Option<Contact> {
    if moving.is_degenerate() || target.is_degenerate() {
        return None;
    }

    let direction = velocity * dt;
    if !direction.is_finite() {
        return None;
    }

    let expanded_min = target.position - moving.size * 0.5;
    let expanded_max = expanded_min + target.size + moving.size;
    let origin = moving.center();

    let (near_x, far_x) = slab(origin.x, direction.x, expanded_min.x, expanded_max.x)?;
    let (near_y, far_y) = slab(origin.y, direction.y, expanded_min.y, expanded_max.y)?;

    if near_x > far_y || near_y > far_x {
        return None;
    }

    let x_axis = near_x > near_y;
    let mut entry_time = near_x.max(near_y);
    let exit_time = far_x.min(far_y);

    if entry_time < 0.0 && entry_time.is_finite() {
        let speed = if x_axis { direction.x.abs() } else { direction.y.abs() };
        if -entry_time * speed <= CONTACT_SKIN {
            entry_time = 0.0;
        }
    }

    // Moving away, or first touch falls outside this tick.
    if exit_time < 0.0 || entry_time < 0.0 || entry_time >= 1.0 {
        return None;
    }

    let normal = if x_axis {
        Vec2::new(-direction.x.signum(), 0.0)
    } else {
        Vec2::new(0.0, -direction.y.signum())
    };

    Some(Contact {
        candidate: 0,
        entry_time,
        normal,
        point: origin + direction * entry_time,
    })
}

/// Sweep `moving` against every candidate with the uncorrected velocity.
///
/// Contacts keep the order of `candidates`. The actor counts as grounded
/// when any contact has an upward normal; this reflects the intended motion,
/// not what the resolver later lets through.
pub fn collect_contacts(
    moving: &Rect,
    velocity: Vec2,
    candidates: &[Rect],
    dt: f32,
) -> Collected {
    let mut collected = Collected::default();

    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(contact) = cast(moving, velocity, candidate, dt) {
            collected.grounded |= contact.is_ground();
            collected.contacts.push(contact.with_candidate(index));
        }
    }

    collected
}
