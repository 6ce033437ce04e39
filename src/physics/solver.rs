//! Sequential velocity resolver for swept contacts.

use glam::Vec2;

use super::contact::Contact;
use super::narrowphase::cast;
use super::rect::Rect;

/// Sort contacts by entry time, earliest first.
///
/// The sort is stable, so contacts with equal entry times keep the order
/// the broadphase emitted their tiles in.
pub fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| a.entry_time.total_cmp(&b.entry_time));
}

/// Velocity change that stops the motion along `normal` at `entry_time`.
///
/// Only the component on the normal's axis changes. The correction is
/// limited to that component's magnitude, so the velocity can reach zero on
/// the blocked axis but never reverses.
#[inline]
pub fn slide_correction(velocity: Vec2, normal: Vec2, entry_time: f32) -> Vec2 {
    let remaining = (1.0 - entry_time).clamp(0.0, 1.0);
    let magnitude = velocity.abs();
    let correction = normal * magnitude * remaining;
    correction.clamp(-magnitude, magnitude)
}

/// Resolve contacts in entry-time order, adjusting `velocity` after each one.
///
/// Every contact is re-cast with the velocity left by the previous
/// corrections. A contact that still intersects is always corrected, however
/// late in the tick it is entered; contacts that no longer intersect are
/// skipped. Returns the
/// corrected velocity and the number of corrections applied.
///
/// `contacts[i].candidate` must index into `candidates`.
pub fn resolve_contacts(
    moving: &Rect,
    velocity: Vec2,
    candidates: &[Rect],
    contacts: &mut [Contact],
    dt: f32,
) -> (Vec2, usize) {
    sort_contacts(contacts);

    let mut velocity = velocity;
    let mut applied = 0;

    for contact in contacts.iter() {
        let Some(tile) = candidates.get(contact.candidate) else {
            continue;
        };

        match cast(moving, velocity, tile, dt) {
            Some(hit) => {
                let correction = slide_correction(velocity, hit.normal, hit.entry_time);
                tracing::trace!(
                    candidate = contact.candidate,
                    entry_time = hit.entry_time,
                    normal = ?hit.normal,
                    ?correction,
                    "contact resolved"
                );
                velocity += correction;
                applied += 1;
            }
            None => {
                tracing::trace!(candidate = contact.candidate, "contact no longer intersecting");
            }
        }
    }

    (velocity, applied)
}
