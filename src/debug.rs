//! Debug overlay data for collider and candidate boxes.
//!
//! The records are plain `#[repr(C)]` structs so a renderer can upload the
//! slice as an instance buffer with `bytemuck::cast_slice`.

use bytemuck::{Pod, Zeroable};

use crate::physics::rect::Rect;

/// Highlight colour for broadphase candidates (RGBA 128, 255, 0, 128).
pub const CANDIDATE_COLOR: [f32; 4] = [128.0 / 255.0, 1.0, 0.0, 128.0 / 255.0];

/// Outline colour for the moving collider.
pub const COLLIDER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One box to draw, in world space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DebugRect {
    /// Top-left corner.
    pub min: [f32; 2],
    /// Bottom-right corner.
    pub max: [f32; 2],
    /// RGBA colour.
    pub color: [f32; 4],
}

impl DebugRect {
    pub fn new(rect: &Rect, color: [f32; 4]) -> Self {
        Self {
            min: rect.top_left().to_array(),
            max: rect.bottom_right().to_array(),
            color,
        }
    }
}

/// Boxes for one tick: the collider first, then every candidate tile.
pub fn overlay(collider: &Rect, candidates: &[Rect]) -> Vec<DebugRect> {
    std::iter::once(DebugRect::new(collider, COLLIDER_COLOR))
        .chain(
            candidates
                .iter()
                .map(|tile| DebugRect::new(tile, CANDIDATE_COLOR)),
        )
        .collect()
}
