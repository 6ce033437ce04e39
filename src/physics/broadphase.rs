//! Broadphase: shortlist solid tiles along a collider's swept path.

use glam::{IVec2, Vec2};

use crate::tilemap::{SolidSet, TileGrid};

use super::rect::Rect;

/// Region covering the collider at the start and end of the tick, grown by
/// one tile on every side so partially covered cells are never missed.
pub fn swept_region(moving: &Rect, velocity: Vec2, dt: f32, tile_size: f32) -> Rect {
    moving
        .union(&moving.translated(velocity * dt))
        .inflated(tile_size)
}

/// Inclusive range of cells overlapped by `region`, clipped to the grid's
/// stored bounds when it reports any.
pub fn cell_range<G: TileGrid + ?Sized>(region: &Rect, grid: &G) -> Option<(IVec2, IVec2)> {
    let mut min = grid.world_to_grid(region.top_left());
    let mut max = grid.world_to_grid(region.bottom_right());

    if let Some((lo, hi)) = grid.bounds() {
        min = min.max(lo);
        max = max.min(hi);
    }

    (min.x <= max.x && min.y <= max.y).then_some((min, max))
}

/// Number of cells the query for `moving` would visit.
pub fn cell_count<G: TileGrid + ?Sized>(moving: &Rect, velocity: Vec2, dt: f32, grid: &G) -> u64 {
    let region = swept_region(moving, velocity, dt, grid.tile_size());
    cell_range(&region, grid).map_or(0, |(min, max)| {
        let columns = (max.x as i64 - min.x as i64 + 1) as u64;
        let rows = (max.y as i64 - min.y as i64 + 1) as u64;
        columns.saturating_mul(rows)
    })
}

/// Grid query that reuses its candidate buffer between ticks.
#[derive(Debug, Default)]
pub struct TileQuery {
    candidates: Vec<Rect>,
}

impl TileQuery {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Collect a rect for every solid tile near the path of `moving`.
    ///
    /// Cells are visited column by column: the outer loop walks X, the inner
    /// loop walks Y, both ascending. The resolver relies on this order to
    /// break ties between contacts with equal entry times.
    ///
    /// The walk is not bounded here; check [`cell_count`] first when the grid
    /// reports no bounds.
    pub fn find_candidates<G: TileGrid + ?Sized>(
        &mut self,
        moving: &Rect,
        velocity: Vec2,
        dt: f32,
        grid: &G,
        solid: &SolidSet,
    ) -> &[Rect] {
        self.candidates.clear();

        let tile_size = grid.tile_size();
        if !(tile_size > 0.0 && tile_size.is_finite()) || solid.is_empty() {
            return &self.candidates;
        }

        let region = swept_region(moving, velocity, dt, tile_size);
        let Some((min, max)) = cell_range(&region, grid) else {
            return &self.candidates;
        };

        let tile = Vec2::splat(tile_size);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                let cell = IVec2::new(x, y);
                if solid.contains(grid.value_at(cell)) {
                    self.candidates.push(Rect::new(grid.grid_to_world(cell), tile));
                }
            }
        }

        &self.candidates
    }

    /// Candidates found by the last query.
    pub fn candidates(&self) -> &[Rect] {
        &self.candidates
    }

    /// Take the candidate buffer, leaving an empty one behind.
    pub fn take_candidates(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.candidates)
    }
}

/// One-shot form of [`TileQuery::find_candidates`].
pub fn candidate_tiles<G: TileGrid + ?Sized>(
    moving: &Rect,
    velocity: Vec2,
    dt: f32,
    grid: &G,
    solid: &SolidSet,
) -> Vec<Rect> {
    let mut query = TileQuery::new();
    query.find_candidates(moving, velocity, dt, grid, solid);
    query.take_candidates()
}
