//! Tile grids the collision core reads from.
//!
//! The core only needs three things from a level: the tile size, the
//! world-space origin of cell `(0, 0)` and the code stored in each cell.
//! [`TileGrid`] is that contract; [`IntGrid`] is a dense implementation
//! suitable for levels exported as integer layers.

mod int_grid;

pub use int_grid::IntGrid;

use std::collections::BTreeSet;

use glam::{IVec2, Vec2};

/// Integer code stored in a grid cell.
pub type TileCode = i64;

/// Code reported for empty cells and for any cell outside the grid.
pub const EMPTY_TILE: TileCode = 0;

/// Read-only view of a uniform tile grid.
///
/// Implementations must never fail on lookups: cells outside the stored
/// region report [`EMPTY_TILE`].
pub trait TileGrid {
    /// Edge length of one square tile, in world units.
    fn tile_size(&self) -> f32;

    /// World-space position of the top-left corner of cell `(0, 0)`.
    fn origin(&self) -> Vec2;

    /// Code stored at `cell`, or [`EMPTY_TILE`] when out of range.
    fn value_at(&self, cell: IVec2) -> TileCode;

    /// Inclusive range of cells that may hold non-empty codes, if known.
    ///
    /// Queries clip to this range; `None` means unbounded.
    fn bounds(&self) -> Option<(IVec2, IVec2)> {
        None
    }

    /// Cell containing the world-space point `point`.
    #[inline]
    fn world_to_grid(&self, point: Vec2) -> IVec2 {
        ((point - self.origin()) / self.tile_size())
            .floor()
            .as_ivec2()
    }

    /// World-space top-left corner of `cell`.
    #[inline]
    fn grid_to_world(&self, cell: IVec2) -> Vec2 {
        self.origin() + cell.as_vec2() * self.tile_size()
    }
}

impl<T: TileGrid + ?Sized> TileGrid for &T {
    fn tile_size(&self) -> f32 {
        (**self).tile_size()
    }

    fn origin(&self) -> Vec2 {
        (**self).origin()
    }

    fn value_at(&self, cell: IVec2) -> TileCode {
        (**self).value_at(cell)
    }

    fn bounds(&self) -> Option<(IVec2, IVec2)> {
        (**self).bounds()
    }
}

/// Set of tile codes that block movement.
///
/// Codes not in the set, including codes the level never defined, are
/// treated as passable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolidSet {
    codes: BTreeSet<TileCode>,
}

impl SolidSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `code` as solid.
    pub fn insert(&mut self, code: TileCode) -> &mut Self {
        self.codes.insert(code);
        self
    }

    #[inline]
    pub fn contains(&self, code: TileCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileCode> + '_ {
        self.codes.iter().copied()
    }
}

impl FromIterator<TileCode> for SolidSet {
    fn from_iter<I: IntoIterator<Item = TileCode>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[TileCode; N]> for SolidSet {
    fn from(codes: [TileCode; N]) -> Self {
        codes.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_grid_floors() {
        let grid = IntGrid::new(4, 4, 16.0, Vec2::new(100.0, 50.0));
        assert_eq!(grid.world_to_grid(Vec2::new(100.0, 50.0)), IVec2::new(0, 0));
        assert_eq!(grid.world_to_grid(Vec2::new(115.9, 65.9)), IVec2::new(0, 0));
        assert_eq!(grid.world_to_grid(Vec2::new(116.0, 66.0)), IVec2::new(1, 1));
        assert_eq!(grid.world_to_grid(Vec2::new(99.0, 49.0)), IVec2::new(-1, -1));
    }

    #[test]
    fn test_grid_to_world_inverts_world_to_grid() {
        let grid = IntGrid::new(8, 8, 8.0, Vec2::new(-12.0, 40.0));
        for x in -3..10 {
            for y in -3..10 {
                let cell = IVec2::new(x, y);
                assert_eq!(grid.world_to_grid(grid.grid_to_world(cell)), cell);
            }
        }
    }

    #[test]
    fn test_solid_set() {
        let solid = SolidSet::from([6, 7]);
        assert!(solid.contains(6));
        assert!(solid.contains(7));
        assert!(!solid.contains(EMPTY_TILE));
        assert!(!solid.contains(42));

        let mut built = SolidSet::new();
        built.insert(7).insert(6);
        assert_eq!(built, solid);
        assert_eq!(built.iter().collect::<Vec<_>>(), vec![6, 7]);
        assert!(SolidSet::default().is_empty());
    }

    #[test]
    fn test_grid_by_reference() {
        let grid = IntGrid::from_ascii(&["7"], 8.0, Vec2::ZERO);
        let by_ref: &dyn TileGrid = &grid;
        assert_eq!(by_ref.value_at(IVec2::ZERO), 7);
        assert_eq!(by_ref.tile_size(), 8.0);
    }
}
