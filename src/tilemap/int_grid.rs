//! Dense integer grid stored row-major.

use glam::{IVec2, Vec2};

use super::{TileCode, TileGrid, EMPTY_TILE};

/// Dense row-major tile grid.
#[derive(Debug, Clone)]
pub struct IntGrid {
    width: u32,
    height: u32,
    tile_size: f32,
    origin: Vec2,
    values: Vec<TileCode>,
}

impl IntGrid {
    /// Create an empty grid of `width * height` cells.
    pub fn new(width: u32, height: u32, tile_size: f32, origin: Vec2) -> Self {
        Self {
            width,
            height,
            tile_size,
            origin,
            values: vec![EMPTY_TILE; width as usize * height as usize],
        }
    }

    /// Create a grid from row-major values.
    ///
    /// Missing trailing values are empty; extra values are ignored.
    pub fn from_values(
        width: u32,
        height: u32,
        tile_size: f32,
        origin: Vec2,
        values: impl IntoIterator<Item = TileCode>,
    ) -> Self {
        let mut grid = Self::new(width, height, tile_size, origin);
        for (slot, value) in grid.values.iter_mut().zip(values) {
            *slot = value;
        }
        grid
    }

    /// Build a grid from ASCII rows, one character per cell.
    ///
    /// Digits map to their value, anything else is [`EMPTY_TILE`]. Short rows
    /// are padded with empty cells.
    pub fn from_ascii(rows: &[&str], tile_size: f32, origin: Vec2) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as u32;
        let mut grid = Self::new(width, rows.len() as u32, tile_size, origin);

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let code = ch.to_digit(10).map_or(EMPTY_TILE, TileCode::from);
                grid.values[y * width as usize + x] = code;
            }
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    #[inline]
    fn index(&self, cell: IVec2) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Store `code` at `cell`. Returns false if the cell is out of range.
    pub fn set(&mut self, cell: IVec2, code: TileCode) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.values[index] = code;
                true
            }
            None => false,
        }
    }

    /// Move the grid in world space.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// World-space size of the whole grid.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * self.tile_size
    }
}

impl TileGrid for IntGrid {
    #[inline]
    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    fn value_at(&self, cell: IVec2) -> TileCode {
        self.index(cell).map_or(EMPTY_TILE, |index| self.values[index])
    }

    fn bounds(&self) -> Option<(IVec2, IVec2)> {
        (self.width > 0 && self.height > 0).then(|| {
            (
                IVec2::ZERO,
                IVec2::new(self.width as i32 - 1, self.height as i32 - 1),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_empty() {
        let grid = IntGrid::from_values(2, 2, 8.0, Vec2::ZERO, [1, 2, 3, 4]);
        assert_eq!(grid.value_at(IVec2::new(1, 1)), 4);
        assert_eq!(grid.value_at(IVec2::new(-1, 0)), EMPTY_TILE);
        assert_eq!(grid.value_at(IVec2::new(2, 0)), EMPTY_TILE);
        assert_eq!(grid.value_at(IVec2::new(0, 2)), EMPTY_TILE);
        assert_eq!(grid.value_at(IVec2::new(i32::MAX, i32::MIN)), EMPTY_TILE);
    }

    #[test]
    fn test_from_values_row_major() {
        let grid = IntGrid::from_values(3, 2, 8.0, Vec2::ZERO, [1, 2, 3, 4, 5]);
        assert_eq!(grid.value_at(IVec2::new(2, 0)), 3);
        assert_eq!(grid.value_at(IVec2::new(0, 1)), 4);
        assert_eq!(grid.value_at(IVec2::new(2, 1)), EMPTY_TILE);
    }

    #[test]
    fn test_from_ascii() {
        let grid = IntGrid::from_ascii(&["..7", "66", "#6.6"], 16.0, Vec2::ZERO);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.value_at(IVec2::new(2, 0)), 7);
        assert_eq!(grid.value_at(IVec2::new(1, 1)), 6);
        assert_eq!(grid.value_at(IVec2::new(3, 1)), EMPTY_TILE);
        assert_eq!(grid.value_at(IVec2::new(0, 2)), EMPTY_TILE);
        assert_eq!(grid.value_at(IVec2::new(3, 2)), 6);
        assert_eq!(grid.world_size(), Vec2::new(64.0, 48.0));
    }

    #[test]
    fn test_set() {
        let mut grid = IntGrid::new(2, 2, 8.0, Vec2::ZERO);
        assert!(grid.set(IVec2::new(1, 0), 6));
        assert!(!grid.set(IVec2::new(2, 0), 6));
        assert_eq!(grid.value_at(IVec2::new(1, 0)), 6);
    }

    #[test]
    fn test_set_origin_moves_cells() {
        let mut grid = IntGrid::from_ascii(&[".6"], 8.0, Vec2::ZERO);
        assert_eq!(grid.world_to_grid(Vec2::new(9.0, 1.0)), IVec2::new(1, 0));

        grid.set_origin(Vec2::new(-8.0, 4.0));
        assert_eq!(grid.origin(), Vec2::new(-8.0, 4.0));
        assert_eq!(grid.grid_to_world(IVec2::new(1, 0)), Vec2::new(0.0, 4.0));
        assert_eq!(grid.value_at(grid.world_to_grid(Vec2::new(1.0, 5.0))), 6);
        assert_eq!(grid.value_at(grid.world_to_grid(Vec2::new(9.0, 5.0))), EMPTY_TILE);
    }
}
