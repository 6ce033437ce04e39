//! Errors reported when a resolution tick is refused.

use glam::Vec2;
use thiserror::Error;

/// Invalid input rejected at the boundary of a resolution tick.
///
/// A missed cast is not an error; it is reported as `None` by
/// [`cast`](crate::physics::narrowphase::cast).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SweepError {
    /// The moving collider has a zero, negative or non-finite extent.
    #[error("degenerate collider size {size}")]
    DegenerateCollider { size: Vec2 },

    /// The timestep is zero, negative or non-finite.
    #[error("invalid timestep {dt}, expected a finite value > 0")]
    InvalidTimestep { dt: f32 },

    /// The intended velocity contains NaN or infinity.
    #[error("non-finite velocity {velocity}")]
    NonFiniteVelocity { velocity: Vec2 },

    /// The tile grid reported a tile size that cannot be mapped to cells.
    #[error("invalid tile size {tile_size}, expected a finite value > 0")]
    InvalidTileSize { tile_size: f32 },

    /// The swept path covers more grid cells than the query may visit.
    #[error("swept path covers {cells} cells, query limit is {limit}")]
    QueryTooLarge { cells: u64, limit: u64 },
}

pub type Result<T> = std::result::Result<T, SweepError>;
