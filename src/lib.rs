//! Swept AABB collision for actors moving through 2D tile grids.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **tilemap** - Tile grid contract and a dense integer grid
//! 2. **physics** - Swept cast, grid broadphase, contact resolution, fixed-step world
//! 3. **debug** - Overlay boxes for candidate tiles
//! 4. **ecs** - hecs ECS integration (feature = "ecs")
//!
//! Coordinates are Y-down: positive Y points toward the floor, so a floor
//! contact has the normal `(0, -1)`.

pub mod debug;
pub mod error;
pub mod physics;
pub mod tilemap;

#[cfg(feature = "ecs")]
pub mod ecs;

// Re-export commonly used types
pub use error::{Result, SweepError};

pub use physics::body::{BoxCollider, KinematicBody};
pub use physics::contact::{Contact, UP};
pub use physics::rect::Rect;
pub use physics::{resolve, PhysicsWorld, Resolution, SweepConfig};

pub use tilemap::{IntGrid, SolidSet, TileCode, TileGrid, EMPTY_TILE};

pub use debug::{overlay, DebugRect};

#[cfg(feature = "ecs")]
pub use ecs::prelude::*;

// Re-export glam for convenience
pub use glam;
