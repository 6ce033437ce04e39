//! Shared setup helpers for tilesweep benchmarks.
//!
//! ## Running
//!
//! Wall-clock (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! iai-callgrind (instruction counts, requires valgrind):
//!   cargo install iai-callgrind-runner
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- broadphase

use glam::Vec2;
use tilesweep::physics::rect::Rect;
use tilesweep::{BoxCollider, IntGrid, KinematicBody, PhysicsWorld, SolidSet, SweepConfig};

pub const TILE_SIZE: f32 = 8.0;

/// Solid codes used by every bench level.
pub fn solid() -> SolidSet {
    SolidSet::from([6, 7])
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// Open room: solid border, a floor, and a staircase of platforms.
pub fn setup_room(width: u32, height: u32) -> IntGrid {
    let mut grid = IntGrid::new(width, height, TILE_SIZE, Vec2::ZERO);
    for x in 0..width as i32 {
        grid.set(glam::IVec2::new(x, 0), 6);
        grid.set(glam::IVec2::new(x, height as i32 - 1), 6);
    }
    for y in 0..height as i32 {
        grid.set(glam::IVec2::new(0, y), 6);
        grid.set(glam::IVec2::new(width as i32 - 1, y), 6);
    }
    for step in 1..(width.min(height) as i32 / 4) {
        for x in step * 3..step * 3 + 3 {
            grid.set(glam::IVec2::new(x, height as i32 - 1 - step * 2), 7);
        }
    }
    grid
}

/// Fully solid block of `n * n` tiles, the worst case for the broadphase.
pub fn setup_solid_block(n: u32) -> IntGrid {
    IntGrid::from_values(n, n, TILE_SIZE, Vec2::ZERO, std::iter::repeat(6).take((n * n) as usize))
}

/// `n` tiles in a row, laid out as one floor.
pub fn floor_tiles(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| Rect::new(Vec2::new(i as f32 * TILE_SIZE, 16.0), Vec2::splat(TILE_SIZE)))
        .collect()
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

pub fn player_collider() -> BoxCollider {
    BoxCollider::with_pivot(Vec2::new(6.0, 12.0), Vec2::new(0.5, 1.0))
}

/// Spawn `n` actors spread across the room, all falling and moving sideways.
pub fn setup_actor_world(n: usize, room: &IntGrid) -> hecs::World {
    let mut world = hecs::World::new();
    let size = room.world_size();
    let cols = (n as f32).sqrt().ceil().max(1.0) as usize;

    for i in 0..n {
        let fx = ((i % cols) as f32 + 0.5) / cols as f32;
        let fy = ((i / cols) as f32 + 0.5) / cols as f32;
        let position = Vec2::new(fx * size.x * 0.8 + size.x * 0.1, fy * size.y * 0.5 + 24.0);
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        world.spawn((
            KinematicBody::new(position).with_velocity(Vec2::new(60.0 * direction, 120.0)),
            player_collider(),
        ));
    }
    world
}

/// Run `ticks` fixed steps of a single falling, walking player.
pub fn run_player(room: &IntGrid, ticks: u32) -> anyhow::Result<KinematicBody> {
    let config = SweepConfig::default().with_solid(solid());
    let dt = config.fixed_timestep;
    let mut physics = PhysicsWorld::new(config);
    let collider = player_collider();
    let mut body = KinematicBody::new(room.world_size() * 0.5);

    for _ in 0..ticks {
        physics.step(&mut body, &collider, room, dt, |body, dt| {
            body.velocity.x = 60.0;
            body.velocity.y += 200.0 * dt;
        })?;
    }
    Ok(body)
}
