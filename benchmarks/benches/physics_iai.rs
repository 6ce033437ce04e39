//! Swept collision benchmarks (iai-callgrind - instruction counts).
//!
//! Prerequisites:
//!   cargo install iai-callgrind-runner
//!   sudo dnf install valgrind   # Fedora/WSL2
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai -- broadphase

use std::hint::black_box;

use glam::Vec2;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use tilesweep::physics::broadphase::candidate_tiles;
use tilesweep::physics::narrowphase::{cast, collect_contacts};
use tilesweep::physics::rect::Rect;
use tilesweep::physics::solver::resolve_contacts;
use tilesweep::{KinematicBody, SweepConfig, resolve, sweep_system};
use tilesweep_bench::*;

// ---------------------------------------------------------------------------
// Broadphase
// ---------------------------------------------------------------------------

#[library_benchmark]
fn broadphase_slow() {
    let grid = setup_solid_block(64);
    let actor = Rect::new(Vec2::splat(256.0), Vec2::new(6.0, 12.0));
    black_box(candidate_tiles(&actor, black_box(Vec2::new(60.0, 30.0)), 1.0 / 60.0, &grid, &solid()));
}

#[library_benchmark]
fn broadphase_fast() {
    let grid = setup_solid_block(64);
    let actor = Rect::new(Vec2::splat(256.0), Vec2::new(6.0, 12.0));
    black_box(candidate_tiles(&actor, black_box(Vec2::new(6000.0, 3000.0)), 1.0 / 60.0, &grid, &solid()));
}

library_benchmark_group!(
    name = broadphase_group;
    benchmarks =
        broadphase_slow,
        broadphase_fast
);

// ---------------------------------------------------------------------------
// Narrowphase
// ---------------------------------------------------------------------------

#[library_benchmark]
fn narrowphase_cast_hit() {
    let actor = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
    let floor = Rect::new(Vec2::new(0.0, 20.0), Vec2::splat(10.0));
    black_box(cast(&actor, black_box(Vec2::new(0.0, 50.0)), &floor, 1.0));
}

#[library_benchmark]
fn narrowphase_cast_miss() {
    let actor = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
    let floor = Rect::new(Vec2::new(0.0, 20.0), Vec2::splat(10.0));
    black_box(cast(&actor, black_box(Vec2::new(50.0, 0.0)), &floor, 1.0));
}

#[library_benchmark]
fn narrowphase_collect_64() {
    let actor = Rect::new(Vec2::new(4.0, 0.0), Vec2::splat(TILE_SIZE));
    let tiles = floor_tiles(black_box(64));
    black_box(collect_contacts(&actor, Vec2::new(30.0, 600.0), &tiles, 1.0 / 60.0));
}

library_benchmark_group!(
    name = narrowphase_group;
    benchmarks =
        narrowphase_cast_hit,
        narrowphase_cast_miss,
        narrowphase_collect_64
);

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

#[library_benchmark]
fn solver_floor_64() {
    let actor = Rect::new(Vec2::new(4.0, 0.0), Vec2::splat(TILE_SIZE));
    let velocity = Vec2::new(30.0, 600.0);
    let tiles = floor_tiles(black_box(64));
    let mut collected = collect_contacts(&actor, velocity, &tiles, 1.0 / 60.0);
    black_box(resolve_contacts(&actor, velocity, &tiles, &mut collected.contacts, 1.0 / 60.0));
}

library_benchmark_group!(
    name = solver_group;
    benchmarks = solver_floor_64
);

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[library_benchmark]
fn pipeline_resolve() {
    let room = setup_room(64, 64);
    let config = SweepConfig::default().with_solid(solid());
    let mut body = KinematicBody::new(Vec2::new(100.0, 480.0)).with_velocity(Vec2::new(60.0, 300.0));
    black_box(resolve(&mut body, &player_collider(), &room, &config, 1.0 / 60.0)).ok();
}

#[library_benchmark]
fn pipeline_player_60frames() {
    let room = setup_room(64, 64);
    black_box(run_player(&room, black_box(60))).ok();
}

#[library_benchmark]
fn pipeline_sweep_system_100() {
    let room = setup_room(128, 128);
    let config = SweepConfig::default().with_solid(solid());
    let mut world = setup_actor_world(black_box(100), &room);
    black_box(sweep_system(&mut world, &room, &config, 1.0 / 60.0));
}

library_benchmark_group!(
    name = pipeline_group;
    benchmarks =
        pipeline_resolve,
        pipeline_player_60frames,
        pipeline_sweep_system_100
);

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

main!(
    library_benchmark_groups = broadphase_group,
    narrowphase_group,
    solver_group,
    pipeline_group
);
