//! Sweep-and-resolve system for every actor in a world.

use crate::ecs::components::physics::{BoxCollider, DebugCandidates, Grounded, KinematicBody};
use crate::physics::broadphase::TileQuery;
use crate::physics::{resolve_with, SweepConfig};
use crate::tilemap::TileGrid;

/// Resolve and integrate one tick of length `dt` for every actor.
///
/// Actors are resolved one after another against the same grid; they never
/// collide with each other. Actors whose input is rejected keep their state
/// and are logged. Entities carrying [`DebugCandidates`] get the tick's
/// broadphase candidates. Returns the number of actors moved.
pub fn sweep_system<G: TileGrid + ?Sized>(
    world: &mut hecs::World,
    grid: &G,
    config: &SweepConfig,
    dt: f32,
) -> usize {
    let mut query = TileQuery::new();
    let mut landed: Vec<hecs::Entity> = Vec::new();
    let mut airborne: Vec<hecs::Entity> = Vec::new();
    let mut moved = 0;

    for (entity, (body, collider, candidates)) in world.query_mut::<(
        &mut KinematicBody,
        &BoxCollider,
        Option<&mut DebugCandidates>,
    )>() {
        if let Err(err) = resolve_with(&mut query, body, collider, grid, config, dt) {
            tracing::warn!(?entity, %err, "actor skipped");
            continue;
        }
        body.integrate(dt);
        moved += 1;

        if let Some(candidates) = candidates {
            candidates.0.clear();
            candidates.0.extend_from_slice(query.candidates());
        }

        if body.grounded {
            landed.push(entity);
        } else {
            airborne.push(entity);
        }
    }

    // Apply marker changes via CommandBuffer.
    let mut cmd = hecs::CommandBuffer::new();
    for entity in landed {
        if !world.satisfies::<&Grounded>(entity).unwrap_or(false) {
            cmd.insert_one(entity, Grounded);
        }
    }
    for entity in airborne {
        if world.satisfies::<&Grounded>(entity).unwrap_or(false) {
            cmd.remove_one::<Grounded>(entity);
        }
    }
    cmd.run_on(world);

    moved
}
