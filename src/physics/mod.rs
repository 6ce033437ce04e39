//! Swept collision of one moving box against a static tile grid.
//!
//! # Architecture
//!
//! Each tick runs the same pipeline:
//!
//! 1. Validate the inputs (collider size, velocity, timestep, tile size)
//! 2. Broadphase: collect solid tiles around the swept path
//! 3. Narrowphase: sweep the collider against every candidate with the
//!    intended velocity, recording entry time and normal, and the grounded flag
//! 4. Sort contacts by entry time
//! 5. Resolve contacts in order, re-testing each with the corrected velocity
//! 6. Integrate the position with the final velocity (caller or [`PhysicsWorld`])

pub mod body;
pub mod broadphase;
pub mod contact;
pub mod narrowphase;
pub mod rect;
pub mod solver;

use glam::Vec2;

use crate::error::{Result, SweepError};
use crate::tilemap::{SolidSet, TileGrid};

use self::body::{BoxCollider, KinematicBody};
use self::broadphase::{cell_count, TileQuery};
use self::narrowphase::collect_contacts;
use self::rect::Rect;
use self::solver::resolve_contacts;

/// Configuration for collision resolution.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Tile codes that block movement. Default: empty.
    pub solid: SolidSet,
    /// Fixed timestep for [`PhysicsWorld::step`] in seconds. Default: 1/60.
    pub fixed_timestep: f64,
    /// Maximum number of fixed ticks per [`PhysicsWorld::step`]. Default: 4.
    pub max_substeps: u32,
    /// Keep the broadphase candidates in each [`Resolution`] for debug
    /// drawing. Default: false.
    pub keep_candidates: bool,
    /// Largest number of grid cells one tick may query. Ticks whose swept
    /// path covers more cells are rejected. Default: 65536.
    pub max_query_cells: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            solid: SolidSet::new(),
            fixed_timestep: 1.0 / 60.0,
            max_substeps: 4,
            keep_candidates: false,
            max_query_cells: 1 << 16,
        }
    }
}

impl SweepConfig {
    pub fn with_solid(mut self, solid: impl Into<SolidSet>) -> Self {
        self.solid = solid.into();
        self
    }

    pub fn with_fixed_timestep(mut self, fixed_timestep: f64) -> Self {
        self.fixed_timestep = fixed_timestep;
        self
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    pub fn with_keep_candidates(mut self, keep_candidates: bool) -> Self {
        self.keep_candidates = keep_candidates;
        self
    }

    pub fn with_max_query_cells(mut self, max_query_cells: u64) -> Self {
        self.max_query_cells = max_query_cells;
        self
    }
}

/// Outcome of one resolved tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Velocity after all corrections.
    pub velocity: Vec2,
    /// Whether the intended motion pushed into a floor.
    pub grounded: bool,
    /// Contacts found with the intended velocity.
    pub contacts_found: usize,
    /// Contacts that still intersected when their turn came and were corrected.
    pub contacts_resolved: usize,
    /// Broadphase candidates, only filled when
    /// [`SweepConfig::keep_candidates`] is set.
    pub candidates: Vec<Rect>,
}

/// Reject inputs the pipeline cannot give a meaningful answer for.
pub fn validate(collider: &Rect, velocity: Vec2, dt: f32, tile_size: f32) -> Result<()> {
    if collider.is_degenerate() {
        return Err(SweepError::DegenerateCollider {
            size: collider.size,
        });
    }
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(SweepError::InvalidTimestep { dt });
    }
    if !velocity.is_finite() {
        return Err(SweepError::NonFiniteVelocity { velocity });
    }
    if !(tile_size > 0.0 && tile_size.is_finite()) {
        return Err(SweepError::InvalidTileSize { tile_size });
    }
    Ok(())
}

/// Resolve one tick for `body` using a caller-owned broadphase buffer.
///
/// Writes the corrected velocity and the grounded flag into `body`; the
/// position is left for the caller to integrate.
pub fn resolve_with<G: TileGrid + ?Sized>(
    query: &mut TileQuery,
    body: &mut KinematicBody,
    collider: &BoxCollider,
    grid: &G,
    config: &SweepConfig,
    dt: f32,
) -> Result<Resolution> {
    let rect = collider.rect_at(body.position);
    validate(&rect, body.velocity, dt, grid.tile_size())?;

    let cells = cell_count(&rect, body.velocity, dt, grid);
    if cells > config.max_query_cells {
        return Err(SweepError::QueryTooLarge {
            cells,
            limit: config.max_query_cells,
        });
    }

    let candidates = query.find_candidates(&rect, body.velocity, dt, grid, &config.solid);
    let mut collected = collect_contacts(&rect, body.velocity, candidates, dt);
    let contacts_found = collected.len();

    let (velocity, contacts_resolved) =
        resolve_contacts(&rect, body.velocity, candidates, &mut collected.contacts, dt);

    tracing::debug!(
        candidates = candidates.len(),
        contacts_found,
        contacts_resolved,
        grounded = collected.grounded,
        ?velocity,
        "tick resolved"
    );

    body.velocity = velocity;
    body.grounded = collected.grounded;

    Ok(Resolution {
        velocity,
        grounded: collected.grounded,
        contacts_found,
        contacts_resolved,
        candidates: if config.keep_candidates {
            candidates.to_vec()
        } else {
            Vec::new()
        },
    })
}

/// Resolve one tick for `body`. See [`resolve_with`].
pub fn resolve<G: TileGrid + ?Sized>(
    body: &mut KinematicBody,
    collider: &BoxCollider,
    grid: &G,
    config: &SweepConfig,
    dt: f32,
) -> Result<Resolution> {
    resolve_with(&mut TileQuery::new(), body, collider, grid, config, dt)
}

/// Fixed-timestep driver that resolves and integrates an actor.
pub struct PhysicsWorld {
    config: SweepConfig,
    accumulator: f64,
    query: TileQuery,
}

impl PhysicsWorld {
    /// Create a new physics world with the given configuration.
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            query: TileQuery::new(),
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SweepConfig {
        &mut self.config
    }

    /// Time carried over to the next [`step`](Self::step), in seconds.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Candidates from the most recent tick.
    pub fn last_candidates(&self) -> &[Rect] {
        self.query.candidates()
    }

    /// Resolve one tick of length `dt` and integrate the body's position.
    pub fn tick<G: TileGrid + ?Sized>(
        &mut self,
        body: &mut KinematicBody,
        collider: &BoxCollider,
        grid: &G,
        dt: f32,
    ) -> Result<Resolution> {
        let resolution = resolve_with(&mut self.query, body, collider, grid, &self.config, dt)?;
        body.integrate(dt);
        Ok(resolution)
    }

    /// Advance the simulation by `delta_time` seconds.
    ///
    /// Uses a fixed timestep accumulator and returns the number of ticks run.
    /// `on_tick` runs before every tick, e.g. to apply gravity and input to
    /// the body's velocity.
    pub fn step<G, F>(
        &mut self,
        body: &mut KinematicBody,
        collider: &BoxCollider,
        grid: &G,
        delta_time: f64,
        mut on_tick: F,
    ) -> Result<u32>
    where
        G: TileGrid + ?Sized,
        F: FnMut(&mut KinematicBody, f32),
    {
        let fixed = self.config.fixed_timestep;
        if !(fixed > 0.0 && fixed.is_finite()) {
            return Err(SweepError::InvalidTimestep { dt: fixed as f32 });
        }
        if !(delta_time >= 0.0 && delta_time.is_finite()) {
            return Err(SweepError::InvalidTimestep {
                dt: delta_time as f32,
            });
        }

        self.accumulator += delta_time;

        let mut substeps = 0u32;
        while self.accumulator >= fixed && substeps < self.config.max_substeps {
            on_tick(body, fixed as f32);
            self.tick(body, collider, grid, fixed as f32)?;
            self.accumulator -= fixed;
            substeps += 1;
        }

        // Clamp accumulator to avoid spiral of death
        if self.accumulator > fixed * self.config.max_substeps as f64 {
            tracing::warn!(
                dropped = self.accumulator,
                max_substeps = self.config.max_substeps,
                "physics falling behind, dropping accumulated time"
            );
            self.accumulator = 0.0;
        }

        Ok(substeps)
    }
}
