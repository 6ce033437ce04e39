//! Platformer player driven by [`InputState`].

use glam::Vec2;
use tilesweep::{BoxCollider, KinematicBody, PhysicsWorld, Rect, SweepConfig, TileGrid};

use crate::input::InputState;

pub const RUN_SPEED: f32 = 60.0;
pub const JUMP_IMPULSE: f32 = 90.0;
pub const GRAVITY: f32 = 200.0;
/// Gravity scale while falling, for a snappier arc.
pub const FALL_MULTIPLIER: f32 = 1.8;

/// Pickup that enables shooting once the player stands fully inside it.
#[derive(Debug, Clone, Copy)]
pub struct Gun {
    pub pickup: Rect,
    pub taken: bool,
}

impl Gun {
    pub fn new(pickup: Rect) -> Self {
        Self {
            pickup,
            taken: false,
        }
    }
}

type ShootListener = Box<dyn FnMut(Vec2, bool)>;

pub struct Player {
    pub body: KinematicBody,
    pub collider: BoxCollider,
    pub flip: bool,
    pub has_gun: bool,
    start: Vec2,
    physics: PhysicsWorld,
    on_shoot: Vec<ShootListener>,
}

impl Player {
    /// Player standing with its feet at `start`.
    pub fn new(start: Vec2, config: SweepConfig) -> Self {
        Self {
            body: KinematicBody::new(start),
            collider: BoxCollider::with_pivot(Vec2::new(10.0, 16.0), Vec2::new(0.5, 1.0)),
            flip: false,
            has_gun: false,
            start,
            physics: PhysicsWorld::new(config),
            on_shoot: Vec::new(),
        }
    }

    /// Register a listener called with the muzzle position and facing.
    pub fn on_shoot(&mut self, listener: impl FnMut(Vec2, bool) + 'static) {
        self.on_shoot.push(Box::new(listener));
    }

    pub fn rect(&self) -> Rect {
        self.collider.rect_at(self.body.position)
    }

    pub fn respawn(&mut self) {
        self.body = KinematicBody::new(self.start);
    }

    /// Advance one frame of `delta_time` seconds.
    pub fn update<G: TileGrid + ?Sized>(
        &mut self,
        input: &InputState,
        gun: &mut Gun,
        grid: &G,
        kill_line: f32,
        delta_time: f64,
    ) -> anyhow::Result<()> {
        let h = input.horizontal();

        if input.jump_held() && self.body.grounded {
            self.body.velocity.y -= JUMP_IMPULSE;
        }

        if input.shoot_pressed() && self.has_gun {
            let muzzle = self.rect().center();
            for listener in &mut self.on_shoot {
                listener(muzzle, self.flip);
            }
        }

        if !gun.taken && gun.pickup.contains(&self.rect()) {
            gun.taken = true;
            self.has_gun = true;
            log::info!("picked up gun at {}", self.body.position);
        }

        if self.body.position.y > kill_line {
            log::info!("fell out of the level, respawning");
            self.respawn();
        }

        if h != 0.0 {
            self.flip = h < 0.0;
        }

        self.physics
            .step(&mut self.body, &self.collider, grid, delta_time, |body, dt| {
                let multiplier = if body.velocity.y > 0.0 {
                    FALL_MULTIPLIER
                } else {
                    1.0
                };
                body.velocity.x = h * RUN_SPEED;
                body.velocity.y += GRAVITY * multiplier * dt;
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Buttons;
    use std::cell::Cell;
    use std::rc::Rc;
    use tilesweep::IntGrid;

    const DT: f64 = 1.0 / 60.0;

    fn level() -> IntGrid {
        IntGrid::from_ascii(
            &["..........", "..........", "..........", "6666666666"],
            8.0,
            Vec2::ZERO,
        )
    }

    fn player() -> Player {
        Player::new(Vec2::new(20.0, 24.0), SweepConfig::default().with_solid([6, 7]))
    }

    fn far_gun() -> Gun {
        Gun::new(Rect::new(Vec2::splat(1000.0), Vec2::splat(24.0)))
    }

    fn settle(player: &mut Player, grid: &IntGrid) {
        let input = InputState::default();
        let mut gun = far_gun();
        for _ in 0..30 {
            player.update(&input, &mut gun, grid, 100.0, DT).unwrap();
        }
    }

    #[test]
    fn test_stands_on_floor() {
        let grid = level();
        let mut player = player();
        settle(&mut player, &grid);
        assert!(player.body.grounded);
        assert!((player.body.position.y - 24.0).abs() < 1e-2);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let grid = level();
        let mut player = player();
        settle(&mut player, &grid);

        let mut input = InputState::default();
        input.update(Buttons {
            jump: true,
            ..Buttons::default()
        });
        let mut gun = far_gun();
        player.update(&input, &mut gun, &grid, 100.0, DT).unwrap();
        assert!(player.body.velocity.y < 0.0);
        assert!(!player.body.grounded);

        // Holding jump in the air adds nothing.
        let airborne = player.body.velocity.y;
        player.update(&input, &mut gun, &grid, 100.0, DT).unwrap();
        assert!(player.body.velocity.y > airborne - 1.0);
    }

    #[test]
    fn test_respawn_below_kill_line() {
        let grid = level();
        let mut player = player();
        player.body.position = Vec2::new(20.0, 500.0);
        let mut gun = far_gun();
        player
            .update(&InputState::default(), &mut gun, &grid, 100.0, DT)
            .unwrap();
        assert!(player.body.position.y < 100.0);
    }

    #[test]
    fn test_shoot_needs_gun() {
        let grid = level();
        let mut player = player();
        let shots = Rc::new(Cell::new(0));
        let counter = shots.clone();
        player.on_shoot(move |_, _| counter.set(counter.get() + 1));

        let mut input = InputState::default();
        input.update(Buttons {
            shoot: true,
            ..Buttons::default()
        });
        let mut gun = far_gun();
        player.update(&input, &mut gun, &grid, 100.0, DT).unwrap();
        assert_eq!(shots.get(), 0);

        // Pickup zone around the player.
        let mut gun = Gun::new(Rect::new(Vec2::new(8.0, 0.0), Vec2::splat(24.0)));
        input.update(Buttons::default());
        player.update(&input, &mut gun, &grid, 100.0, DT).unwrap();
        assert!(gun.taken && player.has_gun);

        input.update(Buttons {
            shoot: true,
            ..Buttons::default()
        });
        player.update(&input, &mut gun, &grid, 100.0, DT).unwrap();
        assert_eq!(shots.get(), 1);
    }

    #[test]
    fn test_shoot_without_listeners() {
        let grid = level();
        let mut player = player();
        player.has_gun = true;
        let mut input = InputState::default();
        input.update(Buttons {
            shoot: true,
            ..Buttons::default()
        });
        let mut gun = far_gun();
        assert!(player.update(&input, &mut gun, &grid, 100.0, DT).is_ok());
    }
}
