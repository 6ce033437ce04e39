mod input;
mod player;

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use tilesweep::{IntGrid, Rect, SweepConfig};

use input::{Buttons, InputState};
use player::{Gun, Player};

const TILE_SIZE: f32 = 8.0;
const FRAME_TIME: f64 = 1.0 / 60.0;
const FRAMES: u32 = 600;

// 6 = ground, 7 = walls and platforms
const LEVEL: &[&str] = &[
    "7777777777777777777777777777777777777777",
    "7......................................7",
    "7......................................7",
    "7......................................7",
    "7......................................7",
    "7......................................7",
    "7..................777777..............7",
    "7......................................7",
    "7......................................7",
    "7......................................7",
    "7......................................7",
    "7..........7...........................7",
    "7666666666666666666666.......66666666667",
    "7666666666666666666666.......66666666667",
];

/// Scripted buttons for `frame`: run right, hop the step, shoot twice and
/// end up in the pit.
fn script(frame: u32) -> Buttons {
    Buttons {
        left: (240..270).contains(&frame),
        right: frame < 240 || frame >= 330,
        jump: (40..46).contains(&frame) || (150..156).contains(&frame),
        shoot: (280..284).contains(&frame) || (300..304).contains(&frame),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let grid = IntGrid::from_ascii(LEVEL, TILE_SIZE, Vec2::ZERO);
    let floor = 12.0 * TILE_SIZE;
    let kill_line = grid.world_size().y + 4.0 * TILE_SIZE;

    let config = SweepConfig::default().with_solid([6, 7]);
    let mut player = Player::new(Vec2::new(3.0 * TILE_SIZE, floor), config);
    let mut gun = Gun::new(Rect::new(
        Vec2::new(14.0 * TILE_SIZE, floor - 3.0 * TILE_SIZE),
        Vec2::splat(3.0 * TILE_SIZE),
    ));

    let shots = Rc::new(Cell::new(0u32));
    let counter = shots.clone();
    player.on_shoot(move |muzzle, flip| {
        counter.set(counter.get() + 1);
        log::info!("bang from {muzzle} facing {}", if flip { "left" } else { "right" });
    });

    let mut input = InputState::default();
    for frame in 0..FRAMES {
        input.update(script(frame));
        player.update(&input, &mut gun, &grid, kill_line, FRAME_TIME)?;

        if frame % 60 == 59 {
            log::info!(
                "t = {:>2}s  position = {}  velocity = {}  grounded = {}",
                (frame + 1) / 60,
                player.body.position,
                player.body.velocity,
                player.body.grounded
            );
        }
    }

    log::info!(
        "done: gun taken = {}, shots fired = {}",
        gun.taken,
        shots.get()
    );
    Ok(())
}
