//! Tank movement and barrel control.
//!
//! Tanks only move sideways; y is always re-derived from the terrain so a
//! tank sits on the surface after every move and every regeneration.

use hecs::{Entity, World};

use artillery_core::commands::HeldKeys;
use artillery_core::components::Tank;
use artillery_core::constants::*;
use artillery_core::tuning::Tuning;
use artillery_core::types::Position;
use artillery_terrain::Terrain;

/// Centre y of a tank standing at `x`.
pub fn seat_y(terrain: &Terrain, x: f32) -> f32 {
    terrain.height_at(x) - TANK_HEIGHT / 2.0
}

/// Put a tank at `x` (clamped to the screen) on the surface.
pub fn place(world: &mut World, terrain: &Terrain, entity: Entity, x: f32, screen_width: f32) {
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        let x = x.clamp(0.0, screen_width);
        *pos = Position::new(x, seat_y(terrain, x));
    }
}

/// Re-seat every tank after the terrain changed shape.
pub fn reseat_all(world: &mut World, terrain: &Terrain) {
    for (_entity, (_tank, pos)) in world.query_mut::<(&Tank, &mut Position)>() {
        pos.0.y = seat_y(terrain, pos.0.x);
    }
}

/// Apply held movement and power keys to a human-controlled tank.
///
/// Movement is a per-tick step of `speed` scaled by the material under the
/// tank; power changes at `POWER_RATE` per second.
pub fn apply_held(
    world: &mut World,
    terrain: &Terrain,
    entity: Entity,
    held: HeldKeys,
    tuning: &Tuning,
    dt: f32,
) {
    let Ok((tank, pos)) = world.query_one_mut::<(&mut Tank, &mut Position)>(entity) else {
        return;
    };

    let step = tank.speed * terrain.material_at(pos.0.x).speed_factor();
    let mut x = pos.0.x;
    if held.move_left {
        x = (x - step).max(0.0);
    }
    if held.move_right {
        x = (x + step).min(tuning.screen_width);
    }
    if held.move_left || held.move_right {
        *pos = Position::new(x, seat_y(terrain, x));
    }

    if held.power_down {
        tank.power = (tank.power - POWER_RATE * dt).max(tuning.power_min);
    }
    if held.power_up {
        tank.power = (tank.power + POWER_RATE * dt).min(tuning.power_max);
    }
}

/// Raise (`+1`) or lower (`-1`) the barrel by one step.
pub fn adjust_angle(tank: &mut Tank, direction: f32) {
    tank.angle = (tank.angle + direction * ANGLE_STEP).clamp(ANGLE_MIN, ANGLE_MAX);
}
