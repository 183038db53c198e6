//! Ballistics system: integrates the shell in flight.
//!
//! Force order per tick: wind, drag, Magnus, homing, gravity, then the
//! position step. Drag is applied as `v *= 1 - k*dt` each tick, so the
//! decay depends on frame rate.

use glam::Vec2;
use hecs::World;

use artillery_core::components::{Obstacle, Tank};
use artillery_core::enums::Weapon;
use artillery_core::tuning::Tuning;
use artillery_core::types::Position;

use crate::projectile::Projectile;

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    InFlight,
    /// Left the screen rectangle.
    OutOfBounds,
    /// Swallowed by an obstacle. No explosion.
    Blocked,
}

impl FlightStatus {
    pub fn is_active(self) -> bool {
        matches!(self, FlightStatus::InFlight)
    }
}

/// Environment forces for one tick.
#[derive(Debug, Clone, Copy)]
pub struct Forces {
    pub wind: f32,
    pub drag: f32,
    pub magnus: f32,
    pub homing: f32,
    /// Already scaled by `GRAVITY_SCALE`.
    pub gravity: f32,
}

impl Forces {
    pub fn new(tuning: &Tuning, wind: f32) -> Self {
        Self {
            wind,
            drag: tuning.drag_coeff,
            magnus: tuning.magnus_coeff,
            homing: tuning.homing_accel,
            gravity: tuning.effective_gravity(),
        }
    }
}

/// Advance the projectile one tick and report whether it is still flying.
pub fn run(
    world: &World,
    projectile: &mut Projectile,
    tuning: &Tuning,
    wind: f32,
    dt: f32,
) -> FlightStatus {
    let homing_target = resolve_target(world, projectile);
    integrate(projectile, &Forces::new(tuning, wind), homing_target, dt);

    let p = projectile.position;
    if p.x < 0.0 || p.x > tuning.screen_width || p.y < 0.0 || p.y > tuning.screen_height {
        return FlightStatus::OutOfBounds;
    }

    let blocked = world
        .query::<&Obstacle>()
        .iter()
        .any(|(_entity, obstacle)| obstacle.rect.contains(p));
    if blocked {
        return FlightStatus::Blocked;
    }

    FlightStatus::InFlight
}

/// Position of a living target for guided shells. Non-guided shells,
/// despawned targets and defeated tanks all yield `None`.
pub fn resolve_target(world: &World, projectile: &Projectile) -> Option<Vec2> {
    if projectile.weapon != Weapon::Guided {
        return None;
    }
    let entity = projectile.target?;
    let mut query = world.query_one::<(&Tank, &Position)>(entity).ok()?;
    let (tank, position) = query.get()?;
    let target = tank.is_alive().then_some(position.0);
    target
}

/// Apply all forces and move the shell. Pure in its inputs.
pub fn integrate(
    projectile: &mut Projectile,
    forces: &Forces,
    homing_target: Option<Vec2>,
    dt: f32,
) {
    let mut v = projectile.velocity;

    // 1. Wind pushes horizontally only.
    v.x += forces.wind * dt;

    // 2. Drag.
    v *= 1.0 - forces.drag * dt;

    // 3. Magnus nudge perpendicular to the pre-nudge velocity.
    let speed = v.length();
    if speed != 0.0 {
        let k = forces.magnus * projectile.spin * dt;
        v += Vec2::new(-v.y / speed, v.x / speed) * k;
    }

    // 4. Homing blends toward line of sight at the current speed.
    if let Some(target) = homing_target {
        let to_target = target - projectile.position;
        let dist = to_target.length();
        if dist != 0.0 {
            let desired = to_target / dist * v.length();
            v += (desired - v) * forces.homing * dt;
        }
    }

    // 5. Gravity.
    v.y += forces.gravity * dt;

    projectile.velocity = v;
    projectile.position += v * dt;
}
