//! Enemy turn behaviour.
//!
//! The engine calls `reposition` during movement and `plan_shot` during the
//! AI step of every enemy tick. Both read a snapshot of the situation and
//! return what the enemy wants; the engine applies it.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use artillery_core::constants::*;
use artillery_core::enums::Weapon;

use crate::aim::compute_launch_angle;

/// Situation of the enemy tank for one tick.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub enemy_position: Vec2,
    pub player_position: Vec2,
    pub enemy_health: i32,
    /// Current barrel angle in world terms (degrees CCW from +x).
    pub world_angle: f32,
    pub power: f32,
    /// Unscaled gravity.
    pub gravity: f32,
    pub dt: f32,
    pub screen_width: f32,
}

/// What the enemy does with its barrel this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimAction {
    /// Rotate one step toward the solution.
    Adjust { world_angle: f32 },
    /// Close enough: snap to the solution and fire.
    Fire { world_angle: f32 },
}

/// New x for the enemy tank.
///
/// Healthy enemies close in but stop a short way from the player; damaged
/// ones back away.
pub fn reposition(ctx: &EnemyContext) -> f32 {
    let step = ENEMY_MOVE_SPEED * ctx.dt;
    let x = ctx.enemy_position.x;
    let player_x = ctx.player_position.x;

    let moved = if ctx.enemy_health >= ENEMY_BRAVE_HEALTH {
        if x > player_x + ENEMY_STANDOFF {
            x - step
        } else if x < player_x - ENEMY_STANDOFF {
            x + step
        } else {
            x
        }
    } else if x > player_x {
        x + step
    } else {
        x - step
    };

    moved.clamp(0.0, ctx.screen_width)
}

/// Walk the barrel toward the ballistic solution, firing once within
/// tolerance.
pub fn plan_shot(ctx: &EnemyContext) -> AimAction {
    // Downhill solutions can dip below the horizon; the barrel cannot.
    let desired = compute_launch_angle(
        ctx.enemy_position,
        ctx.player_position,
        ctx.power,
        ctx.gravity,
    )
    .clamp(0.0, 180.0);
    step_toward(ctx.world_angle, desired)
}

/// One aiming tick from `current` toward `desired` (both world degrees).
pub fn step_toward(current: f32, desired: f32) -> AimAction {
    if (current - desired).abs() > ENEMY_AIM_TOLERANCE {
        let world_angle = if current < desired {
            current + ANGLE_STEP
        } else {
            current - ANGLE_STEP
        };
        AimAction::Adjust { world_angle }
    } else {
        AimAction::Fire {
            world_angle: desired,
        }
    }
}

/// Small per-tick chance to load a random shell.
pub fn roll_weapon_swap<R: Rng + ?Sized>(rng: &mut R) -> Option<Weapon> {
    if rng.gen_bool(ENEMY_WEAPON_SWAP_CHANCE) {
        Weapon::ALL.choose(rng).copied()
    } else {
        None
    }
}
