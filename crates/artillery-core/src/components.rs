//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Rect;

/// A tank. Paired with a `Position` whose y is re-derived from terrain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub side: Side,
    /// Barrel elevation in degrees above horizontal, `[0, 90]`.
    pub angle: f32,
    pub facing: Facing,
    /// Launch speed, `[POWER_MIN, POWER_MAX]`.
    pub power: f32,
    /// Hit points, `[0, ARMOR_CAP]`.
    pub health: i32,
    pub weapon: Weapon,
    /// Pixels per tick of movement on normal ground.
    pub speed: f32,
}

impl Tank {
    pub fn new(side: Side) -> Self {
        let facing = match side {
            Side::Player => Facing::Right,
            Side::Enemy => Facing::Left,
        };
        Self {
            side,
            angle: TANK_DEFAULT_ANGLE,
            facing,
            power: TANK_DEFAULT_POWER,
            health: TANK_START_HEALTH,
            weapon: Weapon::Normal,
            speed: TANK_BASE_SPEED,
        }
    }

    /// Firing angle in world terms (degrees CCW from +x).
    pub fn world_angle(&self) -> f32 {
        self.facing.world_angle(self.angle)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Static rectangle that swallows projectiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Monotonic spawn index; pickups are resolved in this order.
    pub serial: u64,
}

/// Cosmetic explosion debris. Paired with `Position` and `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub radius: u8,
    pub color: ParticleColor,
    /// Seconds until the particle is pruned.
    pub life: f32,
}
