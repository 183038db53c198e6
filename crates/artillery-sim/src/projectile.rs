//! The single shell in flight.
//!
//! The engine holds at most one of these as `Option<Projectile>`; firing is
//! refused while it is `Some`.

use glam::Vec2;
use hecs::Entity;
use rand::Rng;

use artillery_core::constants::BARREL_LENGTH;
use artillery_core::enums::{Side, Weapon};
use artillery_core::state::ProjectileView;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Fixed for the whole flight, `[-1, 1]`.
    pub spin: f32,
    pub weapon: Weapon,
    pub shooter: Side,
    /// Tank guided shells steer toward. Resolved every tick; a stale or
    /// defeated target means straight flight.
    pub target: Option<Entity>,
}

impl Projectile {
    /// Launch from a tank centre along `world_angle` (degrees CCW from +x).
    ///
    /// The shell appears at the muzzle, one barrel length out.
    pub fn launch<R: Rng + ?Sized>(
        rng: &mut R,
        tank_center: Vec2,
        world_angle: f32,
        power: f32,
        weapon: Weapon,
        shooter: Side,
        target: Option<Entity>,
    ) -> Self {
        let rad = world_angle.to_radians();
        // Screen y grows downward, so "up" is negative.
        let dir = Vec2::new(rad.cos(), -rad.sin());
        Self {
            position: tank_center + dir * BARREL_LENGTH,
            velocity: dir * power,
            spin: rng.gen_range(-1.0..=1.0),
            weapon,
            shooter,
            target,
        }
    }

    pub fn view(&self) -> ProjectileView {
        ProjectileView {
            position: self.position,
            velocity: self.velocity,
            weapon: self.weapon,
            shooter: self.shooter,
        }
    }
}
