//! Combat resolver: shell versus tanks, then shell versus ground.
//!
//! Only called while the shell is still flying after ballistics. Obstacle
//! and out-of-bounds endings never reach this system, so they never
//! explode.

use hecs::{Entity, World};
use rand::Rng;

use artillery_core::components::Tank;
use artillery_core::constants::GROUND_BURST;
use artillery_core::enums::ImpactKind;
use artillery_core::events::{AudioEvent, ImpactReport};
use artillery_core::types::Position;
use artillery_terrain::Terrain;

use crate::projectile::Projectile;
use crate::systems::particles;

/// Resolve collisions for the shell at its current position.
///
/// Tanks are checked in the given order, shooter included; the first one
/// within `explosion_radius` takes the hit. Otherwise the shell explodes if
/// it is at or below the surface. Returns the impact when the shell is
/// spent.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    terrain: &mut Terrain,
    rng: &mut R,
    projectile: &Projectile,
    tanks: [Entity; 2],
    explosion_radius: f32,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<ImpactReport> {
    let position = projectile.position;

    let mut report = None;
    for entity in tanks {
        let Ok((tank, tank_pos)) = world.query_one_mut::<(&mut Tank, &Position)>(entity) else {
            continue;
        };
        if tank_pos.0.distance(position) <= explosion_radius {
            let damage = projectile.weapon.damage();
            tank.health = (tank.health - damage).max(0);
            report = Some(ImpactReport {
                kind: ImpactKind::Tank,
                position,
                victim: Some(tank.side),
                damage,
                particles_spawned: projectile.weapon.burst(),
            });
            break;
        }
    }

    if report.is_none() && position.y >= terrain.height_at(position.x) {
        report = Some(ImpactReport {
            kind: ImpactKind::Terrain,
            position,
            victim: None,
            damage: 0,
            particles_spawned: GROUND_BURST,
        });
    }

    let report = report?;
    particles::spawn_burst(world, rng, position, report.particles_spawned);
    terrain.deform(position, explosion_radius);
    audio_events.push(AudioEvent::Explosion { position });
    Some(report)
}
