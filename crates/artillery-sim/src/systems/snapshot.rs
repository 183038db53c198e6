//! Snapshot system: queries the ECS world and builds a complete StateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use artillery_core::components::*;
use artillery_core::enums::MatchPhase;
use artillery_core::events::{AudioEvent, ImpactReport};
use artillery_core::state::*;
use artillery_core::types::{Position, SimTime};
use artillery_terrain::Terrain;

use crate::level;
use crate::projectile::Projectile;

/// Build a complete StateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    terrain: &Terrain,
    time: &SimTime,
    phase: MatchPhase,
    hud: HudView,
    tanks: [Entity; 2],
    projectile: Option<&Projectile>,
    audio_events: Vec<AudioEvent>,
    impacts: Vec<ImpactReport>,
) -> StateSnapshot {
    StateSnapshot {
        time: *time,
        phase,
        hud,
        intro: build_intro(phase, hud.level),
        terrain: terrain.points().to_vec(),
        tanks: build_tanks(world, tanks),
        projectile: projectile.map(Projectile::view),
        particles: build_particles(world),
        powerups: build_powerups(world),
        obstacles: world
            .query::<&Obstacle>()
            .iter()
            .map(|(_entity, obstacle)| obstacle.rect)
            .collect(),
        audio_events,
        impacts,
    }
}

fn build_intro(phase: MatchPhase, level_number: u32) -> Option<IntroView> {
    match phase {
        MatchPhase::LevelIntro { remaining_secs } => Some(IntroView {
            level: level_number,
            narrative: level::narrative(level_number).to_string(),
            remaining_secs,
        }),
        MatchPhase::Active | MatchPhase::GameOver { .. } => None,
    }
}

/// Tanks in controller order (player first).
fn build_tanks(world: &World, tanks: [Entity; 2]) -> Vec<TankView> {
    tanks
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&Tank, &Position)>(entity).ok()?;
            let (tank, pos) = query.get()?;
            let view = TankView {
                side: tank.side,
                position: pos.0,
                angle: tank.angle,
                facing: tank.facing,
                power: tank.power,
                health: tank.health,
                weapon: tank.weapon,
                speed: tank.speed,
            };
            Some(view)
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_entity, (particle, pos))| ParticleView {
            position: pos.0,
            radius: particle.radius,
            color: particle.color,
            life: particle.life,
        })
        .collect()
}

/// Power-ups in spawn order.
fn build_powerups(world: &World) -> Vec<PowerUpView> {
    let mut powerups: Vec<(u64, PowerUpView)> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(_entity, (powerup, pos))| {
            (
                powerup.serial,
                PowerUpView {
                    position: pos.0,
                    kind: powerup.kind,
                },
            )
        })
        .collect();
    powerups.sort_by_key(|(serial, _)| *serial);
    powerups.into_iter().map(|(_, view)| view).collect()
}
