//! Explosion debris: burst spawning, integration and pruning.

use glam::Vec2;
use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;

use artillery_core::components::Particle;
use artillery_core::constants::*;
use artillery_core::enums::ParticleColor;
use artillery_core::types::{Position, Velocity};

/// Spawn `count` particles at `origin` with random size, colour, velocity
/// and lifetime.
pub fn spawn_burst<R: Rng + ?Sized>(world: &mut World, rng: &mut R, origin: Vec2, count: usize) {
    for _ in 0..count {
        let radius = rng.gen_range(PARTICLE_MIN_RADIUS..=PARTICLE_MAX_RADIUS);
        let color = *ParticleColor::ALL
            .choose(rng)
            .unwrap_or(&ParticleColor::Red);
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
        );
        let life = rng.gen_range(PARTICLE_MIN_LIFE..=PARTICLE_MAX_LIFE);
        world.spawn((
            Particle {
                radius,
                color,
                life,
            },
            Position(origin),
            Velocity(velocity),
        ));
    }
}

/// Integrate every particle and despawn the expired ones.
///
/// Velocities are per 1/60 s frame, hence the `PARTICLE_TIME_SCALE`
/// factor on the position step. Gravity is applied after the move.
pub fn run(world: &mut World, gravity: f32, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (particle, pos, vel)) in
        world.query_mut::<(&mut Particle, &mut Position, &mut Velocity)>()
    {
        pos.0 += vel.0 * dt * PARTICLE_TIME_SCALE;
        particle.life -= dt;
        vel.0.y += gravity * dt;
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Number of live particles.
pub fn count(world: &World) -> usize {
    world.query::<&Particle>().iter().count()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_burst_ranges() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        spawn_burst(&mut world, &mut rng, Vec2::new(400.0, 300.0), 200);
        assert_eq!(count(&world), 200);

        for (_e, (p, pos, vel)) in world.query_mut::<(&Particle, &Position, &Velocity)>() {
            assert!((2..=4).contains(&p.radius));
            assert!((0.5..=1.0).contains(&p.life));
            assert!(vel.0.x.abs() <= 5.0 && vel.0.y.abs() <= 5.0);
            assert_eq!(pos.0, Vec2::new(400.0, 300.0));
        }
    }

    #[test]
    fn test_integration_step() {
        let mut world = World::new();
        let e = world.spawn((
            Particle {
                radius: 3,
                color: ParticleColor::Orange,
                life: 1.0,
            },
            Position::new(0.0, 0.0),
            Velocity::new(1.0, -2.0),
        ));
        let mut buffer = Vec::new();
        run(&mut world, 98.0, 0.5, &mut buffer);

        let pos = world.get::<&Position>(e).unwrap().0;
        let vel = world.get::<&Velocity>(e).unwrap().0;
        let life = world.get::<&Particle>(e).unwrap().life;
        assert_eq!(pos, Vec2::new(30.0, -60.0));
        assert_eq!(vel, Vec2::new(1.0, 47.0));
        assert_eq!(life, 0.5);
    }

    #[test]
    fn test_expired_particles_pruned() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        spawn_burst(&mut world, &mut rng, Vec2::ZERO, 30);
        let mut buffer = Vec::new();

        run(&mut world, 98.0, 0.4, &mut buffer);
        assert_eq!(count(&world), 30, "no particle lives under 0.5 s");

        run(&mut world, 98.0, 0.7, &mut buffer);
        assert_eq!(count(&world), 0, "every particle lives at most 1.0 s");
    }
}
