//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the two tanks once per match and rebuilds the per-level
//! entities (obstacles, plus clearing debris and power-ups) on every
//! level transition.

use hecs::{Entity, World};
use rand::Rng;

use artillery_core::components::*;
use artillery_core::constants::*;
use artillery_core::enums::Side;
use artillery_core::tuning::Tuning;
use artillery_core::types::{Position, Rect};
use artillery_terrain::Terrain;

use crate::systems::movement;

/// Starting x of a side's tank.
pub fn home_x(side: Side, tuning: &Tuning) -> f32 {
    match side {
        Side::Player => TANK_EDGE_INSET,
        Side::Enemy => tuning.screen_width - TANK_EDGE_INSET,
    }
}

/// Spawn a fresh tank at its home position, seated on the terrain.
pub fn spawn_tank(world: &mut World, terrain: &Terrain, side: Side, tuning: &Tuning) -> Entity {
    let x = home_x(side, tuning);
    world.spawn((
        Tank::new(side),
        Position::new(x, movement::seat_y(terrain, x)),
    ))
}

/// Spawn `count` ground-standing obstacles clear of both screen edges.
pub fn spawn_obstacles<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    terrain: &Terrain,
    count: u32,
    tuning: &Tuning,
) {
    let screen_width = tuning.screen_width as i32;
    for _ in 0..count {
        let w = rng.gen_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE);
        let h = rng.gen_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE);
        let max_left = (screen_width - OBSTACLE_EDGE_MARGIN - w).max(OBSTACLE_EDGE_MARGIN);
        let left = rng.gen_range(OBSTACLE_EDGE_MARGIN..=max_left) as f32;
        let top = terrain.height_at(left) - h as f32;
        world.spawn((Obstacle {
            rect: Rect::new(left, top, w as f32, h as f32),
        },));
    }
}

/// Despawn everything that belongs to a single level: obstacles,
/// power-ups and particles. Tanks survive.
pub fn clear_level(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query::<&Obstacle>().iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query::<&PowerUp>().iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query::<&Particle>().iter().map(|(e, _)| e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_tanks_spawn_at_home_on_ground() {
        let mut world = World::new();
        let tuning = Tuning::default();
        let terrain = Terrain::flat(800.0, 10.0, 520.0, 450.0, 570.0);
        let enemy = spawn_tank(&mut world, &terrain, Side::Enemy, &tuning);
        let pos = world.get::<&Position>(enemy).unwrap().0;
        assert_eq!(pos.x, 700.0);
        assert_eq!(pos.y, 510.0);
    }

    #[test]
    fn test_obstacles_rest_on_ground_inside_margins() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let tuning = Tuning::default();
        let terrain = Terrain::flat(800.0, 10.0, 520.0, 450.0, 570.0);
        spawn_obstacles(&mut world, &mut rng, &terrain, 200, &tuning);

        let mut n = 0;
        for (_e, obstacle) in world.query::<&Obstacle>().iter() {
            let r = obstacle.rect;
            assert!((40.0..=80.0).contains(&r.width));
            assert!((40.0..=80.0).contains(&r.height));
            assert!(r.left >= 100.0);
            assert!(r.left + r.width <= 700.0);
            assert_eq!(r.top + r.height, 520.0);
            n += 1;
        }
        assert_eq!(n, 200);
    }

    #[test]
    fn test_clear_level_keeps_tanks() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let tuning = Tuning::default();
        let terrain = Terrain::flat(800.0, 10.0, 520.0, 450.0, 570.0);
        let player = spawn_tank(&mut world, &terrain, Side::Player, &tuning);
        spawn_obstacles(&mut world, &mut rng, &terrain, 5, &tuning);
        world.spawn((
            PowerUp {
                kind: artillery_core::enums::PowerUpKind::Armor,
                serial: 0,
            },
            Position::new(10.0, 10.0),
        ));

        let mut buffer = Vec::new();
        clear_level(&mut world, &mut buffer);
        assert_eq!(world.len(), 1);
        assert!(world.contains(player));
    }
}
