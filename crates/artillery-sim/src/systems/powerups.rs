//! Power-up spawner and pickup resolution.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use artillery_core::components::{PowerUp, Tank};
use artillery_core::constants::*;
use artillery_core::enums::{PowerUpKind, Side, Weapon};
use artillery_core::tuning::Tuning;
use artillery_core::types::Position;
use artillery_terrain::Terrain;

/// Spawner clock and serial counter, owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct PowerUpClock {
    /// Seconds since the last spawn.
    pub elapsed: f32,
    pub next_serial: u64,
}

/// A consumed power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    pub side: Side,
    pub kind: PowerUpKind,
}

/// Advance the spawner, then let tanks collect anything within reach.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    terrain: &Terrain,
    clock: &mut PowerUpClock,
    tuning: &Tuning,
    tanks: [Entity; 2],
    dt: f32,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Pickup> {
    clock.elapsed += dt;
    if clock.elapsed > tuning.powerup_interval_secs {
        clock.elapsed = 0.0;
        spawn_random(world, rng, terrain, clock, tuning);
    }
    collect(world, rng, tanks, tuning, despawn_buffer)
}

/// Spawn one power-up of a random kind hovering over a random ground spot.
pub fn spawn_random<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    terrain: &Terrain,
    clock: &mut PowerUpClock,
    tuning: &Tuning,
) -> Entity {
    let kind = *PowerUpKind::ALL
        .choose(rng)
        .unwrap_or(&PowerUpKind::Health);
    let max_x = (tuning.screen_width as i32 - POWERUP_EDGE_MARGIN).max(POWERUP_EDGE_MARGIN);
    let x = rng.gen_range(POWERUP_EDGE_MARGIN..=max_x) as f32;
    let y = terrain.height_at(x) - POWERUP_HOVER;

    let serial = clock.next_serial;
    clock.next_serial += 1;
    debug!(?kind, x, "power-up spawned");
    world.spawn((PowerUp { kind, serial }, Position::new(x, y)))
}

/// Resolve pickups in spawn order. Each power-up goes to the first tank in
/// `tanks` order that is strictly within the pickup radius.
fn collect<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tanks: [Entity; 2],
    tuning: &Tuning,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Pickup> {
    despawn_buffer.clear();

    let mut available: Vec<(u64, Entity, PowerUpKind, Position)> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(entity, (powerup, pos))| (powerup.serial, entity, powerup.kind, *pos))
        .collect();
    available.sort_by_key(|(serial, ..)| *serial);

    let mut pickups = Vec::new();
    for (_serial, powerup_entity, kind, powerup_pos) in available {
        for tank_entity in tanks {
            let Ok((tank, tank_pos)) = world.query_one_mut::<(&mut Tank, &Position)>(tank_entity)
            else {
                continue;
            };
            if tank_pos.distance_to(&powerup_pos) < POWERUP_PICKUP_RADIUS {
                apply(tank, kind, tuning, rng);
                pickups.push(Pickup {
                    side: tank.side,
                    kind,
                });
                despawn_buffer.push(powerup_entity);
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    pickups
}

/// Effect table for every power-up kind.
pub fn apply<R: Rng + ?Sized>(tank: &mut Tank, kind: PowerUpKind, tuning: &Tuning, rng: &mut R) {
    match kind {
        PowerUpKind::Health => {
            tank.health = (tank.health + HEALTH_BONUS).min(HEALTH_CAP);
        }
        PowerUpKind::Force => {
            tank.power = (tank.power + FORCE_BONUS).min(tuning.power_max);
        }
        PowerUpKind::Armor => {
            tank.health = (tank.health + ARMOR_BONUS).min(ARMOR_CAP);
        }
        PowerUpKind::Speed => {
            tank.speed += SPEED_BONUS;
        }
        PowerUpKind::Weapon => {
            tank.weapon = *Weapon::ALL.choose(rng).unwrap_or(&Weapon::Normal);
        }
    }
}

/// Number of power-ups on the field.
pub fn count(world: &World) -> usize {
    world.query::<&PowerUp>().iter().count()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn tank_with_health(health: i32) -> Tank {
        Tank {
            health,
            ..Tank::new(Side::Player)
        }
    }

    #[test]
    fn test_health_caps_at_100() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tuning = Tuning::default();

        let mut tank = tank_with_health(50);
        apply(&mut tank, PowerUpKind::Health, &tuning, &mut rng);
        assert_eq!(tank.health, 70);

        let mut tank = tank_with_health(95);
        apply(&mut tank, PowerUpKind::Health, &tuning, &mut rng);
        assert_eq!(tank.health, 100);

        let mut tank = tank_with_health(130);
        apply(&mut tank, PowerUpKind::Health, &tuning, &mut rng);
        // An armored tank is clamped back to the normal cap.
        assert_eq!(tank.health, 100);
    }

    #[test]
    fn test_armor_caps_at_150() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tuning = Tuning::default();

        let mut tank = tank_with_health(100);
        apply(&mut tank, PowerUpKind::Armor, &tuning, &mut rng);
        assert_eq!(tank.health, 120);

        let mut tank = tank_with_health(145);
        apply(&mut tank, PowerUpKind::Armor, &tuning, &mut rng);
        assert_eq!(tank.health, 150);

        // Level 2+ enemies start at 160 and drop to the armor cap.
        let mut tank = tank_with_health(160);
        apply(&mut tank, PowerUpKind::Armor, &tuning, &mut rng);
        assert_eq!(tank.health, 150);
    }

    #[test]
    fn test_force_and_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tuning = Tuning::default();
        let mut tank = Tank::new(Side::Enemy);

        apply(&mut tank, PowerUpKind::Force, &tuning, &mut rng);
        assert_eq!(tank.power, 60.0);
        tank.power = 195.0;
        apply(&mut tank, PowerUpKind::Force, &tuning, &mut rng);
        assert_eq!(tank.power, 200.0);

        apply(&mut tank, PowerUpKind::Speed, &tuning, &mut rng);
        apply(&mut tank, PowerUpKind::Speed, &tuning, &mut rng);
        assert_eq!(tank.speed, 3.0);
    }

    #[test]
    fn test_weapon_pickup_covers_all_weapons() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let tuning = Tuning::default();
        let mut tank = Tank::new(Side::Player);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            apply(&mut tank, PowerUpKind::Weapon, &tuning, &mut rng);
            seen.insert(tank.weapon);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_spawner_interval() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let terrain = Terrain::flat(800.0, 10.0, 500.0, 450.0, 570.0);
        let tuning = Tuning::default();
        let player = world.spawn((Tank::new(Side::Player), Position::new(-500.0, 0.0)));
        let enemy = world.spawn((Tank::new(Side::Enemy), Position::new(-500.0, 0.0)));
        let mut clock = PowerUpClock::default();
        let mut buffer = Vec::new();

        let tanks = [player, enemy];

        // 5.0 s exactly is not past the interval.
        for _ in 0..40 {
            run(&mut world, &mut rng, &terrain, &mut clock, &tuning, tanks, 0.125, &mut buffer);
        }
        assert_eq!(count(&world), 0);

        run(&mut world, &mut rng, &terrain, &mut clock, &tuning, tanks, 0.25, &mut buffer);
        assert_eq!(count(&world), 1);
        assert_eq!(clock.elapsed, 0.0);

        let (_e, (_p, pos)) = world
            .query_mut::<(&PowerUp, &Position)>()
            .into_iter()
            .next()
            .unwrap();
        assert!((50.0..=750.0).contains(&pos.0.x));
        assert_eq!(pos.0.y, 485.0);
    }

    #[test]
    fn test_first_tank_in_order_wins_pickup() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let tuning = Tuning::default();
        let player = world.spawn((Tank::new(Side::Player), Position::new(400.0, 490.0)));
        let enemy = world.spawn((Tank::new(Side::Enemy), Position::new(405.0, 490.0)));
        world.spawn((
            PowerUp {
                kind: PowerUpKind::Speed,
                serial: 0,
            },
            Position::new(402.0, 485.0),
        ));
        let mut buffer = Vec::new();

        let pickups = collect(&mut world, &mut rng, [player, enemy], &tuning, &mut buffer);
        assert_eq!(
            pickups,
            vec![Pickup {
                side: Side::Player,
                kind: PowerUpKind::Speed
            }]
        );
        assert_eq!(count(&world), 0);
        assert_eq!(world.get::<&Tank>(enemy).unwrap().speed, TANK_BASE_SPEED);
    }

    #[test]
    fn test_pickup_radius_is_strict() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let tuning = Tuning::default();
        let player = world.spawn((Tank::new(Side::Player), Position::new(400.0, 490.0)));
        let enemy = world.spawn((Tank::new(Side::Enemy), Position::new(700.0, 490.0)));
        world.spawn((
            PowerUp {
                kind: PowerUpKind::Health,
                serial: 0,
            },
            Position::new(420.0, 490.0),
        ));
        let mut buffer = Vec::new();

        let pickups = collect(&mut world, &mut rng, [player, enemy], &tuning, &mut buffer);
        assert!(pickups.is_empty());
        assert_eq!(count(&world), 1);
    }

    proptest::proptest! {
        #[test]
        fn prop_pickups_respect_caps(
            start in 0i32..=160,
            kinds in proptest::collection::vec(0usize..5, 0..40),
            seed in proptest::prelude::any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tuning = Tuning::default();
            let mut tank = tank_with_health(start);
            for k in kinds {
                let kind = PowerUpKind::ALL[k];
                apply(&mut tank, kind, &tuning, &mut rng);
                proptest::prop_assert!(tank.health >= 0);
                proptest::prop_assert!(tank.health <= ARMOR_CAP);
                if kind == PowerUpKind::Health {
                    proptest::prop_assert!(tank.health <= HEALTH_CAP);
                }
                proptest::prop_assert!(tank.power <= tuning.power_max);
            }
        }
    }
}
