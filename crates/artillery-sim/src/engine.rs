//! Simulation engine: the turn and level controller.
//!
//! `SimulationEngine` owns the hecs world, the terrain, the wind and the
//! single projectile slot. Input is queued between ticks; `tick(dt)` runs
//! every system in a fixed order and returns a `StateSnapshot`. Completely
//! headless, enabling deterministic testing from a seed.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use artillery_ai::brain::{self, AimAction, EnemyContext};
use artillery_core::commands::{HeldKeys, InputEvent, TickInput};
use artillery_core::components::Tank;
use artillery_core::enums::{Facing, GameMode, MatchPhase, Side};
use artillery_core::events::{AudioEvent, ImpactReport};
use artillery_core::state::{HudView, StateSnapshot};
use artillery_core::tuning::Tuning;
use artillery_core::types::{Position, SimTime};
use artillery_terrain::Terrain;

use crate::level;
use crate::projectile::Projectile;
use crate::systems;
use crate::systems::powerups::PowerUpClock;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs give the same match.
    pub seed: u64,
    pub mode: GameMode,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mode: GameMode::default(),
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    terrain: Terrain,
    tuning: Tuning,
    time: SimTime,
    phase: MatchPhase,
    mode: GameMode,
    level: u32,
    turn: Side,
    wind: f32,
    projectile: Option<Projectile>,
    player: Entity,
    enemy: Entity,
    powerup_clock: PowerUpClock,
    rng: ChaCha8Rng,
    event_queue: VecDeque<InputEvent>,
    held_player: HeldKeys,
    held_enemy: HeldKeys,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    impacts: Vec<ImpactReport>,
}

impl SimulationEngine {
    /// Create an engine with level 1 already laid out.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let terrain = artillery_terrain::generate(&mut rng, &config.tuning);
        let mut world = World::new();
        let player = world_setup::spawn_tank(&mut world, &terrain, Side::Player, &config.tuning);
        let enemy = world_setup::spawn_tank(&mut world, &terrain, Side::Enemy, &config.tuning);

        let mut engine = Self {
            world,
            terrain,
            phase: level::opening_phase(config.mode, &config.tuning),
            tuning: config.tuning,
            time: SimTime::default(),
            mode: config.mode,
            level: 1,
            turn: Side::Player,
            wind: 0.0,
            projectile: None,
            player,
            enemy,
            powerup_clock: PowerUpClock::default(),
            rng,
            event_queue: VecDeque::new(),
            held_player: HeldKeys::default(),
            held_enemy: HeldKeys::default(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            impacts: Vec::new(),
        };
        engine.start_level();
        info!(mode = ?engine.mode, seed = config.seed, "match started");
        engine
    }

    /// Queue a discrete input event for the next tick.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.event_queue.push_back(event);
    }

    /// Queue multiple events.
    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.event_queue.extend(events);
    }

    /// Replace the held-key state of one side. Persists until changed.
    pub fn set_held_keys(&mut self, side: Side, held: HeldKeys) {
        match side {
            Side::Player => self.held_player = held,
            Side::Enemy => self.held_enemy = held,
        }
    }

    /// Queue a whole frame of input from the input collaborator.
    pub fn apply_input(&mut self, input: &TickInput) {
        self.queue_events(input.events.iter().copied());
        for side in [Side::Player, Side::Enemy] {
            self.set_held_keys(side, input.held(side));
        }
    }

    /// Advance the match by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> StateSnapshot {
        let dt = dt.max(0.0);

        match self.phase {
            MatchPhase::Active => {
                self.run_systems(dt);
                self.time.advance(dt);
            }
            MatchPhase::LevelIntro { .. } | MatchPhase::GameOver { .. } => {
                // Interstitials swallow input.
                let key_pressed = !self.event_queue.is_empty();
                self.event_queue.clear();
                self.phase =
                    level::advance_phase(self.phase, dt, key_pressed, self.mode, &self.tuning);
            }
        }

        self.snapshot()
    }

    /// Build a snapshot without advancing. Drains pending cues.
    pub fn snapshot(&mut self) -> StateSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        let impacts = std::mem::take(&mut self.impacts);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.terrain,
            &self.time,
            self.phase,
            self.hud(),
            [self.player, self.enemy],
            self.projectile.as_ref(),
            audio_events,
            impacts,
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn wind(&self) -> f32 {
        self.wind
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Entity of a side's tank.
    pub fn tank_entity(&self, side: Side) -> Entity {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }

    /// Copy of a side's tank component.
    pub fn tank(&self, side: Side) -> Option<Tank> {
        self.world
            .get::<&Tank>(self.tank_entity(side))
            .ok()
            .map(|tank| (*tank).clone())
    }

    /// Centre of a side's tank.
    pub fn tank_position(&self, side: Side) -> Option<glam::Vec2> {
        self.world
            .get::<&Position>(self.tank_entity(side))
            .ok()
            .map(|pos| pos.0)
    }

    /// Whether `side` is driven by the AI rather than input.
    pub fn is_ai(&self, side: Side) -> bool {
        side == Side::Enemy && self.mode.has_ai()
    }

    /// Overwrite a tank component (for tests and scripted scenarios).
    #[cfg(test)]
    pub fn set_tank(&mut self, side: Side, tank: Tank) {
        let entity = self.tank_entity(side);
        let _ = self.world.insert_one(entity, tank);
    }

    /// Put a shell in flight directly (for tests).
    #[cfg(test)]
    pub fn set_projectile(&mut self, projectile: Option<Projectile>) {
        self.projectile = projectile;
    }

    /// Replace the terrain (for tests needing a known surface).
    #[cfg(test)]
    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
        systems::movement::reseat_all(&mut self.world, &self.terrain);
    }

    /// Move a tank to `x` on the current surface (for tests).
    #[cfg(test)]
    pub fn place_tank(&mut self, side: Side, x: f32) {
        let entity = self.tank_entity(side);
        systems::movement::place(
            &mut self.world,
            &self.terrain,
            entity,
            x,
            self.tuning.screen_width,
        );
    }

    /// Remove obstacles, power-ups and debris (for tests).
    #[cfg(test)]
    pub fn clear_battlefield(&mut self) {
        world_setup::clear_level(&mut self.world, &mut self.despawn_buffer);
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
    }

    #[cfg(test)]
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    fn hud(&self) -> HudView {
        HudView {
            level: self.level,
            wind: self.wind,
            turn: self.turn,
            mode: self.mode,
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Discrete input: fire, barrel, weapon.
        self.process_events();
        // 2. Movement: held keys for the human on turn, repositioning for the AI.
        self.run_movement(dt);
        // 3. AI aiming and firing.
        self.run_enemy_ai(dt);
        // 4-5. Ballistics, then collision resolution.
        self.run_projectile(dt);
        // 6. Particles.
        systems::particles::run(
            &mut self.world,
            self.tuning.effective_gravity(),
            dt,
            &mut self.despawn_buffer,
        );
        // 7. Power-up spawn and pickup.
        let pickups = systems::powerups::run(
            &mut self.world,
            &mut self.rng,
            &self.terrain,
            &mut self.powerup_clock,
            &self.tuning,
            [self.player, self.enemy],
            dt,
            &mut self.despawn_buffer,
        );
        for pickup in pickups {
            debug!(side = ?pickup.side, kind = ?pickup.kind, "power-up collected");
        }
        // 8. Level-up / game-over.
        self.check_outcome();
        // 9. Wind drift.
        let limit = self.tuning.wind_limit(self.level);
        systems::wind::run(&mut self.wind, &mut self.rng, dt, limit);
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            self.handle_event(event);
        }
    }

    /// Apply one discrete event. Only the human side whose turn it is may act.
    fn handle_event(&mut self, event: InputEvent) {
        let Some(side) = event.side() else {
            return;
        };
        if side != self.turn || self.is_ai(side) {
            return;
        }

        match event {
            InputEvent::Fire(_) => self.try_fire(side),
            InputEvent::AngleUp(_) | InputEvent::AngleDown(_) => {
                let direction = if matches!(event, InputEvent::AngleUp(_)) { 1.0 } else { -1.0 };
                if let Ok(mut tank) = self.world.get::<&mut Tank>(self.tank_entity(side)) {
                    systems::movement::adjust_angle(&mut tank, direction);
                }
            }
            InputEvent::CycleWeapon(_) => {
                if let Ok(mut tank) = self.world.get::<&mut Tank>(self.tank_entity(side)) {
                    tank.weapon = tank.weapon.next();
                }
            }
            InputEvent::SkipIntro | InputEvent::Quit => {}
        }
    }

    /// Launch a shell from `side` if the slot is free. Refused while a shell is in flight.
    fn try_fire(&mut self, side: Side) {
        if self.projectile.is_some() {
            return;
        }
        let entity = self.tank_entity(side);
        let target = self.tank_entity(side.opponent());
        let Ok(mut query) = self.world.query_one::<(&Tank, &Position)>(entity) else {
            return;
        };
        let Some((tank, pos)) = query.get() else {
            return;
        };

        let projectile = Projectile::launch(
            &mut self.rng,
            pos.0,
            tank.world_angle(),
            tank.power,
            tank.weapon,
            side,
            Some(target),
        );
        debug!(
            ?side,
            weapon = ?tank.weapon,
            angle = tank.world_angle(),
            power = tank.power,
            "shot fired"
        );
        self.audio_events.push(AudioEvent::ShotFired {
            side,
            weapon: tank.weapon,
        });
        drop(query);
        self.projectile = Some(projectile);
    }

    fn run_movement(&mut self, dt: f32) {
        let side = self.turn;
        if self.is_ai(side) {
            let Some(ctx) = self.enemy_context(dt) else {
                return;
            };
            let x = brain::reposition(&ctx);
            systems::movement::place(
                &mut self.world,
                &self.terrain,
                self.enemy,
                x,
                self.tuning.screen_width,
            );
        } else {
            let entity = self.tank_entity(side);
            let held = match side {
                Side::Player => self.held_player,
                Side::Enemy => self.held_enemy,
            };
            systems::movement::apply_held(
                &mut self.world,
                &self.terrain,
                entity,
                held,
                &self.tuning,
                dt,
            );
        }
    }

    /// Enemy aiming: one barrel step per tick toward the solution, fire once
    /// settled, and occasionally swap shells.
    fn run_enemy_ai(&mut self, dt: f32) {
        if !self.is_ai(self.turn) || self.projectile.is_some() {
            return;
        }
        let Some(ctx) = self.enemy_context(dt) else {
            return;
        };

        let (world_angle, fire) = match brain::plan_shot(&ctx) {
            AimAction::Adjust { world_angle } => (world_angle, false),
            AimAction::Fire { world_angle } => (world_angle, true),
        };
        if let Ok(mut tank) = self.world.get::<&mut Tank>(self.enemy) {
            let (facing, elevation) = Facing::from_world_angle(world_angle);
            tank.facing = facing;
            tank.angle = elevation;
        }
        if fire {
            self.try_fire(Side::Enemy);
        }

        if let Some(weapon) = brain::roll_weapon_swap(&mut self.rng) {
            if let Ok(mut tank) = self.world.get::<&mut Tank>(self.enemy) {
                tank.weapon = weapon;
            }
        }
    }

    fn enemy_context(&self, dt: f32) -> Option<EnemyContext> {
        let enemy = self.tank(Side::Enemy)?;
        Some(EnemyContext {
            enemy_position: self.tank_position(Side::Enemy)?,
            player_position: self.tank_position(Side::Player)?,
            enemy_health: enemy.health,
            world_angle: enemy.world_angle(),
            power: enemy.power,
            gravity: self.tuning.gravity,
            dt,
            screen_width: self.tuning.screen_width,
        })
    }

    /// Integrate the shell, resolve what it hit, and hand the turn over
    /// when it is spent.
    fn run_projectile(&mut self, dt: f32) {
        let Some(projectile) = self.projectile.as_mut() else {
            return;
        };

        let status =
            systems::ballistics::run(&self.world, projectile, &self.tuning, self.wind, dt);
        let spent = if status.is_active() {
            let impact = systems::combat::run(
                &mut self.world,
                &mut self.terrain,
                &mut self.rng,
                projectile,
                [self.player, self.enemy],
                self.tuning.explosion_radius,
                &mut self.audio_events,
            );
            if let Some(report) = impact {
                debug!(kind = ?report.kind, victim = ?report.victim, damage = report.damage, "impact");
                self.impacts.push(report);
                systems::movement::reseat_all(&mut self.world, &self.terrain);
                true
            } else {
                false
            }
        } else {
            debug!(?status, "shell lost");
            true
        };

        if spent {
            self.projectile = None;
            self.turn = self.turn.opponent();
        }
    }

    fn check_outcome(&mut self) {
        let player_health = self.tank(Side::Player).map_or(0, |t| t.health);
        let enemy_health = self.tank(Side::Enemy).map_or(0, |t| t.health);

        if self.mode.has_levels() {
            if enemy_health <= 0 {
                self.level_up();
            } else if player_health <= 0 {
                self.game_over(Side::Enemy);
            }
        } else if enemy_health <= 0 {
            self.game_over(Side::Player);
        } else if player_health <= 0 {
            self.game_over(Side::Enemy);
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        let health = level::enemy_health(self.level);
        if let Ok(mut tank) = self.world.get::<&mut Tank>(self.enemy) {
            tank.health = health;
        }
        let home = world_setup::home_x(Side::Enemy, &self.tuning);
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.enemy) {
            pos.0.x = home;
        }
        self.start_level();
        self.turn = Side::Player;
        self.phase = MatchPhase::LevelIntro {
            remaining_secs: self.tuning.level_intro_secs,
        };
        info!(level = self.level, enemy_health = health, "level up");
    }

    fn game_over(&mut self, winner: Side) {
        info!(level = self.level, ?winner, "game over");
        self.level = 1;
        for side in [Side::Player, Side::Enemy] {
            let entity = self.tank_entity(side);
            if let Ok(mut tank) = self.world.get::<&mut Tank>(entity) {
                tank.health = Tank::new(side).health;
            }
            let home = world_setup::home_x(side, &self.tuning);
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                pos.0.x = home;
            }
        }
        self.start_level();
        self.turn = Side::Player;
        self.phase = MatchPhase::GameOver {
            remaining_secs: self.tuning.game_over_secs,
            winner,
        };
    }

    /// Rebuild the battlefield for the current level: new terrain, wind and
    /// obstacles; no shell, debris or power-ups; tanks re-seated.
    fn start_level(&mut self) {
        self.terrain = artillery_terrain::generate(&mut self.rng, &self.tuning);
        self.wind = systems::wind::resample(&mut self.rng, self.tuning.wind_limit(self.level));
        self.projectile = None;
        self.powerup_clock.elapsed = 0.0;
        world_setup::clear_level(&mut self.world, &mut self.despawn_buffer);
        world_setup::spawn_obstacles(
            &mut self.world,
            &mut self.rng,
            &self.terrain,
            level::obstacle_count(self.level),
            &self.tuning,
        );
        systems::movement::reseat_all(&mut self.world, &self.terrain);
        debug!(level = self.level, wind = self.wind, "level laid out");
    }
}
