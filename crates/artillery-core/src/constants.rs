//! Simulation constants and tuning defaults.
//!
//! Screen space is in pixels with the origin top-left and y growing
//! downward, so "deeper" terrain means a larger y.

/// Target tick rate of the real-time driver (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Largest frame interval fed to a single tick (seconds).
pub const MAX_FRAME_DT: f32 = 0.1;

// --- World bounds ---

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// --- Terrain ---

/// Horizontal distance between terrain samples.
pub const TERRAIN_SPACING: f32 = 10.0;

/// Starting height of the random walk, measured up from the bottom edge.
pub const TERRAIN_START_OFFSET: f32 = 50.0;

/// Highest the surface may rise, measured up from the bottom edge.
pub const TERRAIN_CEILING_OFFSET: f32 = 150.0;

/// Lowest the surface may sink, measured up from the bottom edge.
pub const TERRAIN_FLOOR_OFFSET: f32 = 30.0;

/// Largest per-sample step of the random walk.
pub const TERRAIN_MAX_STEP: i32 = 5;

/// Relative weights of Normal / Mud / Rock material.
pub const TERRAIN_MATERIAL_WEIGHTS: [u32; 3] = [70, 20, 10];

// --- Physics ---

/// Gravity before the x10 scale applied in every integrator.
pub const GRAVITY: f32 = 9.8;

/// Multiplier applied to gravity by projectiles, particles and the aimer.
pub const GRAVITY_SCALE: f32 = 10.0;

pub const DRAG_COEFF: f32 = 0.05;
pub const MAGNUS_COEFF: f32 = 5.0;

/// Rate at which guided shells steer toward their target.
pub const HOMING_ACCEL: f32 = 30.0;

/// Hit-detection distance and terrain carving radius.
pub const EXPLOSION_RADIUS: f32 = 30.0;

/// Distance from tank centre to the muzzle.
pub const BARREL_LENGTH: f32 = 30.0;

// --- Tanks ---

pub const TANK_HEIGHT: f32 = 20.0;
pub const TANK_BASE_SPEED: f32 = 2.0;
pub const TANK_DEFAULT_ANGLE: f32 = 45.0;
pub const TANK_DEFAULT_POWER: f32 = 50.0;
pub const TANK_START_HEALTH: i32 = 100;

/// Distance of each tank's starting position from its screen edge.
pub const TANK_EDGE_INSET: f32 = 100.0;

pub const POWER_MIN: f32 = 10.0;
pub const POWER_MAX: f32 = 200.0;

/// Power change per second while a power key is held.
pub const POWER_RATE: f32 = 50.0;

pub const ANGLE_MIN: f32 = 0.0;
pub const ANGLE_MAX: f32 = 90.0;

/// Degrees per angle-adjust event (and per enemy aiming tick).
pub const ANGLE_STEP: f32 = 1.0;

// --- Materials ---

pub const MUD_SPEED_FACTOR: f32 = 0.5;
pub const ROCK_SPEED_FACTOR: f32 = 0.8;

// --- Combat ---

pub const NORMAL_DAMAGE: i32 = 20;
pub const GRENADE_DAMAGE: i32 = 30;
pub const NORMAL_BURST: usize = 30;
pub const GRENADE_BURST: usize = 10;
pub const GROUND_BURST: usize = 30;

// --- Particles ---

pub const PARTICLE_MIN_RADIUS: u8 = 2;
pub const PARTICLE_MAX_RADIUS: u8 = 4;
pub const PARTICLE_MAX_SPEED: f32 = 5.0;
pub const PARTICLE_MIN_LIFE: f32 = 0.5;
pub const PARTICLE_MAX_LIFE: f32 = 1.0;

/// Particle velocities are expressed per 1/60 s frame.
pub const PARTICLE_TIME_SCALE: f32 = 60.0;

// --- Power-ups ---

/// Seconds between power-up spawns.
pub const POWERUP_INTERVAL_SECS: f32 = 5.0;

/// Horizontal margin kept free of power-up spawns on each side.
pub const POWERUP_EDGE_MARGIN: i32 = 50;

/// Height above ground at which power-ups float.
pub const POWERUP_HOVER: f32 = 15.0;

pub const POWERUP_PICKUP_RADIUS: f32 = 20.0;
pub const HEALTH_BONUS: i32 = 20;
pub const HEALTH_CAP: i32 = 100;
pub const ARMOR_BONUS: i32 = 20;
pub const ARMOR_CAP: i32 = 150;
pub const FORCE_BONUS: f32 = 10.0;
pub const SPEED_BONUS: f32 = 0.5;

// --- Obstacles ---

pub const OBSTACLE_BASE_COUNT: u32 = 3;
pub const OBSTACLE_MAX_COUNT: u32 = 8;
pub const OBSTACLE_MIN_SIZE: i32 = 40;
pub const OBSTACLE_MAX_SIZE: i32 = 80;

/// Obstacles keep this far from both screen edges.
pub const OBSTACLE_EDGE_MARGIN: i32 = 100;

// --- Enemy AI ---

/// Enemy repositioning speed (pixels per second).
pub const ENEMY_MOVE_SPEED: f32 = 50.0;

/// Health at or above which the enemy closes distance instead of retreating.
pub const ENEMY_BRAVE_HEALTH: i32 = 70;

/// Gap the enemy keeps from the player when closing in.
pub const ENEMY_STANDOFF: f32 = 20.0;

/// Per-tick probability of the enemy switching weapon while aiming.
pub const ENEMY_WEAPON_SWAP_CHANCE: f64 = 0.005;

/// Tolerance (degrees) at which the enemy stops adjusting and fires.
pub const ENEMY_AIM_TOLERANCE: f32 = 1.0;

// --- Wind ---

/// Wind bound grows by this much per level.
pub const WIND_PER_LEVEL: f32 = 5.0;

/// Largest per-second wind drift.
pub const WIND_DRIFT: f32 = 0.5;

// --- Level flow ---

pub const LEVEL_INTRO_SECS: f32 = 3.0;
pub const GAME_OVER_SECS: f32 = 3.0;

/// Enemy health gained per level on level-up.
pub const ENEMY_HEALTH_PER_LEVEL: i32 = 10;
