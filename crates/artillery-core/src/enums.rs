//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Which of the two tanks. Also names whose turn it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Direction a tank's barrel points. Elevation is measured from this side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// World firing angle (degrees, counter-clockwise from +x) for an elevation.
    pub fn world_angle(self, elevation: f32) -> f32 {
        match self {
            Facing::Right => elevation,
            Facing::Left => 180.0 - elevation,
        }
    }

    /// Split a world angle into facing and elevation in `[0, 90]`.
    pub fn from_world_angle(angle: f32) -> (Self, f32) {
        if angle > 90.0 {
            (Facing::Left, (180.0 - angle).clamp(ANGLE_MIN, ANGLE_MAX))
        } else {
            (Facing::Right, angle.clamp(ANGLE_MIN, ANGLE_MAX))
        }
    }
}

/// Shell loaded in a tank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    #[default]
    Normal,
    /// Steers toward the opposing tank while in flight.
    Guided,
    /// Heavier damage, smaller burst.
    Grenade,
}

impl Weapon {
    pub const ALL: [Weapon; 3] = [Weapon::Normal, Weapon::Guided, Weapon::Grenade];

    /// Next weapon in the manual selection cycle.
    pub fn next(self) -> Self {
        match self {
            Weapon::Normal => Weapon::Guided,
            Weapon::Guided => Weapon::Grenade,
            Weapon::Grenade => Weapon::Normal,
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            Weapon::Grenade => GRENADE_DAMAGE,
            Weapon::Normal | Weapon::Guided => NORMAL_DAMAGE,
        }
    }

    /// Particles spawned when this shell hits a tank.
    pub fn burst(self) -> usize {
        match self {
            Weapon::Grenade => GRENADE_BURST,
            Weapon::Normal | Weapon::Guided => NORMAL_BURST,
        }
    }
}

/// Surface material of a terrain sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Normal,
    Mud,
    Rock,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Normal, Material::Mud, Material::Rock];

    /// Multiplier on tank movement speed.
    pub fn speed_factor(self) -> f32 {
        match self {
            Material::Normal => 1.0,
            Material::Mud => MUD_SPEED_FACTOR,
            Material::Rock => ROCK_SPEED_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Force,
    Weapon,
    Armor,
    Speed,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Health,
        PowerUpKind::Force,
        PowerUpKind::Weapon,
        PowerUpKind::Armor,
        PowerUpKind::Speed,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Red,
    Yellow,
    Orange,
}

impl ParticleColor {
    pub const ALL: [ParticleColor; 3] =
        [ParticleColor::Red, ParticleColor::Yellow, ParticleColor::Orange];
}

/// Match rules selected at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human versus the aiming AI, advancing through levels.
    #[default]
    Campaign,
    /// Two humans sharing the input device.
    Multiplayer,
    /// Campaign rules under a separate label.
    Challenge,
}

impl GameMode {
    /// Whether the enemy tank is driven by the AI.
    pub fn has_ai(self) -> bool {
        !matches!(self, GameMode::Multiplayer)
    }

    /// Whether defeating the enemy advances the level.
    pub fn has_levels(self) -> bool {
        matches!(self, GameMode::Campaign | GameMode::Challenge)
    }
}

/// Top-level flow state of the match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum MatchPhase {
    /// Interstitial shown before play; ends on timeout or any input.
    LevelIntro { remaining_secs: f32 },
    Active,
    /// Hold after a defeat. The world has already been reset.
    GameOver {
        remaining_secs: f32,
        winner: Side,
    },
}

impl Default for MatchPhase {
    fn default() -> Self {
        MatchPhase::LevelIntro {
            remaining_secs: LEVEL_INTRO_SECS,
        }
    }
}

/// What an exploding shell struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    Tank,
    Terrain,
}
