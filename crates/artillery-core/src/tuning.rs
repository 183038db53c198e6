//! Runtime tuning loaded from TOML.
//!
//! Every field defaults to the matching value in `constants`, so a tuning
//! file only needs the keys it overrides:
//!
//! ```toml
//! gravity = 4.9
//! drag_coeff = 0.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Physics and pacing knobs the engine reads every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub terrain_spacing: f32,
    pub gravity: f32,
    pub drag_coeff: f32,
    pub magnus_coeff: f32,
    pub homing_accel: f32,
    pub explosion_radius: f32,
    pub power_min: f32,
    pub power_max: f32,
    pub powerup_interval_secs: f32,
    pub wind_per_level: f32,
    pub level_intro_secs: f32,
    pub game_over_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            terrain_spacing: TERRAIN_SPACING,
            gravity: GRAVITY,
            drag_coeff: DRAG_COEFF,
            magnus_coeff: MAGNUS_COEFF,
            homing_accel: HOMING_ACCEL,
            explosion_radius: EXPLOSION_RADIUS,
            power_min: POWER_MIN,
            power_max: POWER_MAX,
            powerup_interval_secs: POWERUP_INTERVAL_SECS,
            wind_per_level: WIND_PER_LEVEL,
            level_intro_secs: LEVEL_INTRO_SECS,
            game_over_secs: GAME_OVER_SECS,
        }
    }
}

impl Tuning {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = toml::from_str(source)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(TuningError::Invalid("screen size must be positive"));
        }
        if self.terrain_spacing <= 0.0 || self.terrain_spacing > self.screen_width {
            return Err(TuningError::Invalid(
                "terrain_spacing must be in (0, screen_width]",
            ));
        }
        // Obstacles need room between their edge margins.
        if self.screen_width < (2 * OBSTACLE_EDGE_MARGIN + OBSTACLE_MAX_SIZE) as f32 {
            return Err(TuningError::Invalid("screen_width too small for obstacles"));
        }
        if self.power_min <= 0.0 || self.power_min > self.power_max {
            return Err(TuningError::Invalid("power range must satisfy 0 < min <= max"));
        }
        if self.explosion_radius <= 0.0 {
            return Err(TuningError::Invalid("explosion_radius must be positive"));
        }
        if self.gravity <= 0.0 {
            return Err(TuningError::Invalid("gravity must be positive"));
        }
        if self.drag_coeff < 0.0 || self.homing_accel < 0.0 || self.magnus_coeff < 0.0 {
            return Err(TuningError::Invalid("force coefficients must not be negative"));
        }
        if self.powerup_interval_secs <= 0.0 {
            return Err(TuningError::Invalid("powerup_interval_secs must be positive"));
        }
        if self.wind_per_level < 0.0 || self.level_intro_secs < 0.0 || self.game_over_secs < 0.0 {
            return Err(TuningError::Invalid("durations and wind bound must not be negative"));
        }
        Ok(())
    }

    /// Scaled gravity used by every integrator and the angle solver.
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * GRAVITY_SCALE
    }

    /// Deepest y the terrain may be pushed to.
    pub fn terrain_floor(&self) -> f32 {
        self.screen_height - TERRAIN_FLOOR_OFFSET
    }

    /// Highest y the generated terrain may reach.
    pub fn terrain_ceiling(&self) -> f32 {
        self.screen_height - TERRAIN_CEILING_OFFSET
    }

    /// Wind magnitude bound for a level.
    pub fn wind_limit(&self, level: u32) -> f32 {
        self.wind_per_level * level as f32
    }
}

/// Tuning load errors.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}
