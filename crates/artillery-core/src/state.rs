//! Read-only views handed to the render collaborator each tick.
//!
//! A snapshot owns all of its data so it can outlive the tick that
//! produced it and be serialized as a whole.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, ImpactReport};
use crate::types::{Rect, SimTime, TerrainPoint};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub hud: HudView,
    /// Narrative line while the level intro is showing.
    pub intro: Option<IntroView>,
    pub terrain: Vec<TerrainPoint>,
    pub tanks: Vec<TankView>,
    pub projectile: Option<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub powerups: Vec<PowerUpView>,
    pub obstacles: Vec<Rect>,
    /// Cues raised since the previous snapshot.
    pub audio_events: Vec<AudioEvent>,
    /// Explosions resolved since the previous snapshot.
    pub impacts: Vec<ImpactReport>,
}

impl StateSnapshot {
    pub fn tank(&self, side: Side) -> Option<&TankView> {
        self.tanks.iter().find(|t| t.side == side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub level: u32,
    pub wind: f32,
    pub turn: Side,
    pub mode: GameMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroView {
    pub level: u32,
    pub narrative: String,
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub side: Side,
    pub position: Vec2,
    pub angle: f32,
    pub facing: Facing,
    pub power: f32,
    pub health: i32,
    pub weapon: Weapon,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub weapon: Weapon,
    pub shooter: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub radius: u8,
    pub color: ParticleColor,
    pub life: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Vec2,
    pub kind: PowerUpKind,
}
