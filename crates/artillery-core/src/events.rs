//! Events emitted by the simulation for audio and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fire-and-forget audio cues. The engine never waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    ShotFired { side: Side, weapon: Weapon },
    Explosion { position: Vec2 },
}

/// Outcome of one exploding shell, reported back to the level controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub kind: ImpactKind,
    pub position: Vec2,
    /// Tank that took the hit, for `ImpactKind::Tank`.
    pub victim: Option<Side>,
    pub damage: i32,
    pub particles_spawned: usize,
}
