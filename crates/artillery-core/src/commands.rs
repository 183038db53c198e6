//! Pre-decoded input signals fed to the engine once per tick.
//!
//! The engine is agnostic of the input device: a collaborator maps keys
//! (or a script, or an autopilot) onto these values.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// Discrete, edge-triggered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Launch a shell from this side's tank.
    Fire(Side),
    /// Raise the barrel one step.
    AngleUp(Side),
    /// Lower the barrel one step.
    AngleDown(Side),
    CycleWeapon(Side),
    /// Dismiss the level intro. Any other event dismisses it too.
    SkipIntro,
    /// Stop the driver loop. The engine ignores it.
    Quit,
}

impl InputEvent {
    /// Side this event acts for, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            InputEvent::Fire(side)
            | InputEvent::AngleUp(side)
            | InputEvent::AngleDown(side)
            | InputEvent::CycleWeapon(side) => Some(*side),
            InputEvent::SkipIntro | InputEvent::Quit => None,
        }
    }
}

/// Continuous key state for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub move_left: bool,
    pub move_right: bool,
    pub power_up: bool,
    pub power_down: bool,
}

/// Everything the input collaborator reports for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
    pub player: HeldKeys,
    pub enemy: HeldKeys,
}

impl TickInput {
    pub fn held(&self, side: Side) -> HeldKeys {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}
