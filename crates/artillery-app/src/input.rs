//! Input sources feeding the game loop.
//!
//! A source sees the latest snapshot and returns the input for the next
//! tick. `AutoPilot` plays a side with the same ballistic solver the enemy
//! AI uses; `Scripted` replays a fixed list of frames.

use std::collections::VecDeque;

use artillery_ai::compute_launch_angle;
use artillery_core::commands::{HeldKeys, InputEvent, TickInput};
use artillery_core::constants::{ANGLE_STEP, POWER_RATE};
use artillery_core::enums::{Facing, MatchPhase, Side};
use artillery_core::state::StateSnapshot;

/// Anything that can produce one frame of input.
pub trait InputSource {
    fn poll(&mut self, snapshot: &StateSnapshot, dt: f32) -> TickInput;
}

/// Drives one or both tanks toward a ballistic solution, then fires.
#[derive(Debug, Clone)]
pub struct AutoPilot {
    sides: Vec<Side>,
    gravity: f32,
    /// Power the pilot dials in before aiming.
    power: f32,
}

impl AutoPilot {
    pub fn new(sides: impl IntoIterator<Item = Side>, gravity: f32, power: f32) -> Self {
        Self {
            sides: sides.into_iter().collect(),
            gravity,
            power,
        }
    }

    fn controls(&self, side: Side) -> bool {
        self.sides.contains(&side)
    }
}

impl InputSource for AutoPilot {
    fn poll(&mut self, snapshot: &StateSnapshot, dt: f32) -> TickInput {
        let mut input = TickInput::default();

        match snapshot.phase {
            MatchPhase::LevelIntro { .. } => {
                input.events.push(InputEvent::SkipIntro);
                return input;
            }
            MatchPhase::GameOver { .. } => return input,
            MatchPhase::Active => {}
        }

        let side = snapshot.hud.turn;
        if !self.controls(side) || snapshot.projectile.is_some() {
            return input;
        }
        let (Some(me), Some(them)) = (snapshot.tank(side), snapshot.tank(side.opponent())) else {
            return input;
        };

        // Dial power first; one tick's worth of change is close enough.
        let tolerance = POWER_RATE * dt;
        if (me.power - self.power).abs() > tolerance {
            let held = HeldKeys {
                power_up: me.power < self.power,
                power_down: me.power > self.power,
                ..Default::default()
            };
            match side {
                Side::Player => input.player = held,
                Side::Enemy => input.enemy = held,
            }
            return input;
        }

        let world_angle =
            compute_launch_angle(me.position, them.position, me.power, self.gravity).clamp(0.0, 180.0);
        let (facing, elevation) = Facing::from_world_angle(world_angle);
        // The barrel only elevates; a solution behind the tank is taken as a
        // straight lob from the current setting.
        let elevation = if facing == me.facing { elevation } else { me.angle };

        let event = if (me.angle - elevation).abs() >= ANGLE_STEP {
            if me.angle < elevation {
                InputEvent::AngleUp(side)
            } else {
                InputEvent::AngleDown(side)
            }
        } else {
            InputEvent::Fire(side)
        };
        input.events.push(event);
        input
    }
}

/// Replays prepared frames, then asks to quit.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    frames: VecDeque<TickInput>,
}

impl Scripted {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _snapshot: &StateSnapshot, _dt: f32) -> TickInput {
        self.frames.pop_front().unwrap_or_else(|| TickInput {
            events: vec![InputEvent::Quit],
            ..Default::default()
        })
    }
}
