//! Simulation engine for the artillery duel.
//!
//! Owns the hecs ECS world and the terrain, runs systems once per frame in
//! a fixed order, and produces `StateSnapshot`s for the renderer.

pub mod engine;
pub mod level;
pub mod projectile;
pub mod systems;
pub mod world_setup;

pub use artillery_core as core;
pub use engine::{SimConfig, SimulationEngine};
