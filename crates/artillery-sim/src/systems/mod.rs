//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` when
//! read-only) plus whatever engine-owned state they need passed in.

pub mod ballistics;
pub mod combat;
pub mod movement;
pub mod particles;
pub mod powerups;
pub mod snapshot;
pub mod wind;
