//! Destructible terrain for the artillery duel.
//!
//! A heightfield of evenly spaced samples, each tagged with a surface
//! material. Explosions push samples downward; nothing ever raises them.

pub use artillery_core as core;

pub mod generate;
pub mod heightfield;

pub use generate::generate;
pub use heightfield::Terrain;
