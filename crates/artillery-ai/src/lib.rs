//! Enemy tank AI for the artillery duel.
//!
//! Pure functions over plain data with no ECS dependency: a closed-form
//! launch-angle solver and the heuristic that walks the barrel toward it,
//! repositions the tank and occasionally swaps shells.

pub mod aim;
pub mod brain;


pub use aim::compute_launch_angle;
pub use brain::{plan_shot, reposition, roll_weapon_swap, step_toward, AimAction, EnemyContext};
