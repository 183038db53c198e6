//! Ballistic launch-angle solver.

use glam::Vec2;

use artillery_core::constants::GRAVITY_SCALE;

/// Fallback when the shooter sits directly above or below the target.
const VERTICAL_FALLBACK: f32 = 45.0;

/// World firing angle (degrees CCW from +x) that lands a drag-free shell
/// launched at `power` from `shooter` on `target`.
///
/// `gravity` is the unscaled constant; the solver applies the same x10
/// scale as the integrators. Of the two analytic roots the flatter one is
/// returned. Out-of-reach targets get a 45° lob toward the target side.
pub fn compute_launch_angle(shooter: Vec2, target: Vec2, power: f32, gravity: f32) -> f32 {
    let dx = f64::from(target.x - shooter.x);
    // Screen y grows downward; positive dy means the target is higher.
    let dy = f64::from(shooter.y - target.y);
    if dx == 0.0 {
        return VERTICAL_FALLBACK;
    }

    let g = f64::from(gravity * GRAVITY_SCALE);
    let p2 = f64::from(power) * f64::from(power);
    let dx_abs = dx.abs();
    let disc = p2 * p2 - g * (g * dx_abs * dx_abs + 2.0 * dy * p2);
    if disc < 0.0 {
        return if dx >= 0.0 { 45.0 } else { 135.0 };
    }

    let root = disc.sqrt();
    let steep = ((p2 + root) / (g * dx_abs)).atan().to_degrees();
    let flat = ((p2 - root) / (g * dx_abs)).atan().to_degrees();
    let angle = steep.min(flat) as f32;

    if dx < 0.0 {
        180.0 - angle
    } else {
        angle
    }
}
