//! Wind drift and per-level resampling.

use rand::Rng;

use artillery_core::constants::WIND_DRIFT;

/// Random-walk the wind by up to `WIND_DRIFT` per second, staying inside
/// `±limit`.
pub fn run<R: Rng + ?Sized>(wind: &mut f32, rng: &mut R, dt: f32, limit: f32) {
    *wind += rng.gen_range(-WIND_DRIFT..=WIND_DRIFT) * dt;
    *wind = wind.clamp(-limit.abs(), limit.abs());
}

/// Fresh wind uniformly drawn from `[-limit, limit]`.
pub fn resample<R: Rng + ?Sized>(rng: &mut R, limit: f32) -> f32 {
    if limit <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-limit..=limit)
}
