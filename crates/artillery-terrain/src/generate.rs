//! Random terrain generation.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use artillery_core::constants::*;
use artillery_core::enums::Material;
use artillery_core::tuning::Tuning;
use artillery_core::types::TerrainPoint;

use crate::heightfield::Terrain;

/// Generate a fresh surface spanning `[0, screen_width]`.
///
/// Heights follow a bounded random walk starting near the bottom of the
/// screen; materials are drawn independently per sample.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Terrain {
    let spacing = tuning.terrain_spacing;
    let ceiling = tuning.terrain_ceiling();
    let floor = tuning.terrain_floor();
    let count = (tuning.screen_width / spacing).floor() as usize + 1;

    let materials = WeightedIndex::new(TERRAIN_MATERIAL_WEIGHTS).ok();

    let mut y = tuning.screen_height - TERRAIN_START_OFFSET;
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        y += rng.gen_range(-TERRAIN_MAX_STEP..=TERRAIN_MAX_STEP) as f32;
        y = y.clamp(ceiling, floor);
        let material = materials
            .as_ref()
            .map_or(Material::Normal, |dist| Material::ALL[dist.sample(rng)]);
        points.push(TerrainPoint {
            x: i as f32 * spacing,
            y,
            material,
        });
    }

    Terrain::from_points(points, spacing, ceiling, floor)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_generate_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let tuning = Tuning::default();
        let terrain = generate(&mut rng, &tuning);

        assert_eq!(terrain.points().len(), 81);
        assert_eq!(terrain.points()[0].x, 0.0);
        assert_eq!(terrain.width(), 800.0);
        for pair in terrain.points().windows(2) {
            assert!(pair[1].x > pair[0].x, "x must be strictly increasing");
            assert!(
                (pair[1].y - pair[0].y).abs() <= TERRAIN_MAX_STEP as f32,
                "walk step too large: {} -> {}",
                pair[0].y,
                pair[1].y
            );
        }
    }

    #[test]
    fn test_generate_material_mix() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let tuning = Tuning {
            screen_width: 10_000.0,
            ..Default::default()
        };
        let terrain = generate(&mut rng, &tuning);
        let total = terrain.points().len() as f32;
        let share = |m: Material| {
            terrain.points().iter().filter(|p| p.material == m).count() as f32 / total
        };
        assert!((share(Material::Normal) - 0.7).abs() < 0.05);
        assert!((share(Material::Mud) - 0.2).abs() < 0.05);
        assert!((share(Material::Rock) - 0.1).abs() < 0.05);
    }

    #[test]
    fn test_generate_seeds_differ() {
        let tuning = Tuning::default();
        let a = generate(&mut ChaCha8Rng::seed_from_u64(1), &tuning);
        let b = generate(&mut ChaCha8Rng::seed_from_u64(2), &tuning);
        assert_ne!(a.points(), b.points());
    }

    proptest! {
        #[test]
        fn prop_generated_heights_within_bounds(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let terrain = generate(&mut ChaCha8Rng::seed_from_u64(seed), &tuning);
            for p in terrain.points() {
                prop_assert!(p.y >= terrain.min_height() && p.y <= terrain.max_height());
            }
        }

        #[test]
        fn prop_height_at_bounded_and_continuous(seed in any::<u64>(), x in -50.0f32..850.0) {
            let tuning = Tuning::default();
            let terrain = generate(&mut ChaCha8Rng::seed_from_u64(seed), &tuning);
            let h = terrain.height_at(x);
            prop_assert!(h >= terrain.min_height() && h <= terrain.max_height());

            // A tiny step in x can only move the surface by slope * step.
            let eps = 0.01;
            let max_slope = TERRAIN_MAX_STEP as f32 / tuning.terrain_spacing;
            let jump = (terrain.height_at(x + eps) - h).abs();
            prop_assert!(jump <= max_slope * eps + 1e-3, "jump {} at x {}", jump, x);
        }

        #[test]
        fn prop_deform_floor_and_locality(
            seed in any::<u64>(),
            cx in 0.0f32..800.0,
            cy in 400.0f32..600.0,
            r in 1.0f32..80.0,
        ) {
            let tuning = Tuning::default();
            let mut terrain = generate(&mut ChaCha8Rng::seed_from_u64(seed), &tuning);
            let before = terrain.points().to_vec();
            terrain.deform(glam::Vec2::new(cx, cy), r);

            for (old, new) in before.iter().zip(terrain.points()) {
                prop_assert!(new.y <= terrain.max_height());
                prop_assert!(new.y >= old.y, "deform must only dig down");
                let dist = glam::Vec2::new(old.x, old.y).distance(glam::Vec2::new(cx, cy));
                if dist >= r {
                    prop_assert_eq!(old.y, new.y);
                }
            }
        }
    }
}
