//! Terrain: sampled surface with height and material queries.

use glam::Vec2;

use artillery_core::enums::Material;
use artillery_core::types::TerrainPoint;

/// Ordered terrain samples with fixed horizontal spacing.
///
/// `min_height` and `max_height` are screen-space y bounds: `min_height` is
/// the highest the surface may stand, `max_height` the floor explosions
/// cannot dig past.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    points: Vec<TerrainPoint>,
    spacing: f32,
    min_height: f32,
    max_height: f32,
}

impl Terrain {
    /// Build from pre-made samples. `points` must be sorted by x and
    /// `spacing` apart.
    pub fn from_points(
        points: Vec<TerrainPoint>,
        spacing: f32,
        min_height: f32,
        max_height: f32,
    ) -> Self {
        Self {
            points,
            spacing,
            min_height,
            max_height,
        }
    }

    /// Level ground of a single material, spanning `[0, width]`.
    pub fn flat(width: f32, spacing: f32, y: f32, min_height: f32, max_height: f32) -> Self {
        let count = (width / spacing).floor() as usize + 1;
        let points = (0..count)
            .map(|i| TerrainPoint {
                x: i as f32 * spacing,
                y,
                material: Material::Normal,
            })
            .collect();
        Self::from_points(points, spacing, min_height, max_height)
    }

    pub fn points(&self) -> &[TerrainPoint] {
        &self.points
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// x of the last sample.
    pub fn width(&self) -> f32 {
        self.points.last().map_or(0.0, |p| p.x)
    }

    /// Surface y at `x`, linearly interpolated between the bracketing
    /// samples. Outside the sampled range the edge sample's y is returned.
    pub fn height_at(&self, x: f32) -> f32 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return self.max_height;
        };
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }

        let idx = (((x - first.x) / self.spacing) as usize).min(self.points.len() - 2);
        let a = self.points[idx];
        let b = self.points[idx + 1];
        let t = (x - a.x) / (b.x - a.x);
        a.y + t * (b.y - a.y)
    }

    /// Material of the sample whose segment contains `x`. No interpolation.
    pub fn material_at(&self, x: f32) -> Material {
        // Negative x saturates to index 0.
        let idx = (x / self.spacing) as usize;
        self.points
            .get(idx.min(self.points.len().saturating_sub(1)))
            .map_or(Material::Normal, |p| p.material)
    }

    /// Carve a crater: every sample closer than `radius` to `center` sinks
    /// by `(radius - dist) / 2`, never past `max_height`.
    ///
    /// Returns the number of samples touched.
    pub fn deform(&mut self, center: Vec2, radius: f32) -> usize {
        let mut touched = 0;
        for point in &mut self.points {
            let dist = Vec2::new(point.x, point.y).distance(center);
            if dist < radius {
                point.y = (point.y + (radius - dist) / 2.0).min(self.max_height);
                touched += 1;
            }
        }
        touched
    }
}
