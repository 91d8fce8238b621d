//! Small geometry and randomness helpers shared by every entity.
//!
//! Positions are screen pixels with the origin at the top-left corner and y
//! growing downward; [`crate::graphics`] converts to Bevy world space only at
//! presentation time.

use bevy::math::Vec2;
use rand::Rng;

/// Uniform float in `[min, max]`.
#[inline]
pub fn random_float(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Uniform integer in `[min, max]`, both ends inclusive.
#[inline]
pub fn random_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}

/// Step sign used to orient laser bars: `0` for negative input, `1` otherwise.
#[inline]
pub fn sgn(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Circle-circle overlap test with a strict comparison.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Vertices of a regular polygon whose first vertex sits at `rotation_deg`,
/// measured clockwise on screen from the +x axis.
pub fn regular_polygon(center: Vec2, sides: u32, radius: f32, rotation_deg: f32) -> Vec<Vec2> {
    let step = 360.0 / sides as f32;
    (0..sides)
        .map(|i| {
            let angle = (rotation_deg + step * i as f32).to_radians();
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Axis-aligned play field `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Edges count as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_dilated(p, 0.0)
    }

    /// Inside the field grown by `margin` on every side.
    pub fn contains_dilated(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_float_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let v = random_float(&mut rng, 125.0, 250.0);
            assert!((125.0..=250.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn random_int_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(2);
        let draws: Vec<i32> = (0..500).map(|_| random_int(&mut rng, 0, 2)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&2));
        assert!(draws.iter().all(|v| (0..=2).contains(v)));
    }

    #[test]
    fn sgn_maps_negative_to_zero() {
        assert_eq!(sgn(-3.0), 0.0);
        assert_eq!(sgn(0.0), 1.0);
        assert_eq!(sgn(7.5), 1.0);
    }

    #[test]
    fn overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn square_vertices_lie_on_radius() {
        let verts = regular_polygon(Vec2::new(50.0, 50.0), 4, 10.0, 0.0);
        assert_eq!(verts.len(), 4);
        assert!((verts[0] - Vec2::new(60.0, 50.0)).length() < 1e-4);
        assert!((verts[1] - Vec2::new(50.0, 60.0)).length() < 1e-4);
        for v in &verts {
            assert!(((*v - Vec2::new(50.0, 50.0)).length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn dilated_bounds_include_margin() {
        let field = PlayField::new(100.0, 100.0);
        assert!(field.contains(Vec2::new(0.0, 100.0)));
        assert!(!field.contains(Vec2::new(-0.1, 50.0)));
        assert!(field.contains_dilated(Vec2::new(-16.0, 50.0), 16.0));
        assert!(!field.contains_dilated(Vec2::new(-16.1, 50.0), 16.0));
    }
}
