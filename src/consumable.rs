//! Healing pickups dropped by destroyed asteroids.

use crate::constants::CONSUMABLE_SIZE;
use crate::math::random_int;
use crate::rendering::{palette, Canvas};
use bevy::math::{Rect, Vec2};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Consumable {
    position: Vec2,
    value: i32,
    lifetime: f32,
}

/// Uniform integer roll in `[0, 100]`; a kill drops a pickup when it beats
/// the configured threshold.
pub fn drop_roll(rng: &mut impl Rng) -> i32 {
    random_int(rng, 0, 100)
}

impl Consumable {
    /// Value is uniform in `[base - spread, base]`.
    pub fn new(rng: &mut impl Rng, base: i32, position: Vec2, spread: i32) -> Self {
        Self::with_value(random_int(rng, base - spread, base), position)
    }

    pub fn with_value(value: i32, position: Vec2) -> Self {
        Self {
            position,
            value,
            lifetime: 0.0,
        }
    }

    pub fn age(&mut self, dt: f32) {
        self.lifetime += dt;
    }

    /// Strictly older than `limit` seconds.
    pub fn is_expired(&self, limit: f32) -> bool {
        self.lifetime > limit
    }

    /// Pink square centred on the pickup.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let half = Vec2::splat(CONSUMABLE_SIZE * 0.5);
        canvas.fill_rect(
            Rect::from_corners(self.position - half, self.position + half),
            palette::pink(),
        );
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DisplayList, DrawCommand};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn value_stays_within_spread_below_base() {
        let mut rng = StdRng::seed_from_u64(4);
        for base in [5, 20, 80] {
            for _ in 0..200 {
                let c = Consumable::new(&mut rng, base, Vec2::ZERO, 5);
                assert!((base - 5..=base).contains(&c.value()), "{} vs {base}", c.value());
            }
        }
    }

    #[test]
    fn drop_roll_covers_zero_to_a_hundred() {
        let mut rng = StdRng::seed_from_u64(9);
        let rolls: Vec<i32> = (0..5_000).map(|_| drop_roll(&mut rng)).collect();
        assert!(rolls.iter().all(|r| (0..=100).contains(r)));
        assert!(rolls.contains(&0));
        assert!(rolls.contains(&100));
    }

    #[test]
    fn expiry_is_strict() {
        let mut c = Consumable::with_value(10, Vec2::ZERO);
        c.age(2.5);
        c.age(2.5);
        assert!(!c.is_expired(5.0));
        c.age(0.001);
        assert!(c.is_expired(5.0));
    }

    #[test]
    fn draws_pink_square_centred() {
        let c = Consumable::with_value(10, Vec2::new(50.0, 60.0));
        let mut list = DisplayList::default();
        c.draw(&mut list);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Rect {
                rect: Rect::from_corners(Vec2::new(45.0, 55.0), Vec2::new(55.0, 65.0)),
                color: palette::pink(),
            }]
        );
    }
}
