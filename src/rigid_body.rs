//! Kinematic state shared by asteroids, projectiles and the ship.
//!
//! Motion is constant-velocity: [`Physics`] is fixed when an entity spawns and
//! [`Physics::integrate`] advances a [`Transform2D`] by it each unpaused tick.

use bevy::math::Vec2;
use rand::Rng;

/// Position (px) and rotation (degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform2D {
    pub position: Vec2,
    pub rotation: f32,
}

impl Transform2D {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }
}

/// Linear velocity (px/s) and spin (deg/s).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Physics {
    pub velocity: Vec2,
    pub rotation_speed: f32,
}

impl Physics {
    pub fn integrate(&self, transform: &mut Transform2D, dt: f32) {
        transform.position += self.velocity * dt;
        transform.rotation += self.rotation_speed * dt;
    }
}

/// Frame timing as seen by entity updates.
///
/// While `paused` motion and timers hold still but bounds checks still run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub dt: f32,
    pub paused: bool,
}

impl Tick {
    pub fn running(dt: f32) -> Self {
        Self { dt, paused: false }
    }

    pub fn paused(dt: f32) -> Self {
        Self { dt, paused: true }
    }

    /// Time that dt-scaled effects should consume this frame.
    #[inline]
    pub fn effective_dt(&self) -> f32 {
        if self.paused {
            0.0
        } else {
            self.dt
        }
    }
}

/// Multiplicative asteroid scale applied to radius and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    /// 1, 2 or 4.
    pub fn multiplier(self) -> i32 {
        match self {
            SizeTier::Small => 1,
            SizeTier::Medium => 2,
            SizeTier::Large => 4,
        }
    }

    /// Uniform over the three tiers.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_moves_and_spins() {
        let physics = Physics {
            velocity: Vec2::new(100.0, -50.0),
            rotation_speed: 90.0,
        };
        let mut transform = Transform2D::at(Vec2::new(10.0, 10.0));
        physics.integrate(&mut transform, 0.5);
        assert_eq!(transform.position, Vec2::new(60.0, -15.0));
        assert_eq!(transform.rotation, 45.0);
    }

    #[test]
    fn paused_tick_has_no_effective_time() {
        assert_eq!(Tick::paused(0.016).effective_dt(), 0.0);
        assert_eq!(Tick::running(0.016).effective_dt(), 0.016);
    }

    #[test]
    fn tier_multipliers_are_powers_of_two() {
        let m: Vec<i32> = SizeTier::ALL.iter().map(|t| t.multiplier()).collect();
        assert_eq!(m, vec![1, 2, 4]);
    }
}
