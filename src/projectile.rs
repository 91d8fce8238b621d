//! Straight-line projectiles fired by the ship or by shooting asteroids.
//!
//! A projectile does not know who fired it: ownership is expressed by which
//! collection of [`crate::simulation::GameWorld`] holds it
//! (`projectiles` for the player, `enemy_projectiles` for asteroids).

use crate::constants::{
    BULLET_DAMAGE, BULLET_RADIUS, LASER_DAMAGE, LASER_LENGTH, LASER_RADIUS, LASER_THICKNESS,
};
use crate::math::{sgn, PlayField};
use crate::rendering::{palette, Canvas};
use crate::rigid_body::{Physics, Tick, Transform2D};
use bevy::math::{Rect, Vec2};
use rand::Rng;

/// Weapon family.  Decides projectile look, collision radius and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeaponType {
    #[default]
    Laser,
    Bullet,
}

impl WeaponType {
    pub const ALL: [WeaponType; 2] = [WeaponType::Laser, WeaponType::Bullet];

    /// The weapon after this one in the Tab cycle.
    pub fn next(self) -> Self {
        match self {
            WeaponType::Laser => WeaponType::Bullet,
            WeaponType::Bullet => WeaponType::Laser,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeaponType::Laser => "LASER",
            WeaponType::Bullet => "BULLET",
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            WeaponType::Laser => LASER_DAMAGE,
            WeaponType::Bullet => BULLET_DAMAGE,
        }
    }

    pub fn collision_radius(self) -> f32 {
        match self {
            WeaponType::Laser => LASER_RADIUS,
            WeaponType::Bullet => BULLET_RADIUS,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    transform: Transform2D,
    physics: Physics,
    damage: i32,
    weapon: WeaponType,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2, damage: i32, weapon: WeaponType) -> Self {
        Self {
            transform: Transform2D::at(position),
            physics: Physics {
                velocity,
                rotation_speed: 0.0,
            },
            damage,
            weapon,
        }
    }

    /// Build a projectile with the weapon's fixed damage.
    ///
    /// `speed_y` is measured up the screen, so the stored velocity is
    /// `(speed_x, -speed_y)`.
    pub fn fire(weapon: WeaponType, position: Vec2, speed_x: f32, speed_y: f32) -> Self {
        Self::new(
            position,
            Vec2::new(speed_x, -speed_y),
            weapon.damage(),
            weapon,
        )
    }

    /// Advance unless paused.  Returns `true` once the projectile has left
    /// the field and should be dropped.
    pub fn update(&mut self, tick: Tick, field: &PlayField) -> bool {
        self.physics
            .integrate(&mut self.transform, tick.effective_dt());
        !field.contains(self.transform.position)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let p = self.transform.position;
        match self.weapon {
            WeaponType::Bullet => canvas.fill_circle(p, BULLET_RADIUS, palette::white()),
            WeaponType::Laser => {
                let v = self.physics.velocity;
                let xs = sgn(v.x);
                let ys = sgn(v.y);
                // Only the sign of the dominant axis orients the bar.
                let (min, size) = if v.x != 0.0 {
                    (
                        Vec2::new(p.x - xs * LASER_LENGTH, p.y - ys * 2.0),
                        Vec2::new(LASER_LENGTH, LASER_THICKNESS),
                    )
                } else {
                    (
                        Vec2::new(p.x - xs * 2.0, p.y - ys * LASER_LENGTH),
                        Vec2::new(LASER_THICKNESS, LASER_LENGTH),
                    )
                };
                canvas.fill_rect(Rect::from_corners(min, min + size), palette::red());
            }
        }
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.physics.velocity
    }

    pub fn radius(&self) -> f32 {
        self.weapon.collision_radius()
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn weapon(&self) -> WeaponType {
        self.weapon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DisplayList, DrawCommand};

    fn field() -> PlayField {
        PlayField::new(1000.0, 1000.0)
    }

    #[test]
    fn bullet_factory_sets_damage_and_radius() {
        let p = Projectile::fire(WeaponType::Bullet, Vec2::new(500.0, 500.0), 0.0, 440.0);
        assert_eq!(p.damage(), 10);
        assert_eq!(p.radius(), 5.0);
    }

    #[test]
    fn laser_factory_sets_damage_and_radius() {
        let p = Projectile::fire(WeaponType::Laser, Vec2::new(500.0, 500.0), 0.0, 720.0);
        assert_eq!(p.damage(), 20);
        assert_eq!(p.radius(), 2.0);
    }

    #[test]
    fn factory_flips_vertical_speed() {
        let p = Projectile::fire(WeaponType::Laser, Vec2::ZERO, 3.0, 720.0);
        assert_eq!(p.velocity(), Vec2::new(3.0, -720.0));
    }

    #[test]
    fn weapon_cycle_alternates() {
        assert_eq!(WeaponType::Laser.next(), WeaponType::Bullet);
        assert_eq!(WeaponType::Bullet.next().next(), WeaponType::Bullet);
    }

    #[test]
    fn expires_only_outside_the_field() {
        let mut p = Projectile::fire(WeaponType::Bullet, Vec2::new(500.0, 20.0), 0.0, 1000.0);
        assert!(!p.update(Tick::running(0.01), &field()), "y = 10 is inside");
        assert!(!p.update(Tick::running(0.01), &field()), "y = 0 is on the edge");
        assert!(p.update(Tick::running(0.01), &field()), "y = -10 is outside");
    }

    #[test]
    fn paused_tick_holds_position() {
        let mut p = Projectile::fire(WeaponType::Bullet, Vec2::new(500.0, 500.0), 0.0, 440.0);
        for _ in 0..30 {
            assert!(!p.update(Tick::paused(0.016), &field()));
        }
        assert_eq!(p.position(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn paused_projectile_outside_still_reports_expiry() {
        let mut p = Projectile::fire(WeaponType::Laser, Vec2::new(-5.0, 500.0), 0.0, 0.0);
        assert!(p.update(Tick::paused(0.016), &field()));
    }

    #[test]
    fn upward_laser_bar_trails_below_tip() {
        let p = Projectile::fire(WeaponType::Laser, Vec2::new(100.0, 100.0), 0.0, 720.0);
        let mut list = DisplayList::default();
        p.draw(&mut list);
        // vx == 0, vy < 0 → xs = 1, ys = 0
        assert_eq!(
            list.commands(),
            &[DrawCommand::Rect {
                rect: Rect::from_corners(Vec2::new(98.0, 100.0), Vec2::new(102.0, 130.0)),
                color: palette::red(),
            }]
        );
    }

    #[test]
    fn sideways_laser_draws_horizontal_bar() {
        let p = Projectile::fire(WeaponType::Laser, Vec2::new(100.0, 100.0), -720.0, 0.0);
        let mut list = DisplayList::default();
        p.draw(&mut list);
        // vx < 0 → xs = 0; vy = -0.0 → ys = 1
        assert_eq!(
            list.commands(),
            &[DrawCommand::Rect {
                rect: Rect::from_corners(Vec2::new(100.0, 98.0), Vec2::new(130.0, 102.0)),
                color: palette::red(),
            }]
        );
    }

    #[test]
    fn bullet_draws_filled_circle() {
        let p = Projectile::fire(WeaponType::Bullet, Vec2::new(10.0, 20.0), 0.0, 1.0);
        let mut list = DisplayList::default();
        p.draw(&mut list);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Circle {
                center: Vec2::new(10.0, 20.0),
                radius: 5.0,
                color: palette::white(),
            }]
        );
    }
}
