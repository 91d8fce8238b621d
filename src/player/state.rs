//! Player ship state: health, score, movement parameters and the sprite it
//! is drawn with.
//!
//! Systems that drive this state are in the sibling modules:
//! - [`super::control`]: input sampling + movement
//! - [`super::combat`]: fire-rate bookkeeping
//! - [`super::rendering`]: sprite drawing with the death blink

use crate::config::GameConfig;
use crate::projectile::WeaponType;
use bevy::prelude::*;

/// Bitmap used to draw the ship, with its pixel size.
///
/// The handle is owned by the ship; dropping the ship releases the
/// reference so Bevy can free the image once nothing else holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipSprite {
    pub image: Handle<Image>,
    pub size: Vec2,
}

impl ShipSprite {
    pub fn new(image: Handle<Image>, size: Vec2) -> Self {
        Self { image, size }
    }

    /// A sprite with no backing image; used headless and in tests where
    /// only the dimensions matter.
    pub fn placeholder(width: f32, height: f32) -> Self {
        Self {
            image: Handle::default(),
            size: Vec2::new(width, height),
        }
    }
}

/// The ship the player flies.
///
/// Death is permanent: once `hp` reaches zero the ship never revives and
/// only a restart (a fresh `PlayerShip`) brings play back.
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub(super) position: Vec2,
    pub(super) hp: i32,
    pub(super) speed: f32,
    pub(super) alive: bool,
    pub(super) laser_fire_rate: f32,
    pub(super) bullet_fire_rate: f32,
    pub(super) laser_spacing: f32,
    pub(super) bullet_spacing: f32,
    pub(super) scale: f32,
    pub(super) score: u32,
    pub(super) sprite: ShipSprite,
}

impl PlayerShip {
    pub fn new(position: Vec2, sprite: ShipSprite, config: &GameConfig) -> Self {
        Self {
            position,
            hp: config.ship_start_hp,
            speed: config.ship_speed,
            alive: true,
            laser_fire_rate: config.laser_fire_rate,
            bullet_fire_rate: config.bullet_fire_rate,
            laser_spacing: config.laser_spacing,
            bullet_spacing: config.bullet_spacing,
            scale: config.ship_sprite_scale,
            score: 0,
            sprite,
        }
    }

    /// Subtract `amount` from HP; a negative amount heals without any upper
    /// bound.  Dead ships ignore this entirely.
    pub fn take_damage(&mut self, amount: i32) {
        if !self.alive {
            return;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.alive = false;
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Half the drawn sprite width.
    pub fn radius(&self) -> f32 {
        self.sprite.size.x * self.scale * 0.5
    }

    pub fn fire_rate(&self, weapon: WeaponType) -> f32 {
        match weapon {
            WeaponType::Laser => self.laser_fire_rate,
            WeaponType::Bullet => self.bullet_fire_rate,
        }
    }

    pub fn spacing(&self, weapon: WeaponType) -> f32 {
        match weapon {
            WeaponType::Laser => self.laser_spacing,
            WeaponType::Bullet => self.bullet_spacing,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> PlayerShip {
        PlayerShip::new(
            Vec2::new(500.0, 500.0),
            ShipSprite::placeholder(200.0, 160.0),
            &GameConfig::default(),
        )
    }

    #[test]
    fn fresh_ship_defaults() {
        let s = ship();
        assert_eq!(s.hp(), 100);
        assert!(s.is_alive());
        assert_eq!(s.score(), 0);
        assert_eq!(s.radius(), 25.0);
        assert_eq!(s.fire_rate(WeaponType::Laser), 18.0);
        assert_eq!(s.spacing(WeaponType::Bullet), 20.0);
    }

    #[test]
    fn large_hexagon_hits_twice_to_kill() {
        let mut s = ship();
        s.take_damage(80);
        assert_eq!(s.hp(), 20);
        assert!(s.is_alive());
        s.take_damage(80);
        assert!(!s.is_alive());
    }

    #[test]
    fn exact_zero_kills() {
        let mut s = ship();
        s.take_damage(100);
        assert_eq!(s.hp(), 0);
        assert!(!s.is_alive());
    }

    #[test]
    fn dead_ship_ignores_damage_and_healing() {
        let mut s = ship();
        s.take_damage(150);
        let hp = s.hp();
        s.take_damage(10);
        s.take_damage(-500);
        assert_eq!(s.hp(), hp);
        assert!(!s.is_alive());
    }

    #[test]
    fn negative_damage_heals_past_start() {
        let mut s = ship();
        s.take_damage(-20);
        assert_eq!(s.hp(), 120);
    }

    #[test]
    fn score_accumulates() {
        let mut s = ship();
        s.add_score(5);
        s.add_score(80);
        assert_eq!(s.score(), 85);
    }
}
