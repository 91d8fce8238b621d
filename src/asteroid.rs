//! Polygonal asteroids: the shape table, edge spawning, motion and the
//! return-fire countdown carried by shooting shapes.
//!
//! Shapes differ only in data (side count, base damage, whether they shoot),
//! so they are a plain enum with a lookup table rather than a type hierarchy.

use crate::config::GameConfig;
use crate::math::{random_float, PlayField};
use crate::projectile::{Projectile, WeaponType};
use crate::rendering::{palette, Canvas};
use crate::rigid_body::{Physics, SizeTier, Tick, Transform2D};
use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::PI;

/// Per-shape constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeProfile {
    pub sides: u32,
    pub base_damage: i32,
    pub shoots: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidShape {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
}

impl AsteroidShape {
    pub const ALL: [AsteroidShape; 4] = [
        AsteroidShape::Triangle,
        AsteroidShape::Square,
        AsteroidShape::Pentagon,
        AsteroidShape::Hexagon,
    ];

    pub fn profile(self) -> ShapeProfile {
        match self {
            AsteroidShape::Triangle => ShapeProfile {
                sides: 3,
                base_damage: 5,
                shoots: false,
            },
            AsteroidShape::Square => ShapeProfile {
                sides: 4,
                base_damage: 10,
                shoots: false,
            },
            AsteroidShape::Pentagon => ShapeProfile {
                sides: 5,
                base_damage: 15,
                shoots: false,
            },
            AsteroidShape::Hexagon => ShapeProfile {
                sides: 6,
                base_damage: 20,
                shoots: true,
            },
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            AsteroidShape::Triangle => "triangle",
            AsteroidShape::Square => "square",
            AsteroidShape::Pentagon => "pentagon",
            AsteroidShape::Hexagon => "hexagon",
        }
    }
}

/// What the spawner produces: one fixed shape, or a fresh random pick for
/// every asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeSelection {
    Fixed(AsteroidShape),
    Random,
}

impl Default for ShapeSelection {
    fn default() -> Self {
        ShapeSelection::Fixed(AsteroidShape::Triangle)
    }
}

impl ShapeSelection {
    pub fn resolve(self, rng: &mut impl Rng) -> AsteroidShape {
        match self {
            ShapeSelection::Fixed(shape) => shape,
            ShapeSelection::Random => AsteroidShape::random(rng),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeSelection::Fixed(shape) => shape.label(),
            ShapeSelection::Random => "random",
        }
    }
}

/// Screen edge an asteroid enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// A point one `radius` outside this edge, at a random offset along it.
    fn entry_point(self, rng: &mut impl Rng, field: &PlayField, radius: f32) -> Vec2 {
        match self {
            SpawnEdge::Top => Vec2::new(random_float(rng, 0.0, field.width), -radius),
            SpawnEdge::Right => Vec2::new(field.width + radius, random_float(rng, 0.0, field.height)),
            SpawnEdge::Bottom => {
                Vec2::new(random_float(rng, 0.0, field.width), field.height + radius)
            }
            SpawnEdge::Left => Vec2::new(-radius, random_float(rng, 0.0, field.height)),
        }
    }
}

/// Return-fire countdown for shooting asteroids.
///
/// The ammo reserve drains at `drain_rate` units per unpaused second and one
/// volley goes out each time a whole unit is spent, so volleys are
/// `1 / drain_rate` seconds apart.  The first volley leaves on the first
/// unpaused tick after spawning.  At most one volley is fired per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VolleyTimer {
    remaining: u32,
    countdown: f32,
    period: f32,
}

impl VolleyTimer {
    pub fn new(ammo: f32, drain_rate: f32) -> Self {
        Self {
            remaining: ammo.max(0.0).floor() as u32,
            countdown: 0.0,
            period: if drain_rate > 0.0 {
                1.0 / drain_rate
            } else {
                f32::INFINITY
            },
        }
    }

    /// Consume `dt` seconds; `true` when a volley is due this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.countdown -= dt;
        if self.countdown > 0.0 {
            return false;
        }
        self.remaining -= 1;
        self.countdown += self.period;
        if self.countdown <= 0.0 {
            // dt longer than a whole period: missed volleys are dropped.
            self.countdown = self.period;
        }
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn period(&self) -> f32 {
        self.period
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    transform: Transform2D,
    physics: Physics,
    shape: AsteroidShape,
    size: SizeTier,
    weapon: WeaponType,
    base_radius: f32,
    volleys: VolleyTimer,
}

impl Asteroid {
    /// Assemble an asteroid from explicit parts.
    pub fn new(
        shape: AsteroidShape,
        size: SizeTier,
        weapon: WeaponType,
        transform: Transform2D,
        physics: Physics,
        config: &GameConfig,
    ) -> Self {
        Self {
            transform,
            physics,
            shape,
            size,
            weapon,
            base_radius: config.asteroid_base_radius,
            volleys: VolleyTimer::new(config.asteroid_ammo, config.ammo_drain_rate),
        }
    }

    /// Spawn just outside a random screen edge, heading for the centre.
    pub fn spawn(
        rng: &mut impl Rng,
        shape: AsteroidShape,
        field: &PlayField,
        config: &GameConfig,
    ) -> Self {
        let size = SizeTier::random(rng);
        let weapon = WeaponType::random(rng);
        let edge = SpawnEdge::random(rng);
        Self::launch(rng, shape, size, weapon, edge, field, config)
    }

    /// Spawn from a chosen edge with a chosen size; the remaining parameters
    /// are still random.
    pub fn spawn_from_edge(
        rng: &mut impl Rng,
        shape: AsteroidShape,
        size: SizeTier,
        edge: SpawnEdge,
        field: &PlayField,
        config: &GameConfig,
    ) -> Self {
        let weapon = WeaponType::random(rng);
        Self::launch(rng, shape, size, weapon, edge, field, config)
    }

    fn launch(
        rng: &mut impl Rng,
        shape: AsteroidShape,
        size: SizeTier,
        weapon: WeaponType,
        edge: SpawnEdge,
        field: &PlayField,
        config: &GameConfig,
    ) -> Self {
        let radius = config.asteroid_base_radius * size.multiplier() as f32;
        let position = edge.entry_point(rng, field, radius);

        // Aim near the centre, jittered inside a disc.
        let max_offset = field.min_dimension() * config.aim_jitter_fraction;
        let angle = random_float(rng, 0.0, 2.0 * PI);
        let offset = random_float(rng, 0.0, max_offset);
        let aim = field.center() + Vec2::new(angle.cos(), angle.sin()) * offset;

        let direction = (aim - position).normalize_or_zero();
        let speed = random_float(rng, config.asteroid_speed_min, config.asteroid_speed_max);
        let physics = Physics {
            velocity: direction * speed,
            rotation_speed: random_float(rng, config.asteroid_rot_min, config.asteroid_rot_max),
        };
        let transform = Transform2D {
            position,
            rotation: random_float(rng, 0.0, 360.0),
        };

        Self::new(shape, size, weapon, transform, physics, config)
    }

    /// Advance unless paused.  Returns `true` while the asteroid is inside
    /// the field grown by its own radius.
    pub fn update(&mut self, tick: Tick, field: &PlayField) -> bool {
        self.physics
            .integrate(&mut self.transform, tick.effective_dt());
        field.contains_dilated(self.transform.position, self.radius())
    }

    /// Run the return-fire countdown and, when a volley is due, emit four
    /// projectiles heading up, down, left and right from the rim.
    ///
    /// Non-shooting shapes and paused ticks never fire.
    pub fn try_volley(&mut self, tick: Tick, config: &GameConfig) -> Option<[Projectile; 4]> {
        if !self.can_shoot() || tick.paused || !self.volleys.tick(tick.dt) {
            return None;
        }
        let p = self.transform.position;
        let r = self.radius();
        let speed = config.enemy_projectile_speed(self.weapon);
        let w = self.weapon;
        Some([
            Projectile::fire(w, Vec2::new(p.x, p.y - r), 0.0, speed),
            Projectile::fire(w, Vec2::new(p.x, p.y + r), 0.0, -speed),
            Projectile::fire(w, Vec2::new(p.x - r, p.y), -speed, 0.0),
            Projectile::fire(w, Vec2::new(p.x + r, p.y), speed, 0.0),
        ])
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.poly_lines(
            self.transform.position,
            self.shape.profile().sides,
            self.radius(),
            self.transform.rotation,
            palette::white(),
        );
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn rotation(&self) -> f32 {
        self.transform.rotation
    }

    pub fn velocity(&self) -> Vec2 {
        self.physics.velocity
    }

    pub fn rotation_speed(&self) -> f32 {
        self.physics.rotation_speed
    }

    pub fn radius(&self) -> f32 {
        self.base_radius * self.size.multiplier() as f32
    }

    pub fn damage(&self) -> i32 {
        self.shape.profile().base_damage * self.size.multiplier()
    }

    pub fn shape(&self) -> AsteroidShape {
        self.shape
    }

    pub fn weapon(&self) -> WeaponType {
        self.weapon
    }

    pub fn can_shoot(&self) -> bool {
        self.shape.profile().shoots
    }

    pub fn remaining_volleys(&self) -> u32 {
        self.volleys.remaining()
    }
}
