//! Centralised gameplay constants.
//!
//! Every tunable value lives here so it can be found and reasoned about in one
//! place.  [`crate::config::GameConfig`] mirrors these and lets
//! `assets/game.toml` override any subset at startup; the values below remain
//! the authoritative defaults.

// ── Play Field / Window ───────────────────────────────────────────────────────

/// Width of the play field and of the window (pixels).
pub const FIELD_WIDTH: f32 = 1000.0;

/// Height of the play field and of the window (pixels).
pub const FIELD_HEIGHT: f32 = 1000.0;

pub const WINDOW_TITLE: &str = "Asteroids OOP";

// ── Player Ship ───────────────────────────────────────────────────────────────

/// Relative to the `assets/` directory.
pub const SHIP_SPRITE_PATH: &str = "spaceship1.png";

/// Draw scale applied to the ship bitmap.  The collision radius is half the
/// scaled width, so this also sizes the hitbox.
pub const SHIP_SPRITE_SCALE: f32 = 0.25;

pub const SHIP_START_HP: i32 = 100;

/// Axis speed (px/s).  Diagonal movement is not normalised.
pub const SHIP_SPEED: f32 = 250.0;

// ── Weapons ───────────────────────────────────────────────────────────────────

/// Shots per second while the fire key is held.
pub const LASER_FIRE_RATE: f32 = 18.0;
pub const BULLET_FIRE_RATE: f32 = 22.0;

/// On-screen gap (px) between consecutive shots.  Projectile speed is
/// `spacing × fire_rate`, so the gap holds at any rate.
pub const LASER_SPACING: f32 = 40.0;
pub const BULLET_SPACING: f32 = 20.0;

pub const LASER_DAMAGE: i32 = 20;
pub const BULLET_DAMAGE: i32 = 10;

/// Collision radius; also the drawn radius of a bullet.
pub const LASER_RADIUS: f32 = 2.0;
pub const BULLET_RADIUS: f32 = 5.0;

/// Laser bar geometry (px).
pub const LASER_LENGTH: f32 = 30.0;
pub const LASER_THICKNESS: f32 = 4.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Live asteroid cap; spawning pauses while the field holds this many.
pub const MAX_ASTEROIDS: usize = 150;

/// Spawn interval is redrawn uniformly from this range after every spawn.
pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
pub const SPAWN_INTERVAL_MAX: f32 = 3.0;

/// Radius of a size-tier-1 asteroid (px).
pub const ASTEROID_BASE_RADIUS: f32 = 16.0;

pub const ASTEROID_SPEED_MIN: f32 = 125.0;
pub const ASTEROID_SPEED_MAX: f32 = 250.0;

/// Spin range (deg/s).
pub const ASTEROID_ROT_MIN: f32 = 50.0;
pub const ASTEROID_ROT_MAX: f32 = 240.0;

/// Aim-point jitter radius as a fraction of the shorter field dimension.
pub const AIM_JITTER_FRACTION: f32 = 0.1;

/// Volleys a shooting asteroid carries.
pub const ASTEROID_AMMO: f32 = 20.0;

/// Ammo drained per second; one volley is fired per whole unit drained.
pub const AMMO_DRAIN_RATE: f32 = 0.5;

/// Enemy projectile speed (px/s).
pub const ENEMY_LASER_SPEED: f32 = 720.0;
pub const ENEMY_BULLET_SPEED: f32 = 440.0;

// ── Consumables ───────────────────────────────────────────────────────────────

/// Seconds a pickup lies on the field before it expires.
pub const CONSUMABLE_LIFETIME: f32 = 5.0;

/// A kill drops a pickup when a uniform roll in `[0, 100]` exceeds this.
pub const CONSUMABLE_DROP_THRESHOLD: i32 = 70;

/// Pickup value is uniform in `[damage - spread, damage]`.
pub const CONSUMABLE_VALUE_SPREAD: i32 = 5;

/// Added to the ship radius to form the pickup distance.
pub const CONSUMABLE_PICKUP_RADIUS: f32 = 5.0;

/// Side of the drawn pickup square (px).
pub const CONSUMABLE_SIZE: f32 = 10.0;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Dead ship blink cycle (s) and the visible part at its start.
pub const BLINK_PERIOD: f32 = 0.4;
pub const BLINK_VISIBLE: f32 = 0.2;

/// Advance of one glyph as a fraction of the font size.  Bevy's bundled
/// default font is monospaced, so width = chars × size × advance.
pub const GLYPH_ADVANCE: f32 = 0.6;

// ── Collections ───────────────────────────────────────────────────────────────

pub const ASTEROID_CAPACITY: usize = 1_000;
pub const PROJECTILE_CAPACITY: usize = 10_000;
pub const CONSUMABLE_CAPACITY: usize = 100;
