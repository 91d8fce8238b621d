//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage
//!
//! Systems read it through `config: Res<GameConfig>`; the simulation core takes
//! a clone when the [`crate::simulation::GameWorld`] is built, so a restart
//! keeps using the values the world was created with.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use crate::projectile::WeaponType;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Play Field / Window ──────────────────────────────────────────────────
    pub field_width: f32,
    pub field_height: f32,
    pub window_title: String,

    // ── Player Ship ──────────────────────────────────────────────────────────
    pub ship_sprite_path: String,
    pub ship_sprite_scale: f32,
    pub ship_start_hp: i32,
    pub ship_speed: f32,

    // ── Weapons ──────────────────────────────────────────────────────────────
    pub laser_fire_rate: f32,
    pub bullet_fire_rate: f32,
    pub laser_spacing: f32,
    pub bullet_spacing: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub max_asteroids: usize,
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,
    pub asteroid_base_radius: f32,
    pub asteroid_speed_min: f32,
    pub asteroid_speed_max: f32,
    pub asteroid_rot_min: f32,
    pub asteroid_rot_max: f32,
    pub aim_jitter_fraction: f32,
    pub asteroid_ammo: f32,
    pub ammo_drain_rate: f32,
    pub enemy_laser_speed: f32,
    pub enemy_bullet_speed: f32,

    // ── Consumables ──────────────────────────────────────────────────────────
    pub consumable_lifetime: f32,
    pub consumable_drop_threshold: i32,
    pub consumable_value_spread: i32,
    pub consumable_pickup_radius: f32,

    // ── Rendering ────────────────────────────────────────────────────────────
    pub blink_period: f32,
    pub blink_visible: f32,

    // ── Randomness ───────────────────────────────────────────────────────────
    /// Fixed RNG seed.  `None` draws a fresh random seed at world creation.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Play Field / Window
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            window_title: WINDOW_TITLE.to_string(),
            // Player Ship
            ship_sprite_path: SHIP_SPRITE_PATH.to_string(),
            ship_sprite_scale: SHIP_SPRITE_SCALE,
            ship_start_hp: SHIP_START_HP,
            ship_speed: SHIP_SPEED,
            // Weapons
            laser_fire_rate: LASER_FIRE_RATE,
            bullet_fire_rate: BULLET_FIRE_RATE,
            laser_spacing: LASER_SPACING,
            bullet_spacing: BULLET_SPACING,
            // Asteroids
            max_asteroids: MAX_ASTEROIDS,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,
            asteroid_base_radius: ASTEROID_BASE_RADIUS,
            asteroid_speed_min: ASTEROID_SPEED_MIN,
            asteroid_speed_max: ASTEROID_SPEED_MAX,
            asteroid_rot_min: ASTEROID_ROT_MIN,
            asteroid_rot_max: ASTEROID_ROT_MAX,
            aim_jitter_fraction: AIM_JITTER_FRACTION,
            asteroid_ammo: ASTEROID_AMMO,
            ammo_drain_rate: AMMO_DRAIN_RATE,
            enemy_laser_speed: ENEMY_LASER_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            // Consumables
            consumable_lifetime: CONSUMABLE_LIFETIME,
            consumable_drop_threshold: CONSUMABLE_DROP_THRESHOLD,
            consumable_value_spread: CONSUMABLE_VALUE_SPREAD,
            consumable_pickup_radius: CONSUMABLE_PICKUP_RADIUS,
            // Rendering
            blink_period: BLINK_PERIOD,
            blink_visible: BLINK_VISIBLE,
            // Randomness
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; absent keys keep their defaults.  Values the
    /// game cannot run with are rejected as [`GameError::ConfigInvalid`].
    pub fn from_toml_str(contents: &str, origin: &str) -> GameResult<Self> {
        let config =
            toml::from_str::<GameConfig>(contents).map_err(|e| GameError::ConfigParse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        config
            .validate()
            .map_err(|message| GameError::ConfigInvalid {
                path: origin.to_string(),
                message,
            })?;
        Ok(config)
    }

    /// First out-of-range value, if any.
    ///
    /// Shot intervals are `1 / fire_rate` and are drained in a loop, so rates
    /// must be positive.  Pickup values are drawn from an inclusive range, so
    /// the spread must not be negative.  Min/max pairs must be ordered.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ship_sprite_scale", self.ship_sprite_scale),
            ("laser_fire_rate", self.laser_fire_rate),
            ("bullet_fire_rate", self.bullet_fire_rate),
            ("ammo_drain_rate", self.ammo_drain_rate),
            ("blink_period", self.blink_period),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{key} must be > 0, got {value}"));
            }
        }

        let non_negative = [
            ("ship_speed", self.ship_speed),
            ("laser_spacing", self.laser_spacing),
            ("bullet_spacing", self.bullet_spacing),
            ("spawn_interval_min", self.spawn_interval_min),
            ("asteroid_base_radius", self.asteroid_base_radius),
            ("asteroid_speed_min", self.asteroid_speed_min),
            ("asteroid_rot_min", self.asteroid_rot_min),
            ("aim_jitter_fraction", self.aim_jitter_fraction),
            ("asteroid_ammo", self.asteroid_ammo),
            ("consumable_lifetime", self.consumable_lifetime),
            ("consumable_pickup_radius", self.consumable_pickup_radius),
            ("blink_visible", self.blink_visible),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{key} must be >= 0, got {value}"));
            }
        }

        if self.consumable_value_spread < 0 {
            return Err(format!(
                "consumable_value_spread must be >= 0, got {}",
                self.consumable_value_spread
            ));
        }

        let ranges = [
            ("spawn_interval", self.spawn_interval_min, self.spawn_interval_max),
            ("asteroid_speed", self.asteroid_speed_min, self.asteroid_speed_max),
            ("asteroid_rot", self.asteroid_rot_min, self.asteroid_rot_max),
        ];
        for (key, min, max) in ranges {
            if !(max.is_finite() && min <= max) {
                return Err(format!("{key}_min ({min}) must not exceed {key}_max ({max})"));
            }
        }
        Ok(())
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> GameResult<Self> {
        let origin = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| GameError::ConfigRead {
            path: origin.clone(),
            source: e,
        })?;
        Self::from_toml_str(&contents, &origin)
    }

    /// Speed of a projectile fired by a shooting asteroid.
    pub fn enemy_projectile_speed(&self, weapon: WeaponType) -> f32 {
        match weapon {
            WeaponType::Laser => self.enemy_laser_speed,
            WeaponType::Bullet => self.enemy_bullet_speed,
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// A missing file is not an error (defaults are already in place from
/// `insert_resource`).  An unreadable, malformed or out-of-range file is
/// logged and the defaults are kept.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = Path::new(CONFIG_PATH);
    if !path.exists() {
        info!("No {CONFIG_PATH} found; using compiled defaults");
        return;
    }
    match GameConfig::from_path(path) {
        Ok(loaded) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Err(err) => warn!("{err}; using defaults"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GameConfig::from_toml_str("", "inline").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn shipped_config_is_all_defaults() {
        let config =
            GameConfig::from_toml_str(include_str!("../assets/game.toml"), CONFIG_PATH).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config =
            GameConfig::from_toml_str("max_asteroids = 12\nrng_seed = 7\n", "inline").unwrap();
        assert_eq!(config.max_asteroids, 12);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.ship_start_hp, SHIP_START_HP);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn malformed_document_reports_origin() {
        let err = GameConfig::from_toml_str("max_asteroids = \"many\"", "game.toml").unwrap_err();
        match err {
            GameError::ConfigParse { path, .. } => assert_eq!(path, "game.toml"),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    fn rejected(doc: &str) -> String {
        match GameConfig::from_toml_str(doc, "game.toml") {
            Err(GameError::ConfigInvalid { path, message }) => {
                assert_eq!(path, "game.toml");
                message
            }
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    fn negative_value_spread_is_rejected() {
        let message = rejected("consumable_value_spread = -1\nconsumable_drop_threshold = -1\n");
        assert!(message.starts_with("consumable_value_spread"), "{message}");
    }

    #[test]
    fn non_positive_fire_rates_are_rejected() {
        assert!(rejected("laser_fire_rate = -18.0").starts_with("laser_fire_rate"));
        assert!(rejected("bullet_fire_rate = 0.0").starts_with("bullet_fire_rate"));
        assert!(rejected("laser_fire_rate = nan").starts_with("laser_fire_rate"));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let message = rejected("spawn_interval_min = 4.0\nspawn_interval_max = 1.0\n");
        assert!(message.starts_with("spawn_interval_min"), "{message}");
        assert!(rejected("asteroid_rot_min = 300.0").starts_with("asteroid_rot_min"));
    }

    #[test]
    fn zero_spread_and_equal_bounds_are_accepted() {
        let config = GameConfig::from_toml_str(
            "consumable_value_spread = 0\nspawn_interval_min = 1.0\nspawn_interval_max = 1.0\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.consumable_value_spread, 0);
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = GameConfig::from_path(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, GameError::ConfigRead { .. }));
    }

    #[test]
    fn enemy_speeds_follow_constants() {
        let config = GameConfig::default();
        assert_eq!(config.enemy_projectile_speed(WeaponType::Laser), 720.0);
        assert_eq!(config.enemy_projectile_speed(WeaponType::Bullet), 440.0);
    }
}
