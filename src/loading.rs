//! Startup asset loading and the `AppState` machine.
//!
//! ## States
//!
//! | State      | Description                                          |
//! |------------|------------------------------------------------------|
//! | `Loading`  | Initial state; waiting on the ship bitmap            |
//! | `Running`  | `GameWorld` exists; simulation and drawing are active |
//!
//! ## Systems (registered by `LoadingPlugin`)
//!
//! | System                     | Schedule               | Purpose                              |
//! |----------------------------|------------------------|--------------------------------------|
//! | `request_ship_sprite`      | `Startup`              | Ask the `AssetServer` for the bitmap |
//! | `await_ship_sprite_system` | `Update / in Loading`  | Build the world or exit on failure   |

use crate::config::{load_game_config, GameConfig};
use crate::error::GameError;
use crate::player::ShipSprite;
use crate::simulation::GameWorld;
use bevy::asset::LoadState;
use bevy::prelude::*;

/// Top-level application state machine.
///
/// Every system in [`crate::simulation::SimulationPlugin`] runs under
/// `.run_if(in_state(AppState::Running))`, so nothing touches the missing
/// `GameWorld` resource while the sprite is still loading.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Handle to the ship bitmap while it loads.
#[derive(Resource, Default)]
pub struct ShipImage(pub Handle<Image>);

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<ShipImage>()
            .add_systems(Startup, request_ship_sprite.after(load_game_config))
            .add_systems(
                Update,
                await_ship_sprite_system.run_if(in_state(AppState::Loading)),
            );
    }
}

pub fn request_ship_sprite(
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
    mut ship: ResMut<ShipImage>,
) {
    ship.0 = asset_server.load(config.ship_sprite_path.clone());
    info!("Loading ship sprite {}", config.ship_sprite_path);
}

/// Once the bitmap is in `Assets<Image>`, build the [`GameWorld`] from it and
/// enter `Running`.  A failed load is fatal.
pub fn await_ship_sprite_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    ship: Res<ShipImage>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if let Some(image) = images.get(&ship.0) {
        let sprite = ShipSprite::new(ship.0.clone(), image.size().as_vec2());
        info!(
            "Ship sprite ready ({}x{})",
            sprite.size.x, sprite.size.y
        );
        commands.insert_resource(build_world(&config, sprite));
        next_state.set(AppState::Running);
        return;
    }

    if let Some(LoadState::Failed(reason)) = asset_server.get_load_state(ship.0.id()) {
        let err = GameError::AssetLoad {
            path: config.ship_sprite_path.clone(),
            reason: reason.to_string(),
        };
        error!("{err}");
        exit.write(AppExit::error());
    }
}

/// A world seeded from `config.rng_seed`, or from a fresh random seed when
/// none is configured.
pub fn build_world(config: &GameConfig, sprite: ShipSprite) -> GameWorld {
    let seed = config.rng_seed.unwrap_or_else(rand::random);
    info!("Creating world (seed {seed})");
    GameWorld::new(config.clone(), sprite, seed)
}
