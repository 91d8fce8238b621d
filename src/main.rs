use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use polyroids::config::{self, GameConfig};
use polyroids::constants::{FIELD_HEIGHT, FIELD_WIDTH, WINDOW_TITLE};
use polyroids::graphics::{self, PresentPlugin};
use polyroids::loading::LoadingPlugin;
use polyroids::player;
use polyroids::simulation::SimulationPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(FIELD_WIDTH as u32, FIELD_HEIGHT as u32),
                resizable: false,
                present_mode: PresentMode::AutoVsync,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the final values.
                config::load_game_config,
                graphics::apply_window_config.after(config::load_game_config),
            ),
        )
        .add_plugins((LoadingPlugin, SimulationPlugin, PresentPlugin))
        .add_systems(Update, player::exit_on_escape_system)
        .run()
}
