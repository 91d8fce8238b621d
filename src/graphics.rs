//! Bevy side of the display boundary: camera, window setup, and the
//! presenter that turns each frame's [`DisplayList`] into gizmos, meshes,
//! sprites and UI text.
//!
//! ## Command mapping
//!
//! | `DrawCommand` | Bevy primitive                                   |
//! |---------------|--------------------------------------------------|
//! | `PolyLines`   | closed `gizmos.linestrip_2d`                     |
//! | `Circle`      | shared unit-circle `Mesh2d` scaled to the radius |
//! | `Rect`        | untextured `Sprite`                              |
//! | `Sprite`      | textured `Sprite` with `custom_size`             |
//! | `Text`        | absolutely positioned UI `Text` node             |
//!
//! Spawned entities carry [`FrameDrawable`] and are despawned at the start of
//! the next presentation pass.

use crate::config::GameConfig;
use crate::loading::AppState;
use crate::math::{regular_polygon, PlayField};
use crate::rendering::{DisplayList, DrawCommand};
use crate::simulation::render_world_system;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::HashMap;

/// Depth added per command so later commands draw on top.
const Z_STEP: f32 = 0.001;

pub struct PresentPlugin;

impl Plugin for PresentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, init_present_assets))
            .add_systems(
                Update,
                present_display_list_system
                    .after(render_world_system)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

/// Marks entities that only live for one presented frame.
#[derive(Component)]
pub struct FrameDrawable;

/// Shared unit-circle mesh plus one material per colour seen so far.
#[derive(Resource)]
pub struct PresentAssets {
    circle: Handle<Mesh>,
    materials: HashMap<[u8; 4], Handle<ColorMaterial>>,
}

impl PresentAssets {
    fn material(
        &mut self,
        color: Color,
        materials: &mut Assets<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        self.materials
            .entry(color_key(color))
            .or_insert_with(|| materials.add(ColorMaterial::from_color(color)))
            .clone()
    }
}

fn color_key(color: Color) -> [u8; 4] {
    color.to_srgba().to_u8_array()
}

/// Setup camera for 2D rendering.  The default projection maps one world
/// unit to one window pixel with the origin at the window centre.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("Camera spawned");
}

fn init_present_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let circle = meshes.add(Circle::new(1.0));
    commands.insert_resource(PresentAssets {
        circle,
        materials: HashMap::new(),
    });
}

/// Size and title the primary window from the loaded config.
pub fn apply_window_config(
    config: Res<GameConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.title = config.window_title.clone();
    window
        .resolution
        .set(config.field_width, config.field_height);
}

/// Screen pixels (origin top-left, y down) to world units (origin centre,
/// y up).
pub fn screen_to_world(p: Vec2, field: &PlayField) -> Vec2 {
    Vec2::new(p.x - field.width * 0.5, field.height * 0.5 - p.y)
}

/// Replace last frame's drawables with this frame's [`DisplayList`].
#[allow(clippy::too_many_arguments)]
pub fn present_display_list_system(
    mut commands: Commands,
    display: Res<DisplayList>,
    config: Res<GameConfig>,
    stale: Query<Entity, With<FrameDrawable>>,
    mut gizmos: Gizmos,
    mut assets: ResMut<PresentAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for entity in stale.iter() {
        commands.entity(entity).despawn();
    }

    let field = PlayField::new(config.field_width, config.field_height);
    for (i, command) in display.commands().iter().enumerate() {
        let z = i as f32 * Z_STEP;
        match command {
            DrawCommand::PolyLines {
                center,
                sides,
                radius,
                rotation,
                color,
            } => {
                let verts = regular_polygon(*center, *sides, *radius, *rotation);
                let closed = verts
                    .iter()
                    .chain(verts.first())
                    .map(|v| screen_to_world(*v, &field));
                gizmos.linestrip_2d(closed, *color);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let material = assets.material(*color, &mut materials);
                commands.spawn((
                    FrameDrawable,
                    Mesh2d(assets.circle.clone()),
                    MeshMaterial2d(material),
                    Transform::from_translation(screen_to_world(*center, &field).extend(z))
                        .with_scale(Vec3::splat(*radius)),
                ));
            }
            DrawCommand::Rect { rect, color } => {
                commands.spawn((
                    FrameDrawable,
                    Sprite::from_color(*color, rect.size()),
                    Transform::from_translation(screen_to_world(rect.center(), &field).extend(z)),
                ));
            }
            DrawCommand::Sprite {
                image,
                top_left,
                size,
            } => {
                let center = *top_left + *size * 0.5;
                commands.spawn((
                    FrameDrawable,
                    Sprite {
                        image: image.clone(),
                        custom_size: Some(*size),
                        ..default()
                    },
                    Transform::from_translation(screen_to_world(center, &field).extend(z)),
                ));
            }
            DrawCommand::Text {
                text,
                position,
                size,
                color,
            } => {
                commands.spawn((
                    FrameDrawable,
                    Text::new(text.clone()),
                    TextFont {
                        font_size: *size,
                        ..default()
                    },
                    TextColor(*color),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(position.x),
                        top: Val::Px(position.y),
                        ..default()
                    },
                ));
            }
        }
    }
}
