//! Keyboard sampling and ship movement.
//!
//! ## Pipeline (runs in order every `Update` frame while `Running`)
//!
//! 1. [`keyboard_to_input_system`] translates `ButtonInput<KeyCode>` into the
//!    [`FrameInput`] resource.
//! 2. `simulation_step_system` feeds that snapshot to `GameWorld::step`,
//!    which calls [`PlayerShip::update`] among everything else.
//!
//! The **input abstraction layer** (`FrameInput`) keeps the core testable:
//! tests build a `FrameInput` directly and never touch Bevy input.

use super::state::PlayerShip;
use crate::asteroid::{AsteroidShape, ShapeSelection};
use bevy::prelude::*;

/// One frame's worth of player commands.
///
/// Held keys (`move_*`, `fire`) are level-triggered; everything else is
/// edge-triggered and true only on the frame the key went down.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    pub cycle_weapon: bool,
    pub select_shape: Option<ShapeSelection>,
    pub toggle_pause: bool,
    pub restart: bool,
}

const SHAPE_KEYS: [(KeyCode, ShapeSelection); 5] = [
    (KeyCode::Digit1, ShapeSelection::Fixed(AsteroidShape::Triangle)),
    (KeyCode::Digit2, ShapeSelection::Fixed(AsteroidShape::Square)),
    (KeyCode::Digit3, ShapeSelection::Fixed(AsteroidShape::Pentagon)),
    (KeyCode::Digit4, ShapeSelection::Fixed(AsteroidShape::Hexagon)),
    (KeyCode::Digit5, ShapeSelection::Random),
];

impl FrameInput {
    /// - **W/S/A/D** held → `move_*`
    /// - **Space** held → `fire`
    /// - **Tab** → `cycle_weapon`
    /// - **1–5** → `select_shape` (lowest digit wins if several go down together)
    /// - **P** → `toggle_pause`
    /// - **R** → `restart`
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            move_up: keys.pressed(KeyCode::KeyW),
            move_down: keys.pressed(KeyCode::KeyS),
            move_left: keys.pressed(KeyCode::KeyA),
            move_right: keys.pressed(KeyCode::KeyD),
            fire: keys.pressed(KeyCode::Space),
            cycle_weapon: keys.just_pressed(KeyCode::Tab),
            select_shape: SHAPE_KEYS
                .iter()
                .find(|(key, _)| keys.just_pressed(*key))
                .map(|(_, selection)| *selection),
            toggle_pause: keys.just_pressed(KeyCode::KeyP),
            restart: keys.just_pressed(KeyCode::KeyR),
        }
    }
}

/// Snapshot the keyboard into [`FrameInput`].
pub fn keyboard_to_input_system(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<FrameInput>) {
    *input = FrameInput::from_keys(&keys);
}

/// Esc closes the game with a success exit code.
pub fn exit_on_escape_system(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed; exiting");
        exit.write(AppExit::Success);
    }
}

impl PlayerShip {
    /// Alive: move `speed × dt` along each held axis (diagonals are not
    /// normalised).  Dead: drift straight down the screen.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        let step = self.speed * dt;
        if !self.alive {
            self.position.y += step;
            return;
        }
        if input.move_up {
            self.position.y -= step;
        }
        if input.move_down {
            self.position.y += step;
        }
        if input.move_left {
            self.position.x -= step;
        }
        if input.move_right {
            self.position.x += step;
        }
    }
}
