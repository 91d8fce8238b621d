//! Player module: ship state, input sampling, fire timing and drawing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `PlayerShip` (HP, score, speed, fire tables) and its `ShipSprite` |
//! | [`control`] | `FrameInput` resource, keyboard sampling system, Esc exit, ship movement |
//! | [`combat`] | `ShotTimer` and shot emission from the ship's nose |
//! | [`rendering`] | Sprite blit with the dead-ship blink |
//!
//! All public items are re-exported at this level so that the rest of the crate
//! can use flat `crate::player::*` imports without knowing the sub-module
//! layout.

pub mod combat;
pub mod control;
pub mod rendering;
pub mod state;

pub use combat::ShotTimer;
pub use control::{exit_on_escape_system, keyboard_to_input_system, FrameInput};
pub use state::{PlayerShip, ShipSprite};
