//! Polyroids: a 2D arcade shooter.
//!
//! The ship survives waves of polygonal asteroids that drift in from the
//! screen edges, shoots them down for score and collects the healing pickups
//! they leave behind.  Hexagons shoot back.
//!
//! The game core ([`simulation::GameWorld`]) is plain data stepped once per
//! frame and drawn through the [`rendering::Canvas`] trait; Bevy hosts it as a
//! single resource and presents the resulting display list.

pub mod asteroid;
pub mod config;
pub mod constants;
pub mod consumable;
pub mod error;
pub mod graphics;
pub mod loading;
pub mod math;
pub mod player;
pub mod projectile;
pub mod rendering;
pub mod rigid_body;
pub mod simulation;
