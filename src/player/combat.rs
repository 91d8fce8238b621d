//! Fire-rate bookkeeping for the ship's held trigger.
//!
//! ## Timing model
//!
//! | Trigger | Effect on [`ShotTimer`] |
//! |---|---|
//! | held, unpaused | `+= dt`, then one shot per whole `1 / rate` interval, each subtracted |
//! | released or paused | folded to `timer mod interval` once it exceeds one interval |
//!
//! Shots leave the nose at `(x, y - radius)` and travel up at
//! `spacing × rate`, so successive shots stay `spacing` pixels apart at any
//! frame rate.

use super::state::PlayerShip;
use crate::projectile::{Projectile, WeaponType};
use bevy::prelude::*;

/// Seconds of trigger time not yet turned into shots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShotTimer {
    accumulated: f32,
}

impl ShotTimer {
    /// Add `dt` and return how many whole `interval`s are now banked,
    /// removing them from the timer.  A non-positive interval never fires.
    pub fn trigger(&mut self, dt: f32, interval: f32) -> u32 {
        self.accumulated += dt;
        if interval.is_nan() || interval <= 0.0 {
            return 0;
        }
        let mut shots = 0;
        while self.accumulated >= interval {
            self.accumulated -= interval;
            shots += 1;
        }
        shots
    }

    /// Idle frame: drop any backlog beyond one interval.
    pub fn settle(&mut self, interval: f32) {
        if interval > 0.0 && self.accumulated > interval {
            self.accumulated %= interval;
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    pub fn value(&self) -> f32 {
        self.accumulated
    }
}

impl PlayerShip {
    /// Seconds between shots of `weapon`.
    pub fn shot_interval(&self, weapon: WeaponType) -> f32 {
        1.0 / self.fire_rate(weapon)
    }

    /// Projectile speed of `weapon`: `spacing × rate`.
    pub fn shot_speed(&self, weapon: WeaponType) -> f32 {
        self.spacing(weapon) * self.fire_rate(weapon)
    }

    /// Where shots leave the ship.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y - self.radius())
    }

    /// Run the trigger for one frame of held fire and return the shots it
    /// produced (possibly none, possibly several on a long frame).
    pub fn fire(&self, weapon: WeaponType, timer: &mut ShotTimer, dt: f32) -> Vec<Projectile> {
        let shots = timer.trigger(dt, self.shot_interval(weapon));
        let muzzle = self.muzzle();
        let speed = self.shot_speed(weapon);
        (0..shots)
            .map(|_| Projectile::fire(weapon, muzzle, 0.0, speed))
            .collect()
    }
}
