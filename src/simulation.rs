//! The frame loop: one [`GameWorld::step`] per frame advances every entity
//! collection and resolves collisions with brute-force scans.
//!
//! ## Step order
//!
//! | # | Phase | Runs while paused |
//! |---|-------|-------------------|
//! | 1 | spawn timer `+= dt`, pause toggle (alive only) | yes |
//! | 2 | ship movement | no |
//! | 3 | restart after death | yes |
//! | 4 | shape selection, weapon cycle | yes |
//! | 5 | held-fire shots / shot timer settle | settle only |
//! | 6 | asteroid spawn | no |
//! | 7 | asteroid return fire | no |
//! | 8 | projectile motion + expiry | expiry only |
//! | 9 | player projectile × asteroid | yes |
//! | 10 | enemy projectile × ship (first hit only) | yes |
//! | 11 | consumable ageing, pickup, expiry (first event only) | ageing skipped |
//! | 12 | asteroid × ship, asteroid motion + expiry | motion skipped |
//!
//! Drawing is a separate pass ([`crate::rendering::draw_world`]) so the core
//! stays testable without a display.

use crate::asteroid::{Asteroid, ShapeSelection};
use crate::config::GameConfig;
use crate::constants::{ASTEROID_CAPACITY, CONSUMABLE_CAPACITY, PROJECTILE_CAPACITY};
use crate::consumable::{drop_roll, Consumable};
use crate::loading::AppState;
use crate::math::{circles_overlap, random_float, PlayField};
use crate::player::{keyboard_to_input_system, FrameInput, PlayerShip, ShipSprite, ShotTimer};
use crate::projectile::{Projectile, WeaponType};
use crate::rendering::{draw_world, DisplayList};
use crate::rigid_body::Tick;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameInput>()
            .init_resource::<DisplayList>()
            .add_systems(
                Update,
                (
                    keyboard_to_input_system,
                    simulation_step_system,
                    render_world_system,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

/// What happened during one [`GameWorld::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub shots_fired: usize,
    pub asteroids_spawned: usize,
    pub kills: usize,
    pub drops: usize,
    pub volleys: usize,
    pub enemy_hits: usize,
    pub ship_collisions: usize,
    pub pickups: usize,
    pub consumables_expired: usize,
    pub pause_toggled: bool,
    pub selection_changed: bool,
    pub weapon_cycled: bool,
    pub died: bool,
    pub restarted: bool,
}

impl StepSummary {
    /// Nothing worth logging happened.
    pub fn is_quiet(&self) -> bool {
        *self == StepSummary::default()
    }
}

/// All mutable game state.  Owned by Bevy as a single resource; nothing in
/// here is an ECS entity.
#[derive(Resource)]
pub struct GameWorld {
    pub asteroids: Vec<Asteroid>,
    /// Fired by the ship.
    pub projectiles: Vec<Projectile>,
    /// Fired by shooting asteroids.
    pub enemy_projectiles: Vec<Projectile>,
    pub consumables: Vec<Consumable>,
    pub player: PlayerShip,
    pub shape_selection: ShapeSelection,
    pub weapon: WeaponType,
    pub shot_timer: ShotTimer,
    pub paused: bool,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    sprite: ShipSprite,
    rng: StdRng,
    config: GameConfig,
    field: PlayField,
}

impl GameWorld {
    pub fn new(config: GameConfig, sprite: ShipSprite, seed: u64) -> Self {
        let field = PlayField::new(config.field_width, config.field_height);
        let mut rng = StdRng::seed_from_u64(seed);
        let spawn_interval =
            random_float(&mut rng, config.spawn_interval_min, config.spawn_interval_max);
        let player = PlayerShip::new(field.center(), sprite.clone(), &config);
        Self {
            asteroids: Vec::with_capacity(ASTEROID_CAPACITY),
            projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            enemy_projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            consumables: Vec::with_capacity(CONSUMABLE_CAPACITY),
            player,
            shape_selection: ShapeSelection::default(),
            weapon: WeaponType::default(),
            shot_timer: ShotTimer::default(),
            paused: false,
            spawn_timer: 0.0,
            spawn_interval,
            sprite,
            rng,
            config,
            field,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> PlayField {
        self.field
    }

    /// Fresh ship, empty collections, new spawn interval.  The selected
    /// weapon and spawn shape carry over.
    pub fn restart(&mut self) {
        self.player = PlayerShip::new(self.field.center(), self.sprite.clone(), &self.config);
        self.asteroids.clear();
        self.projectiles.clear();
        self.enemy_projectiles.clear();
        self.consumables.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = self.next_spawn_interval();
        self.paused = false;
        self.shot_timer.reset();
    }

    fn next_spawn_interval(&mut self) -> f32 {
        random_float(
            &mut self.rng,
            self.config.spawn_interval_min,
            self.config.spawn_interval_max,
        )
    }

    /// Advance the game by one frame of `dt` seconds.
    pub fn step(&mut self, input: &FrameInput, dt: f32) -> StepSummary {
        let mut summary = StepSummary::default();
        let was_alive = self.player.is_alive();

        self.spawn_timer += dt;
        if input.toggle_pause && self.player.is_alive() {
            self.paused = !self.paused;
            summary.pause_toggled = true;
        }

        if !self.paused {
            self.player.update(dt, input);
        }

        if !self.player.is_alive() && input.restart {
            self.restart();
            summary.restarted = true;
        }

        if let Some(selection) = input.select_shape {
            self.shape_selection = selection;
            summary.selection_changed = true;
        }
        if input.cycle_weapon {
            self.weapon = self.weapon.next();
            summary.weapon_cycled = true;
        }

        let tick = Tick {
            dt,
            paused: self.paused,
        };

        self.fire_weapon(input, dt, &mut summary);
        self.spawn_asteroid(&mut summary);
        self.asteroid_return_fire(tick, &mut summary);
        self.advance_projectiles(tick);
        self.resolve_projectile_hits(&mut summary);
        self.resolve_enemy_hits(&mut summary);
        self.resolve_consumables(tick, &mut summary);
        self.resolve_asteroids(tick, &mut summary);

        summary.died = was_alive && !self.player.is_alive();
        summary
    }

    fn fire_weapon(&mut self, input: &FrameInput, dt: f32, summary: &mut StepSummary) {
        if self.player.is_alive() && input.fire && !self.paused {
            let shots = self.player.fire(self.weapon, &mut self.shot_timer, dt);
            summary.shots_fired += shots.len();
            self.projectiles.extend(shots);
        } else {
            self.shot_timer
                .settle(self.player.shot_interval(self.weapon));
        }
    }

    fn spawn_asteroid(&mut self, summary: &mut StepSummary) {
        if self.spawn_timer < self.spawn_interval
            || self.asteroids.len() >= self.config.max_asteroids
            || self.paused
        {
            return;
        }
        let shape = self.shape_selection.resolve(&mut self.rng);
        let asteroid = Asteroid::spawn(&mut self.rng, shape, &self.field, &self.config);
        self.asteroids.push(asteroid);
        self.spawn_timer = 0.0;
        self.spawn_interval = self.next_spawn_interval();
        summary.asteroids_spawned += 1;
    }

    fn asteroid_return_fire(&mut self, tick: Tick, summary: &mut StepSummary) {
        if tick.paused {
            return;
        }
        for asteroid in self.asteroids.iter_mut() {
            if let Some(volley) = asteroid.try_volley(tick, &self.config) {
                self.enemy_projectiles.extend(volley);
                summary.volleys += 1;
            }
        }
    }

    fn advance_projectiles(&mut self, tick: Tick) {
        let field = self.field;
        self.projectiles.retain_mut(|p| !p.update(tick, &field));
        self.enemy_projectiles.retain_mut(|p| !p.update(tick, &field));
    }

    /// Each projectile destroys at most the first asteroid it overlaps.
    fn resolve_projectile_hits(&mut self, summary: &mut StepSummary) {
        let mut i = 0;
        while i < self.projectiles.len() {
            let shot = &self.projectiles[i];
            let hit = self.asteroids.iter().position(|a| {
                circles_overlap(shot.position(), shot.radius(), a.position(), a.radius())
            });
            let Some(j) = hit else {
                i += 1;
                continue;
            };
            self.projectiles.remove(i);
            let asteroid = self.asteroids.remove(j);
            if drop_roll(&mut self.rng) > self.config.consumable_drop_threshold {
                self.consumables.push(Consumable::new(
                    &mut self.rng,
                    asteroid.damage(),
                    asteroid.position(),
                    self.config.consumable_value_spread,
                ));
                summary.drops += 1;
            }
            self.player.add_score(asteroid.damage().max(0) as u32);
            summary.kills += 1;
        }
    }

    /// Only the first overlapping enemy projectile lands per frame.
    fn resolve_enemy_hits(&mut self, summary: &mut StepSummary) {
        let ship = self.player.position();
        let ship_radius = self.player.radius();
        let hit = self
            .enemy_projectiles
            .iter()
            .position(|p| circles_overlap(p.position(), p.radius(), ship, ship_radius));
        if let Some(i) = hit {
            let shot = self.enemy_projectiles.remove(i);
            self.player.take_damage(shot.damage());
            summary.enemy_hits += 1;
        }
    }

    /// Ages consumables in order and stops at the first pickup or expiry.
    fn resolve_consumables(&mut self, tick: Tick, summary: &mut StepSummary) {
        let ship = self.player.position();
        let reach = self.config.consumable_pickup_radius + self.player.radius();
        let lifetime = self.config.consumable_lifetime;
        for i in 0..self.consumables.len() {
            let consumable = &mut self.consumables[i];
            consumable.age(tick.effective_dt());
            if consumable.position().distance(ship) < reach {
                let picked = self.consumables.remove(i);
                self.player.take_damage(-picked.value());
                summary.pickups += 1;
                break;
            }
            if consumable.is_expired(lifetime) {
                self.consumables.remove(i);
                summary.consumables_expired += 1;
                break;
            }
        }
    }

    fn resolve_asteroids(&mut self, tick: Tick, summary: &mut StepSummary) {
        let field = self.field;
        let player = &mut self.player;
        let mut collisions = 0;
        self.asteroids.retain_mut(|asteroid| {
            if player.is_alive()
                && circles_overlap(
                    player.position(),
                    player.radius(),
                    asteroid.position(),
                    asteroid.radius(),
                )
            {
                player.take_damage(asteroid.damage());
                collisions += 1;
                return false;
            }
            asteroid.update(tick, &field)
        });
        summary.ship_collisions += collisions;
    }
}

// ── Bevy systems ──────────────────────────────────────────────────────────────

/// Advance the world by the frame time and log anything notable.
pub fn simulation_step_system(
    time: Res<Time>,
    input: Res<FrameInput>,
    mut world: ResMut<GameWorld>,
) {
    let summary = world.step(&input, time.delta_secs());
    log_step_summary(&summary, &world);
}

fn log_step_summary(summary: &StepSummary, world: &GameWorld) {
    if summary.pause_toggled {
        info!("{}", if world.paused { "Paused" } else { "Resumed" });
    }
    if summary.selection_changed {
        info!("Spawning {} asteroids", world.shape_selection.label());
    }
    if summary.weapon_cycled {
        info!("Weapon: {}", world.weapon.label());
    }
    if summary.restarted {
        info!(
            "Restarted; next asteroid in {:.2}s",
            world.spawn_interval - world.spawn_timer
        );
    }
    if summary.died {
        info!("Ship destroyed; final score {}", world.player.score());
    }
    if !summary.is_quiet() {
        debug!("{summary:?}");
    }
}

/// Rebuild the frame's [`DisplayList`] from the world.
pub fn render_world_system(
    world: Res<GameWorld>,
    time: Res<Time>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    mut display: ResMut<DisplayList>,
) {
    let fps = diagnostics
        .as_ref()
        .and_then(|d| d.get(&FrameTimeDiagnosticsPlugin::FPS))
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    display.clear();
    draw_world(&world, &mut *display, fps.round() as u32, time.elapsed_secs());
}
