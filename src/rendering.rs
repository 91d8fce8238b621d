//! Display boundary: the [`Canvas`] drawing contract, the per-frame
//! [`DisplayList`] that records it, and the world/HUD draw pass.
//!
//! ## Layer Model
//!
//! | Layer              | Command      | Colour  | Drawn when              |
//! |--------------------|--------------|---------|-------------------------|
//! | Player projectiles | Rect/Circle  | red/white | always                |
//! | Enemy projectiles  | Rect/Circle  | red/white | always                |
//! | Asteroids          | PolyLines    | white   | always                  |
//! | Consumables        | Rect         | pink    | always                  |
//! | Ship               | Sprite       | n/a     | alive, or blink-on      |
//! | FPS                | Text         | red     | always                  |
//! | HP/Weapon/Score    | Text         | mixed   | alive                   |
//! | Game over block    | Text         | white/red | dead                  |
//! | Pause legend       | Text         | purple  | paused                  |
//!
//! Everything is in screen pixels (origin top-left, y down).  The Bevy side
//! of the boundary lives in [`crate::graphics`].

use crate::constants::GLYPH_ADVANCE;
use crate::simulation::GameWorld;
use bevy::prelude::*;

/// Drawing primitives the simulation needs from a display.
pub trait Canvas {
    /// Outline of a regular polygon; `rotation_deg` places the first vertex.
    fn poly_lines(&mut self, center: Vec2, sides: u32, radius: f32, rotation_deg: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Blit `image` untinted with its top-left corner at `top_left`.
    fn sprite(&mut self, image: &Handle<Image>, top_left: Vec2, size: Vec2);
    /// `position` is the top-left corner of the text block; `size` is the
    /// font size in pixels.
    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PolyLines {
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Sprite {
        image: Handle<Image>,
        top_left: Vec2,
        size: Vec2,
    },
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Color,
    },
}

/// Frame-scoped command buffer.  Cleared at the start of every draw pass and
/// consumed by the presenter at the end of the frame, in insertion order
/// (later commands paint over earlier ones).
#[derive(Resource, Default, Debug)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The text command whose string is exactly `needle`, if any.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }
}

impl Canvas for DisplayList {
    fn poly_lines(&mut self, center: Vec2, sides: u32, radius: f32, rotation_deg: f32, color: Color) {
        self.commands.push(DrawCommand::PolyLines {
            center,
            sides,
            radius,
            rotation: rotation_deg,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn sprite(&mut self, image: &Handle<Image>, top_left: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Sprite {
            image: image.clone(),
            top_left,
            size,
        });
    }

    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * GLYPH_ADVANCE
    }
}

/// The six HUD/entity colours, as sRGB bytes.
pub mod palette {
    use bevy::color::Color;

    pub fn white() -> Color {
        Color::srgb_u8(255, 255, 255)
    }

    pub fn red() -> Color {
        Color::srgb_u8(230, 41, 55)
    }

    pub fn pink() -> Color {
        Color::srgb_u8(255, 109, 194)
    }

    pub fn green() -> Color {
        Color::srgb_u8(0, 228, 48)
    }

    pub fn blue() -> Color {
        Color::srgb_u8(0, 121, 241)
    }

    pub fn purple() -> Color {
        Color::srgb_u8(200, 122, 255)
    }
}

// ── Draw pass ─────────────────────────────────────────────────────────────────

/// Legend shown under the pause banner.
pub const CONTROLS_LEGEND: [&str; 7] = [
    "1 - Change asteroid shape to triangle",
    "2 - Change asteroid shape to square",
    "3 - Change asteroid shape to pentagon",
    "4 - Change asteroid shape to hexagon",
    "5 - Change asteroid shape to random",
    "TAB - change weapon",
    "ESC - exit",
];

/// Draw one full frame of `world` into `canvas`.
///
/// `fps` is the displayed frame rate; `elapsed` is wall-clock seconds since
/// start and drives the dead-ship blink.
pub fn draw_world(world: &GameWorld, canvas: &mut impl Canvas, fps: u32, elapsed: f32) {
    for p in &world.projectiles {
        p.draw(canvas);
    }
    for p in &world.enemy_projectiles {
        p.draw(canvas);
    }
    for a in &world.asteroids {
        a.draw(canvas);
    }
    for c in &world.consumables {
        c.draw(canvas);
    }
    let config = world.config();
    world
        .player
        .draw(canvas, elapsed, config.blink_period, config.blink_visible);

    draw_hud(world, canvas, fps);
}

/// Text overlay: FPS, ship status or game-over block, pause legend.
pub fn draw_hud(world: &GameWorld, canvas: &mut impl Canvas, fps: u32) {
    let field = world.field();
    let (w, h) = (field.width, field.height);

    let fps_text = format!("FPS: {fps}");
    let fps_width = canvas.text_width(&fps_text, 20.0);
    canvas.text(&fps_text, Vec2::new(w - fps_width - 10.0, 10.0), 20.0, palette::red());

    let score = format!("Score: {:06}", world.player.score());
    if world.player.is_alive() {
        canvas.text(
            &format!("HP: {}", world.player.hp()),
            Vec2::new(10.0, 10.0),
            20.0,
            palette::green(),
        );
        canvas.text(&score, Vec2::new(10.0, 70.0), 20.0, palette::red());
        canvas.text(
            &format!("Weapon: {}", world.weapon.label()),
            Vec2::new(10.0, 40.0),
            20.0,
            palette::blue(),
        );
    } else {
        // Text height is taken as the font size.
        let game_over = "GAME OVER";
        let restart = "Press R to restart";
        let x_of = |width: f32| (w - width) / 2.0;
        let y_of = |size: f32| (h - size) / 2.0;
        let x = x_of(canvas.text_width(game_over, 40.0));
        canvas.text(game_over, Vec2::new(x, y_of(40.0)), 40.0, palette::white());
        let x = x_of(canvas.text_width(&score, 20.0));
        canvas.text(&score, Vec2::new(x, y_of(20.0) + 50.0), 20.0, palette::white());
        let x = x_of(canvas.text_width(restart, 20.0));
        canvas.text(restart, Vec2::new(x, y_of(20.0) + 100.0), 20.0, palette::red());
    }

    if world.paused {
        centre_text(canvas, w, "PAUSED", 50.0, 60.0);
        centre_text(canvas, w, "Controls", 120.0, 40.0);
        for (i, line) in CONTROLS_LEGEND.iter().enumerate() {
            centre_text(canvas, w, line, 180.0 + 30.0 * i as f32, 20.0);
        }
    }
}

fn centre_text(canvas: &mut impl Canvas, width: f32, text: &str, y: f32, size: f32) {
    let x = (width - canvas.text_width(text, size)) / 2.0;
    canvas.text(text, Vec2::new(x, y), size, palette::purple());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::player::{FrameInput, ShipSprite};

    fn world() -> GameWorld {
        GameWorld::new(
            GameConfig::default(),
            ShipSprite::placeholder(200.0, 160.0),
            42,
        )
    }

    fn text_at(list: &DisplayList, needle: &str) -> (Vec2, f32, Color) {
        match list.find_text(needle) {
            Some(DrawCommand::Text {
                position,
                size,
                color,
                ..
            }) => (*position, *size, *color),
            _ => panic!("no text {needle:?} in {:?}", list.texts().collect::<Vec<_>>()),
        }
    }

    #[test]
    fn text_width_is_monospaced() {
        let list = DisplayList::default();
        assert_eq!(list.text_width("abcd", 20.0), 4.0 * 20.0 * GLYPH_ADVANCE);
        assert_eq!(list.text_width("", 40.0), 0.0);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DisplayList::default();
        list.fill_circle(Vec2::ZERO, 1.0, palette::white());
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn alive_hud_shows_status_lines() {
        let w = world();
        let mut list = DisplayList::default();
        draw_hud(&w, &mut list, 60);

        let (pos, size, color) = text_at(&list, "FPS: 60");
        assert_eq!(size, 20.0);
        assert_eq!(color, palette::red());
        let expected_x = 1000.0 - list.text_width("FPS: 60", 20.0) - 10.0;
        assert!((pos.x - expected_x).abs() < 1e-3);
        assert_eq!(pos.y, 10.0);

        assert_eq!(text_at(&list, "HP: 100").0, Vec2::new(10.0, 10.0));
        assert_eq!(text_at(&list, "Weapon: LASER").0, Vec2::new(10.0, 40.0));
        let (pos, _, color) = text_at(&list, "Score: 000000");
        assert_eq!(pos, Vec2::new(10.0, 70.0));
        assert_eq!(color, palette::red());
        assert!(list.find_text("GAME OVER").is_none());
        assert!(list.find_text("PAUSED").is_none());
    }

    #[test]
    fn dead_hud_shows_game_over_block() {
        let mut w = world();
        w.player.add_score(1234);
        w.player.take_damage(500);
        let mut list = DisplayList::default();
        draw_hud(&w, &mut list, 60);

        assert!(list.find_text("HP: -400").is_none());
        let (pos, size, color) = text_at(&list, "GAME OVER");
        assert_eq!(size, 40.0);
        assert_eq!(color, palette::white());
        assert!((pos.y - 480.0).abs() < 1e-3);
        let (pos, _, _) = text_at(&list, "Score: 001234");
        assert!((pos.y - 540.0).abs() < 1e-3);
        let (pos, _, color) = text_at(&list, "Press R to restart");
        assert!((pos.y - 590.0).abs() < 1e-3);
        assert_eq!(color, palette::red());
    }

    #[test]
    fn paused_hud_lists_controls() {
        let mut w = world();
        w.step(
            &FrameInput {
                toggle_pause: true,
                ..default()
            },
            0.016,
        );
        assert!(w.paused);
        let mut list = DisplayList::default();
        draw_hud(&w, &mut list, 60);

        let (pos, size, color) = text_at(&list, "PAUSED");
        assert_eq!((pos.y, size, color), (50.0, 60.0, palette::purple()));
        assert_eq!(text_at(&list, "Controls").0.y, 120.0);
        for (i, line) in CONTROLS_LEGEND.iter().enumerate() {
            let (pos, size, _) = text_at(&list, line);
            assert_eq!(pos.y, 180.0 + 30.0 * i as f32);
            assert_eq!(size, 20.0);
        }
    }

    #[test]
    fn world_pass_orders_layers() {
        let w = world();
        let mut list = DisplayList::default();
        draw_world(&w, &mut list, 60, 0.0);
        // Empty world: ship sprite first, then the HUD texts.
        assert!(matches!(list.commands()[0], DrawCommand::Sprite { .. }));
        assert!(list.commands()[1..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Text { .. })));
    }
}
