//! Ship drawing.

use super::state::PlayerShip;
use crate::rendering::Canvas;

impl PlayerShip {
    /// Blit the sprite centred on the ship at its draw scale.
    ///
    /// A dead ship blinks: it is drawn only while
    /// `elapsed mod blink_period <= blink_visible`.
    pub fn draw(
        &self,
        canvas: &mut impl Canvas,
        elapsed: f32,
        blink_period: f32,
        blink_visible: f32,
    ) {
        if !self.alive && elapsed % blink_period > blink_visible {
            return;
        }
        let size = self.sprite.size * self.scale;
        canvas.sprite(&self.sprite.image, self.position - size * 0.5, size);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::player::{PlayerShip, ShipSprite};
    use crate::rendering::{DisplayList, DrawCommand};
    use bevy::prelude::*;

    fn ship() -> PlayerShip {
        PlayerShip::new(
            Vec2::new(500.0, 500.0),
            ShipSprite::placeholder(200.0, 160.0),
            &GameConfig::default(),
        )
    }

    fn drawn(ship: &PlayerShip, elapsed: f32) -> bool {
        let mut list = DisplayList::default();
        ship.draw(&mut list, elapsed, 0.4, 0.2);
        !list.is_empty()
    }

    #[test]
    fn sprite_is_centred_and_scaled() {
        let mut list = DisplayList::default();
        ship().draw(&mut list, 0.0, 0.4, 0.2);
        match &list.commands()[0] {
            DrawCommand::Sprite { top_left, size, .. } => {
                assert_eq!(*size, Vec2::new(50.0, 40.0));
                assert_eq!(*top_left, Vec2::new(475.0, 480.0));
            }
            other => panic!("expected sprite, got {other:?}"),
        }
    }

    #[test]
    fn alive_ship_always_drawn() {
        let s = ship();
        assert!(drawn(&s, 0.3));
        assert!(drawn(&s, 0.1));
    }

    #[test]
    fn dead_ship_blinks() {
        let mut s = ship();
        s.take_damage(100);
        assert!(drawn(&s, 0.1));
        assert!(drawn(&s, 0.5));
        assert!(!drawn(&s, 0.3));
        assert!(!drawn(&s, 0.7));
    }
}
