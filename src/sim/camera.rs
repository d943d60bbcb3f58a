//! Horizontal camera scroll
//!
//! The camera keeps the player's on-screen x between two thresholds. Forward
//! scroll is uncapped; backward scroll moves at most `backward_scroll_cap`
//! per tick and pins the player to the backward threshold, so retreating
//! past it is throttled.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::settings::SimConfig;

/// Accumulated scroll. `screen_x = level_x + offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: f32,
}

/// Scroll applied by one camera update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scroll {
    /// World moved left by this much (player pushed past the forward threshold)
    Forward(f32),
    /// World moved right by this much (player at or behind the backward threshold)
    Backward(f32),
}

impl Camera {
    /// Level-space rect to screen space
    #[inline]
    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.translated(Vec2::new(self.offset, 0.0))
    }

    /// Screen-space x to level space
    #[inline]
    pub fn to_level_x(&self, screen_x: f32) -> f32 {
        screen_x - self.offset
    }

    /// Scroll so the player stays within the thresholds, then pin the
    /// player's on-screen x to the threshold it crossed
    pub fn follow(&mut self, player: &mut Rect, config: &SimConfig) -> Option<Scroll> {
        let screen_x = player.x + self.offset;

        if screen_x >= config.forward_scroll_x {
            let scroll = screen_x - config.forward_scroll_x;
            self.offset -= scroll;
            player.x = self.to_level_x(config.forward_scroll_x);
            return Some(Scroll::Forward(scroll));
        }

        if screen_x <= config.backward_scroll_x {
            let scroll = config
                .backward_scroll_cap
                .min(config.backward_scroll_x - screen_x);
            self.offset += scroll;
            player.x = self.to_level_x(config.backward_scroll_x);
            return Some(Scroll::Backward(scroll));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32) -> Rect {
        Rect::new(x, 0.0, 64.0, 96.0)
    }

    #[test]
    fn test_no_scroll_between_thresholds() {
        let config = SimConfig::default();
        let mut camera = Camera::default();
        let mut player = player_at(400.0);
        assert_eq!(camera.follow(&mut player, &config), None);
        assert_eq!(player.x, 400.0);
        assert_eq!(camera.offset, 0.0);
    }

    #[test]
    fn test_forward_scroll_keeps_level_position() {
        let config = SimConfig::default();
        let mut camera = Camera::default();
        let mut player = player_at(615.0);
        assert_eq!(camera.follow(&mut player, &config), Some(Scroll::Forward(15.0)));
        assert_eq!(camera.offset, -15.0);
        assert_eq!(player.x, 615.0);
        assert_eq!(camera.to_screen(player).x, config.forward_scroll_x);
    }

    #[test]
    fn test_backward_scroll_is_capped() {
        let config = SimConfig::default();
        let mut camera = Camera::default();
        let mut player = player_at(220.0);
        assert_eq!(camera.follow(&mut player, &config), Some(Scroll::Backward(1.0)));
        assert_eq!(camera.offset, 1.0);
        assert_eq!(camera.to_screen(player).x, config.backward_scroll_x);
        // Retreat is throttled to the cap in level space
        assert_eq!(player.x, 229.0);
    }

    #[test]
    fn test_exactly_at_backward_threshold_scrolls_zero() {
        let config = SimConfig::default();
        let mut camera = Camera::default();
        let mut player = player_at(config.backward_scroll_x);
        assert_eq!(camera.follow(&mut player, &config), Some(Scroll::Backward(0.0)));
        assert_eq!(camera.offset, 0.0);
    }
}
