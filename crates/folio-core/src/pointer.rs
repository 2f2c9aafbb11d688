//! Cosmetic pointer effects: the cursor follower dot and the hero parallax.

use crate::constants::{
    CURSOR_SCROLLED_SCALE, CURSOR_SIZE_PX, MOBILE_BREAKPOINT_PX, PARALLAX_MIN_WIDTH_PX,
    PARALLAX_STRENGTH,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub x: f64,
    pub y: f64,
}

impl CursorFollower {
    /// The follower only shows on desktop-width viewports.
    #[inline]
    pub fn enabled_for(viewport_width: f64) -> bool {
        viewport_width >= MOBILE_BREAKPOINT_PX
    }

    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn scale(scrolled: bool) -> f64 {
        if scrolled {
            CURSOR_SCROLLED_SCALE
        } else {
            1.0
        }
    }

    /// CSS transform centering the dot on the pointer.
    pub fn transform(&self, scrolled: bool) -> String {
        let half = CURSOR_SIZE_PX / 2.0;
        format!(
            "translate({}px, {}px) scale({})",
            self.x - half,
            self.y - half,
            Self::scale(scrolled)
        )
    }
}

#[inline]
pub fn parallax_enabled_for(viewport_width: f64) -> bool {
    viewport_width >= PARALLAX_MIN_WIDTH_PX
}

/// Offset for hero decorations: zero with the pointer at the viewport
/// center, `±strength / 2` at the edges.
pub fn parallax_offset(pointer: Vec2, viewport: Vec2, strength: f32) -> Vec2 {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return Vec2::ZERO;
    }
    (pointer / viewport - Vec2::splat(0.5)) * strength
}

#[inline]
pub fn default_parallax_offset(pointer: Vec2, viewport: Vec2) -> Vec2 {
    parallax_offset(pointer, viewport, PARALLAX_STRENGTH)
}
