//! Drawing seam between the field simulation and whatever paints it.

use glam::Vec2;

/// Minimal 2D drawing target. The web front-end implements this over
/// `CanvasRenderingContext2d`; tests record the calls.
pub trait FieldSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, rgb: [u8; 3], alpha: f32);
}

/// CSS `rgba()` string for a color and alpha.
#[inline]
pub fn css_rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], alpha)
}
