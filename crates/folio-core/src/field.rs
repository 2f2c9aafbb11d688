//! Ambient background field: drifting points joined by faint lines when close.
//!
//! The field is regenerated wholesale on every resize, stepped at a fixed
//! rate no matter how often the host calls [`AmbientField::tick`], and drawn
//! through a [`FieldSurface`].

use crate::connect::{connections, Connection};
use crate::constants::*;
use crate::surface::FieldSurface;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub area_per_point: f32,
    pub max_points: usize,
    pub radius_range: (f32, f32),
    pub speed_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub wrap_margin: f32,
    pub target_fps: f64,
    pub max_step_ms: f64,
    pub connect_limit: usize,
    pub connect_opacity_cap: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_point: FIELD_AREA_PER_POINT,
            max_points: FIELD_MAX_POINTS,
            radius_range: (FIELD_RADIUS_MIN, FIELD_RADIUS_MAX),
            speed_range: (FIELD_SPEED_MIN, FIELD_SPEED_MAX),
            opacity_range: (FIELD_OPACITY_MIN, FIELD_OPACITY_MAX),
            wrap_margin: FIELD_WRAP_MARGIN_PX,
            target_fps: FIELD_TARGET_FPS,
            max_step_ms: FIELD_MAX_STEP_MS,
            connect_limit: CONNECT_POINT_LIMIT,
            connect_opacity_cap: CONNECT_OPACITY_CAP,
        }
    }
}

impl FieldConfig {
    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// Density-based population for a viewport, capped at `max_points`.
    pub fn point_count(&self, width: f32, height: f32) -> usize {
        if !(width > 0.0 && height > 0.0) || !(self.area_per_point > 0.0) {
            return 0;
        }
        let n = (width as f64 * height as f64 / self.area_per_point as f64).floor();
        (n as usize).min(self.max_points)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldPoint {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
    pub opacity: f32,
    pub speed: f32,
    pub direction: f32,
}

impl FieldPoint {
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.direction) * self.speed
    }

    /// Move by `dt_sec` of travel, wrapping across edges of the
    /// `bounds`-sized viewport extended by `margin` on every side.
    pub fn advance(&mut self, dt_sec: f32, bounds: Vec2, margin: f32) {
        self.pos += self.velocity() * dt_sec;
        self.pos.x = wrap(self.pos.x, bounds.x, margin);
        self.pos.y = wrap(self.pos.y, bounds.y, margin);
    }
}

/// Toroidal wrap of `v` onto `[-margin, extent + margin)`.
#[inline]
pub fn wrap(v: f32, extent: f32, margin: f32) -> f32 {
    let span = extent + 2.0 * margin;
    if !(span > 0.0) {
        return v;
    }
    if v > extent + margin || v < -margin {
        (v + margin).rem_euclid(span) - margin
    } else {
        v
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldPhase {
    #[default]
    Uninitialized,
    Sized,
    Running,
}

pub struct AmbientField {
    config: FieldConfig,
    rng: StdRng,
    size: Vec2,
    points: Vec<FieldPoint>,
    phase: FieldPhase,
    last_timestamp_ms: Option<f64>,
    accumulated_ms: f64,
}

impl AmbientField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            size: Vec2::ZERO,
            points: Vec::new(),
            phase: FieldPhase::Uninitialized,
            last_timestamp_ms: None,
            accumulated_ms: 0.0,
        }
    }

    #[inline]
    pub fn points(&self) -> &[FieldPoint] {
        &self.points
    }

    #[inline]
    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Throw away every point and generate a fresh set for the new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.size = Vec2::new(width, height);

        let count = self.config.point_count(width, height);
        let (r0, r1) = self.config.radius_range;
        let (s0, s1) = self.config.speed_range;
        let (o0, o1) = self.config.opacity_range;
        let rng = &mut self.rng;
        self.points = (0..count as u32)
            .map(|id| FieldPoint {
                id,
                pos: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                radius: rng.gen_range(r0..r1),
                color: [
                    rng.gen_range(100..200),
                    rng.gen_range(100..200),
                    rng.gen_range(0..255),
                ],
                opacity: rng.gen_range(o0..=o1),
                speed: rng.gen_range(s0..s1),
                direction: rng.gen_range(0.0..TAU),
            })
            .collect();

        self.phase = FieldPhase::Sized;
        self.last_timestamp_ms = None;
        self.accumulated_ms = 0.0;
        log::debug!(
            "[field] regenerated {} points for {:.0}x{:.0}",
            self.points.len(),
            width,
            height
        );
    }

    /// Feed a host timestamp. Returns `true` when the simulation stepped.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        if self.phase == FieldPhase::Uninitialized {
            return false;
        }
        let Some(last) = self.last_timestamp_ms.replace(timestamp_ms) else {
            return false;
        };
        self.accumulated_ms += (timestamp_ms - last).max(0.0);
        if self.accumulated_ms < self.config.frame_interval_ms() {
            return false;
        }
        let step_ms = self.accumulated_ms.min(self.config.max_step_ms);
        self.accumulated_ms = 0.0;
        self.step((step_ms / 1000.0) as f32);
        self.phase = FieldPhase::Running;
        true
    }

    /// Advance every point by `dt_sec` regardless of the frame clock.
    pub fn step(&mut self, dt_sec: f32) {
        let bounds = self.size;
        let margin = self.config.wrap_margin;
        for p in &mut self.points {
            p.advance(dt_sec, bounds, margin);
        }
    }

    /// Cutoff distance for connections, relative to the viewport.
    pub fn max_connection_distance(&self) -> f32 {
        (self.size.x.min(self.size.y) * CONNECT_DISTANCE_FRACTION)
            .clamp(CONNECT_DISTANCE_MIN_PX, CONNECT_DISTANCE_MAX_PX)
    }

    pub fn connections(&self) -> Vec<Connection> {
        connections(
            &self.points,
            self.max_connection_distance(),
            self.config.connect_opacity_cap,
            self.config.connect_limit,
        )
    }

    pub fn render(&self, surface: &mut impl FieldSurface) {
        if !(self.size.x > 0.0 && self.size.y > 0.0) {
            return;
        }
        surface.clear(self.size.x, self.size.y);
        for p in &self.points {
            surface.fill_circle(p.pos, p.radius, p.color, p.opacity);
        }
        for c in self.connections() {
            surface.stroke_line(c.from, c.to, CONNECT_LINE_WIDTH, CONNECT_COLOR, c.opacity);
        }
    }
}
