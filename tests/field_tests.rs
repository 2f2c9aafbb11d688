// Host-side tests for the ambient field simulation and its rendering.

use folio_core::{
    connection_opacity, connections, wrap, AmbientField, FieldConfig, FieldPhase, FieldPoint,
    FieldSurface,
};
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    circles: Vec<(Vec2, f32, f32)>,
    lines: Vec<(Vec2, Vec2, f32)>,
}

impl FieldSurface for RecordingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, _rgb: [u8; 3], alpha: f32) {
        self.circles.push((center, radius, alpha));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, _rgb: [u8; 3], alpha: f32) {
        self.lines.push((from, to, alpha));
    }
}

fn field() -> AmbientField {
    AmbientField::new(FieldConfig::default(), 42)
}

fn point(id: u32, x: f32, y: f32) -> FieldPoint {
    FieldPoint {
        id,
        pos: Vec2::new(x, y),
        radius: 2.0,
        color: [150, 150, 200],
        opacity: 0.3,
        speed: 10.0,
        direction: 0.0,
    }
}

#[test]
fn zero_viewport_produces_nothing() {
    let mut f = field();
    f.resize(0.0, 0.0);
    assert!(f.points().is_empty());
    assert_eq!(f.phase(), FieldPhase::Sized);

    let mut s = RecordingSurface::default();
    f.render(&mut s);
    assert_eq!(s.clears, 0);
    assert!(s.circles.is_empty() && s.lines.is_empty());

    f.tick(0.0);
    f.tick(100.0);
    assert!(f.points().is_empty());
}

#[test]
fn render_before_first_resize_draws_nothing() {
    let f = field();
    assert_eq!(f.phase(), FieldPhase::Uninitialized);
    let mut s = RecordingSurface::default();
    f.render(&mut s);
    assert_eq!(s.clears, 0);
}

#[test]
fn density_sets_point_count() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    assert_eq!(f.points().len(), 50);

    f.resize(100.0, 100.0);
    assert_eq!(f.points().len(), 0);

    f.resize(4000.0, 4000.0);
    assert_eq!(f.points().len(), 150);
}

#[test]
fn generated_points_respect_ranges() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    for (i, p) in f.points().iter().enumerate() {
        assert_eq!(p.id, i as u32);
        assert!((0.0..1000.0).contains(&p.pos.x), "x={}", p.pos.x);
        assert!((0.0..1000.0).contains(&p.pos.y), "y={}", p.pos.y);
        assert!((1.0..4.0).contains(&p.radius));
        assert!((0.1..=0.4).contains(&p.opacity));
        assert!((0.0..TAU).contains(&p.direction));
        assert!(p.speed > 0.0);
        assert!(p.color[0] >= 100 && p.color[0] < 200);
        assert!(p.color[1] >= 100 && p.color[1] < 200);
    }
}

#[test]
fn resize_replaces_the_whole_set() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    let before: Vec<Vec2> = f.points().iter().map(|p| p.pos).collect();
    f.resize(2000.0, 1000.0);
    assert_eq!(f.points().len(), 100);
    assert_eq!(f.points()[0].id, 0);
    let after: Vec<Vec2> = f.points().iter().take(50).map(|p| p.pos).collect();
    assert_ne!(before, after);
}

#[test]
fn tick_is_throttled_to_target_rate() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    let start: Vec<Vec2> = f.points().iter().map(|p| p.pos).collect();

    assert!(!f.tick(0.0), "first tick only anchors the clock");
    assert!(!f.tick(16.0));
    assert_eq!(f.phase(), FieldPhase::Sized);
    let held: Vec<Vec2> = f.points().iter().map(|p| p.pos).collect();
    assert_eq!(start, held);

    assert!(f.tick(34.0));
    assert_eq!(f.phase(), FieldPhase::Running);
    let moved: Vec<Vec2> = f.points().iter().map(|p| p.pos).collect();
    assert_ne!(start, moved);

    // accumulator was reset by the step
    assert!(!f.tick(50.0));
    assert!(f.tick(68.0));
}

#[test]
fn step_covers_accumulated_time() {
    let mut a = field();
    let mut b = field();
    a.resize(1000.0, 1000.0);
    b.resize(1000.0, 1000.0);

    a.tick(0.0);
    a.tick(20.0);
    a.tick(40.0);
    b.step(0.040);

    for (p, q) in a.points().iter().zip(b.points()) {
        assert!(p.pos.distance(q.pos) < 1e-3);
    }
}

#[test]
fn tick_before_resize_is_inert() {
    let mut f = field();
    assert!(!f.tick(0.0));
    assert!(!f.tick(100.0));
    assert_eq!(f.phase(), FieldPhase::Uninitialized);
    assert!(f.points().is_empty());

    // earlier ticks did not anchor the clock
    f.resize(1000.0, 1000.0);
    assert!(!f.tick(200.0));
    assert!(f.tick(240.0));
}

#[test]
fn tick_at_exactly_one_interval_steps() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    f.tick(0.0);
    assert!(f.tick(1000.0 / 30.0));
}

#[test]
fn stalled_step_is_capped() {
    let mut a = field();
    let mut b = field();
    a.resize(1000.0, 1000.0);
    b.resize(1000.0, 1000.0);

    a.tick(0.0);
    assert!(a.tick(10_000.0));
    b.step(0.25);

    for (p, q) in a.points().iter().zip(b.points()) {
        assert!(p.pos.distance(q.pos) < 1e-3);
    }
}

#[test]
fn resize_resets_clock_without_stopping() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    f.tick(0.0);
    assert!(f.tick(40.0));
    f.resize(800.0, 600.0);
    assert_eq!(f.phase(), FieldPhase::Sized);
    assert!(!f.tick(80.0));
    assert!(f.tick(120.0));
    assert_eq!(f.phase(), FieldPhase::Running);
}

#[test]
fn crossing_right_edge_wraps_to_left() {
    let mut p = point(0, 998.0, 500.0);
    p.speed = 100.0;
    p.advance(0.1, Vec2::new(1000.0, 1000.0), 5.0);
    // 1008 is 3px past the right margin: reappears 3px in from the left margin
    assert!((p.pos.x - -2.0).abs() < 1e-3, "x={}", p.pos.x);
    assert!(p.pos.x <= 0.0);
}

#[test]
fn ticking_carries_a_point_across_the_right_edge() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    let (idx, _) = f
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.direction.cos()))
        .fold((0, f32::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });
    let dx = f.points()[idx].velocity().x * 0.25;
    assert!(dx > 0.0);

    f.tick(0.0);
    let mut wrapped = false;
    for k in 1..20_000 {
        let prev = f.points()[idx].pos.x;
        assert!(f.tick(k as f64 * 250.0));
        let x = f.points()[idx].pos.x;
        if x < prev {
            assert!((x - (prev + dx - 1010.0)).abs() < 1e-2, "prev={} x={}", prev, x);
            assert!((-5.0..=0.0).contains(&x), "x={}", x);
            wrapped = true;
            break;
        }
    }
    assert!(wrapped);
}

#[test]
fn wrap_is_toroidal_on_both_edges() {
    assert_eq!(wrap(500.0, 1000.0, 5.0), 500.0);
    assert_eq!(wrap(1004.0, 1000.0, 5.0), 1004.0);
    assert!((wrap(-7.0, 1000.0, 5.0) - 1003.0).abs() < 1e-3);
    assert!((wrap(1008.0, 1000.0, 5.0) - -2.0).abs() < 1e-3);
}

#[test]
fn long_runs_stay_inside_wrapped_bounds() {
    let mut f = field();
    f.resize(1000.0, 600.0);
    for _ in 0..200 {
        f.step(0.5);
    }
    for p in f.points() {
        assert!(p.pos.is_finite());
        assert!(p.pos.x >= -5.0 && p.pos.x <= 1005.0, "x={}", p.pos.x);
        assert!(p.pos.y >= -5.0 && p.pos.y <= 605.0, "y={}", p.pos.y);
    }
}

#[test]
fn close_pair_connects_once() {
    let pts = [point(0, 100.0, 100.0), point(1, 130.0, 140.0)];
    let c = connections(&pts, 100.0, 0.4, 50);
    assert_eq!(c.len(), 1);
    assert_eq!((c[0].a, c[0].b), (0, 1));
    // distance 50
    assert!((c[0].opacity - 0.2).abs() < 1e-6);
    assert!(c[0].opacity > 0.0 && c[0].opacity <= 0.4);
}

#[test]
fn far_pair_does_not_connect() {
    let pts = [point(0, 0.0, 0.0), point(1, 150.0, 0.0)];
    assert!(connections(&pts, 100.0, 0.4, 50).is_empty());
    assert_eq!(connection_opacity(100.0, 100.0, 0.4), None);
}

#[test]
fn coincident_points_get_full_cap() {
    let pts = [point(0, 10.0, 10.0), point(1, 10.0, 10.0)];
    let c = connections(&pts, 100.0, 0.4, 50);
    assert_eq!(c.len(), 1);
    assert_eq!(c[0].opacity, 0.4);
}

#[test]
fn only_leading_points_are_tested_pairwise() {
    let pts: Vec<FieldPoint> = (0..60).map(|i| point(i, 10.0, 10.0)).collect();
    let c = connections(&pts, 100.0, 0.4, 50);
    assert_eq!(c.len(), 50 * 49 / 2);
    assert!(c.iter().all(|c| c.a < 50 && c.b < 50));
}

#[test]
fn connection_distance_scales_with_viewport() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    assert_eq!(f.max_connection_distance(), 140.0);
    f.resize(800.0, 600.0);
    assert!((f.max_connection_distance() - 90.0).abs() < 1e-4);
    f.resize(500.0, 300.0);
    assert_eq!(f.max_connection_distance(), 60.0);
}

#[test]
fn render_draws_points_then_connections() {
    let mut f = field();
    f.resize(1000.0, 1000.0);
    let mut s = RecordingSurface::default();
    f.render(&mut s);

    assert_eq!(s.clears, 1);
    assert_eq!(s.circles.len(), 50);
    assert_eq!(s.lines.len(), f.connections().len());
    for (c, r, a) in &s.circles {
        assert!(c.is_finite() && r.is_finite() && a.is_finite());
    }
    for (from, to, a) in &s.lines {
        assert!(from.is_finite() && to.is_finite());
        assert!(*a > 0.0 && *a <= 0.4);
    }
}

#[test]
fn same_seed_same_field() {
    let mut a = field();
    let mut b = field();
    a.resize(1200.0, 900.0);
    b.resize(1200.0, 900.0);
    assert_eq!(a.points(), b.points());
}
