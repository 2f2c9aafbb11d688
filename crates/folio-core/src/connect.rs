use crate::field::FieldPoint;
use glam::Vec2;

/// A line between two nearby points, rebuilt every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: u32,
    pub b: u32,
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Opacity for a pair at `distance`: `cap` when touching, falling linearly to
/// zero at `max_distance`. `None` at or beyond the cutoff.
#[inline]
pub fn connection_opacity(distance: f32, max_distance: f32, cap: f32) -> Option<f32> {
    if !(max_distance > 0.0) || !(distance < max_distance) {
        return None;
    }
    Some(cap * (1.0 - distance / max_distance))
}

/// Pairwise proximity test over the first `limit` points. Each unordered pair
/// is considered once.
pub fn connections(
    points: &[FieldPoint],
    max_distance: f32,
    cap: f32,
    limit: usize,
) -> Vec<Connection> {
    let considered = &points[..points.len().min(limit)];
    let mut out = Vec::new();
    for (i, p) in considered.iter().enumerate() {
        for q in &considered[i + 1..] {
            let d = p.pos.distance(q.pos);
            if let Some(opacity) = connection_opacity(d, max_distance, cap) {
                out.push(Connection {
                    a: p.id,
                    b: q.id,
                    from: p.pos,
                    to: q.pos,
                    opacity,
                });
            }
        }
    }
    out
}
