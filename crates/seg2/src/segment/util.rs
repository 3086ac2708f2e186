use super::types::{Point, Segment, Vec2};

/// `a · b`.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// 2D cross product `a.x·b.y − a.y·b.x`; zero iff `a` and `b` are parallel.
#[inline]
pub fn perp(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Whether `p`, assumed collinear with `s`, lies within the extent of `s`.
///
/// Tests the x-range unless `s` is vertical (`p0.x == p1.x`), then the y-range.
/// Endpoint order does not matter. Bounds are inclusive.
pub fn in_segment(p: Point, s: &Segment) -> bool {
    if s.p0.x != s.p1.x {
        within(p.x, s.p0.x, s.p1.x)
    } else {
        within(p.y, s.p0.y, s.p1.y)
    }
}

#[inline]
fn within(c: f64, a: f64, b: f64) -> bool {
    (a <= c && c <= b) || (a >= c && c >= b)
}
