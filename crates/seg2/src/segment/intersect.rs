//! Intersection of two finite segments.
//!
//! With `u = S1.p1 − S1.p0`, `v = S2.p1 − S2.p0`, `w = S1.p0 − S2.p0` and
//! `D = perp(u, v)`:
//! - `|D| < eps_parallel`: parallel or degenerate. Non-collinear lines are
//!   disjoint; collinear inputs are resolved by zero-length checks or by
//!   clipping the parameters of S1 on S2 to `[0,1]`.
//! - otherwise the infinite lines meet at `sI = perp(v,w)/D` on S1 and
//!   `tI = perp(u,w)/D` on S2; both must lie in `[0,1]`.
//!
//! Numerics
//! - Only the parallel test uses an epsilon. Collinearity, zero-length and
//!   point identity checks use exact `f64` equality, so inputs that are
//!   collinear only up to rounding classify as `Disjoint`.

use super::types::{Intersection, ParamAxis, Point, SegCfg, Segment, SegmentError, Vec2};
use super::util::{dot, in_segment, perp};

/// Intersect with the default configuration.
#[inline]
pub fn intersect(s1: Segment, s2: Segment) -> Intersection {
    intersect_with(s1, s2, SegCfg::default())
}

/// Intersect under `cfg`. Any non-finite coordinate yields `Disjoint`.
pub fn intersect_with(s1: Segment, s2: Segment, cfg: SegCfg) -> Intersection {
    if !(s1.is_finite() && s2.is_finite()) {
        return Intersection::Disjoint;
    }
    let u = s1.direction();
    let v = s2.direction();
    let w = s1.p0 - s2.p0;
    let d = perp(u, v);

    if d.abs() < cfg.eps_parallel {
        return parallel_case(s1, s2, u, v, w, cfg.param_axis);
    }

    let s_i = perp(v, w) / d;
    if !(0.0..=1.0).contains(&s_i) {
        return Intersection::Disjoint;
    }
    let t_i = perp(u, w) / d;
    if !(0.0..=1.0).contains(&t_i) {
        return Intersection::Disjoint;
    }
    Intersection::Point(s1.p0 + u * s_i)
}

/// Checked variant: rejects NaN/infinite coordinates instead of reporting `Disjoint`.
pub fn try_intersect(
    s1: Segment,
    s2: Segment,
    cfg: SegCfg,
) -> Result<Intersection, SegmentError> {
    if !s1.is_finite() {
        return Err(SegmentError::NonFinite { index: 1 });
    }
    if !s2.is_finite() {
        return Err(SegmentError::NonFinite { index: 2 });
    }
    Ok(intersect_with(s1, s2, cfg))
}

fn parallel_case(
    s1: Segment,
    s2: Segment,
    u: Vec2,
    v: Vec2,
    w: Vec2,
    axis: ParamAxis,
) -> Intersection {
    if perp(u, w) != 0.0 || perp(v, w) != 0.0 {
        return Intersection::Disjoint;
    }
    let du = dot(u, u);
    let dv = dot(v, v);

    if du == 0.0 && dv == 0.0 {
        return if s1.p0 == s2.p0 {
            Intersection::Point(s1.p0)
        } else {
            Intersection::Disjoint
        };
    }
    if du == 0.0 {
        return if in_segment(s1.p0, &s2) {
            Intersection::Point(s1.p0)
        } else {
            Intersection::Disjoint
        };
    }
    if dv == 0.0 {
        return if in_segment(s2.p0, &s1) {
            Intersection::Point(s2.p0)
        } else {
            Intersection::Disjoint
        };
    }

    // Parameters of S1's endpoints along S2.
    let w2 = s1.p1 - s2.p0;
    let use_x = match axis {
        ParamAxis::FirstNonZero => v.x != 0.0,
        ParamAxis::Dominant => v.x.abs() >= v.y.abs(),
    };
    let (mut t0, mut t1) = if use_x {
        (w.x / v.x, w2.x / v.x)
    } else {
        (w.y / v.y, w2.y / v.y)
    };
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    if t0 > 1.0 || t1 < 0.0 {
        return Intersection::Disjoint;
    }
    let t0 = t0.max(0.0);
    let t1 = t1.min(1.0);

    let at = |t: f64| -> Point { s2.p0 + v * t };
    if t0 == t1 {
        Intersection::Point(at(t0))
    } else {
        Intersection::Overlap(at(t0), at(t1))
    }
}
