//! Curated flat API.
//!
//! - Prefer these re-exports in binaries, benches and integration tests.
//! - Breaking changes are allowed when they make call sites clearer.

pub use crate::rand::{
    draw_pair, draw_pairs, PairCfg, PairKind, ReplayToken as PairReplay,
};
pub use crate::segment::{
    dot, in_segment, intersect, intersect_with, perp, try_intersect, Intersection,
    IntersectionKind, ParamAxis, Point, SegCfg, Segment, SegmentError, Vec2,
};

/// Intersect many pairs under one configuration, preserving input order.
pub fn intersect_all(pairs: &[(Segment, Segment)], cfg: SegCfg) -> Vec<Intersection> {
    pairs
        .iter()
        .map(|&(s1, s2)| intersect_with(s1, s2, cfg))
        .collect()
}

/// Count results by kind: `(disjoint, point, overlap)`.
pub fn tally(results: &[Intersection]) -> (usize, usize, usize) {
    results
        .iter()
        .fold((0, 0, 0), |(d, p, o), r| match r.kind() {
            IntersectionKind::Disjoint => (d + 1, p, o),
            IntersectionKind::Point => (d, p + 1, o),
            IntersectionKind::Overlap => (d, p, o + 1),
        })
}
