//! Property tests for `intersect`: symmetry, witness placement, an independent
//! orientation check, and exact lattice cases for collinear and degenerate input.

use nalgebra::Vector2;
use proptest::prelude::*;
use seg2::api::*;

fn coord() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

fn segment() -> impl Strategy<Value = Segment> {
    (coord(), coord(), coord(), coord())
        .prop_map(|(x0, y0, x1, y1)| Segment::from_coords(x0, y0, x1, y1))
}

/// Lattice line `base + m·dir` with a non-zero direction.
fn lattice_line() -> impl Strategy<Value = (Vector2<i64>, Vector2<i64>)> {
    (-5i64..=5, -5i64..=5, -3i64..=3, -3i64..=3)
        .prop_filter("non-zero direction", |&(_, _, dx, dy)| dx != 0 || dy != 0)
        .prop_map(|(bx, by, dx, dy)| (Vector2::new(bx, by), Vector2::new(dx, dy)))
}

fn on_line(base: Vector2<i64>, dir: Vector2<i64>, m: i64) -> Point {
    let p = base + dir * m;
    Vector2::new(p.x as f64, p.y as f64)
}

fn orient(a: Point, b: Point, c: Point) -> f64 {
    perp(b - a, c - a)
}

fn dist_to_segment(p: Point, s: &Segment) -> f64 {
    let d = s.direction();
    let dd = dot(d, d);
    let t = if dd > 0.0 {
        (dot(p - s.p0, d) / dd).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (p - s.point_at(t)).norm()
}

/// Sine of the angle between the two directions, or 0 for a zero-length input.
fn sin_angle(s1: &Segment, s2: &Segment) -> f64 {
    let (u, v) = (s1.direction(), s2.direction());
    let n = u.norm() * v.norm();
    if n == 0.0 {
        0.0
    } else {
        perp(u, v).abs() / n
    }
}

/// Expected result for two segments on one lattice line, from their parameter ranges.
fn lattice_expected(base: Vector2<i64>, dir: Vector2<i64>, m: [i64; 4]) -> Intersection {
    let lo = m[0].min(m[1]).max(m[2].min(m[3]));
    let hi = m[0].max(m[1]).min(m[2].max(m[3]));
    if lo > hi {
        Intersection::Disjoint
    } else if lo == hi {
        Intersection::Point(on_line(base, dir, lo))
    } else {
        Intersection::Overlap(on_line(base, dir, lo), on_line(base, dir, hi))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn swapping_arguments_is_symmetric(s1 in segment(), s2 in segment()) {
        prop_assume!(sin_angle(&s1, &s2) > 1e-3);
        let fwd = intersect(s1, s2);
        let bwd = intersect(s2, s1);
        prop_assert_eq!(fwd.kind(), bwd.kind());
        prop_assert!(fwd.approx_eq(&bwd, 1e-9), "{:?} vs {:?}", fwd, bwd);
    }

    #[test]
    fn point_witness_lies_on_both_segments(s1 in segment(), s2 in segment()) {
        prop_assume!(sin_angle(&s1, &s2) > 1e-3);
        if let Intersection::Point(p) = intersect(s1, s2) {
            let (u, v) = (s1.direction(), s2.direction());
            let w = s1.p0 - s2.p0;
            let s_i = perp(v, w) / perp(u, v);
            prop_assert!((0.0..=1.0).contains(&s_i));
            prop_assert!((p - s1.point_at(s_i)).norm() < 1e-12);
            prop_assert!(dist_to_segment(p, &s1) < 1e-9);
            prop_assert!(dist_to_segment(p, &s2) < 1e-9);
        }
    }

    #[test]
    fn agrees_with_orientation_test(s1 in segment(), s2 in segment()) {
        let o1 = orient(s1.p0, s1.p1, s2.p0);
        let o2 = orient(s1.p0, s1.p1, s2.p1);
        let o3 = orient(s2.p0, s2.p1, s1.p0);
        let o4 = orient(s2.p0, s2.p1, s1.p1);
        prop_assume!([o1, o2, o3, o4].iter().all(|o| o.abs() > 1e-6));
        let separated = o1 * o2 > 0.0 || o3 * o4 > 0.0;
        let r = intersect(s1, s2);
        if separated {
            prop_assert!(r.is_disjoint(), "{:?}", r);
        } else {
            prop_assert!(matches!(r, Intersection::Point(_)), "{:?}", r);
        }
    }

    #[test]
    fn collinear_lattice_overlap_is_range_intersection(
        (base, dir) in lattice_line(),
        m in prop::array::uniform4(-6i64..=6),
    ) {
        let s1 = Segment::new(on_line(base, dir, m[0]), on_line(base, dir, m[1]));
        let s2 = Segment::new(on_line(base, dir, m[2]), on_line(base, dir, m[3]));
        let expected = lattice_expected(base, dir, m);
        for axis in [ParamAxis::FirstNonZero, ParamAxis::Dominant] {
            let cfg = SegCfg::default().with_param_axis(axis);
            let fwd = intersect_with(s1, s2, cfg);
            let bwd = intersect_with(s2, s1, cfg);
            prop_assert!(fwd.approx_eq(&expected, 1e-9), "{:?} vs {:?}", fwd, expected);
            prop_assert!(bwd.approx_eq(&expected, 1e-9), "{:?} vs {:?}", bwd, expected);
            for p in fwd.points() {
                prop_assert!(dist_to_segment(p, &s1) < 1e-9);
                prop_assert!(dist_to_segment(p, &s2) < 1e-9);
            }
        }
    }

    #[test]
    fn degenerate_point_hits_iff_inside_extent(
        (base, dir) in lattice_line(),
        m in -6i64..=6,
        a in -6i64..=6,
        b in -6i64..=6,
        offset in -2i64..=2,
    ) {
        let normal = Vector2::new(-dir.y, dir.x);
        let p = {
            let q = base + dir * m + normal * offset;
            Vector2::new(q.x as f64, q.y as f64)
        };
        let s = Segment::new(on_line(base, dir, a), on_line(base, dir, b));
        let r = intersect(Segment::new(p, p), s);
        let inside = offset == 0 && a.min(b) <= m && m <= a.max(b);
        if inside {
            prop_assert_eq!(r, Intersection::Point(p));
        } else {
            prop_assert!(r.is_disjoint(), "{:?}", r);
        }
        prop_assert_eq!(intersect(s, Segment::new(p, p)), r);
    }
}

#[test]
fn seeded_crossings_meet_on_both_segments() {
    let cfg = PairCfg {
        kind: PairKind::Crossing,
        half_extent: 50.0,
    };
    for (s1, s2) in draw_pairs(cfg, 2025, 500) {
        match intersect(s1, s2) {
            Intersection::Point(p) => {
                assert!(dist_to_segment(p, &s1) < 1e-9);
                assert!(dist_to_segment(p, &s2) < 1e-9);
            }
            other => panic!("expected crossing for {s1} × {s2}, got {other:?}"),
        }
    }
}

#[test]
fn seeded_degenerates_follow_in_segment() {
    let cfg = PairCfg {
        kind: PairKind::Degenerate,
        half_extent: 6.0,
    };
    for (s1, s2) in draw_pairs(cfg, 9, 500) {
        let r = intersect(s1, s2);
        if s2.is_degenerate() {
            assert_eq!(r.is_disjoint(), s1.p0 != s2.p0);
        } else {
            assert_eq!(r.is_disjoint(), !in_segment(s1.p0, &s2));
        }
    }
}

#[test]
fn generic_pairs_never_overlap() {
    // Random float endpoints are collinear with probability zero.
    let results = intersect_all(&draw_pairs(PairCfg::default(), 1, 1000), SegCfg::default());
    let (d, p, o) = tally(&results);
    assert_eq!(o, 0);
    assert_eq!(d + p, 1000);
    assert!(p > 0 && d > 0);
}
