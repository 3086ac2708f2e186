//! Seeded segment-pair samplers (replay tokens).
//!
//! Purpose
//! - Deterministic pair streams for property sweeps and benchmarks, one per
//!   geometric situation the intersector distinguishes.
//!
//! Model
//! - `Generic`: all four endpoints uniform in `[-h, h]²`.
//! - `Crossing`: two directions through a shared point strictly inside both segments.
//! - `Collinear`: integer-lattice points on a shared lattice line, so every
//!   product in the parallel branch is exact.
//! - `Touching`: the second segment starts at an endpoint of the first.
//! - `Degenerate`: the first segment is a single lattice point on the second's line.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Segment`, `intersect`

use crate::segment::{Point, Segment};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Geometric situation to sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairKind {
    Generic,
    Crossing,
    Collinear,
    Touching,
    Degenerate,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PairCfg {
    pub kind: PairKind,
    /// Half side of the sampling box. Lattice kinds round it down (min 2).
    pub half_extent: f64,
}

impl Default for PairCfg {
    fn default() -> Self {
        Self {
            kind: PairKind::Generic,
            half_extent: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one pair for `tok`. The same `(cfg, tok)` always yields the same pair.
pub fn draw_pair(cfg: PairCfg, tok: ReplayToken) -> (Segment, Segment) {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.abs().max(1e-6);
    match cfg.kind {
        PairKind::Generic => (uniform_segment(&mut rng, h), uniform_segment(&mut rng, h)),
        PairKind::Crossing => crossing(&mut rng, h),
        PairKind::Collinear => collinear(&mut rng, lattice_extent(h)),
        PairKind::Touching => touching(&mut rng, h),
        PairKind::Degenerate => degenerate(&mut rng, lattice_extent(h)),
    }
}

/// `n` consecutive draws with indices `0..n`.
pub fn draw_pairs(cfg: PairCfg, seed: u64, n: usize) -> Vec<(Segment, Segment)> {
    (0..n as u64)
        .map(|index| draw_pair(cfg, ReplayToken { seed, index }))
        .collect()
}

fn uniform_point<R: Rng>(rng: &mut R, h: f64) -> Point {
    Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
}

fn uniform_segment<R: Rng>(rng: &mut R, h: f64) -> Segment {
    Segment::new(uniform_point(rng, h), uniform_point(rng, h))
}

#[inline]
fn unit_dir(theta: f64) -> Vector2<f64> {
    Vector2::new(theta.cos(), theta.sin())
}

fn crossing<R: Rng>(rng: &mut R, h: f64) -> (Segment, Segment) {
    let c = uniform_point(rng, h * 0.5);
    let a = rng.gen::<f64>() * std::f64::consts::PI;
    // Keep the second direction well away from parallel.
    let b = a + rng.gen_range(0.2..(std::f64::consts::PI - 0.2));
    let (da, db) = (unit_dir(a), unit_dir(b));
    let mut arm = |d: Vector2<f64>| {
        let back = rng.gen_range(0.1..1.0) * h * 0.5;
        let fwd = rng.gen_range(0.1..1.0) * h * 0.5;
        Segment::new(c - d * back, c + d * fwd)
    };
    (arm(da), arm(db))
}

fn touching<R: Rng>(rng: &mut R, h: f64) -> (Segment, Segment) {
    let s1 = uniform_segment(rng, h);
    let p = if rng.gen::<bool>() { s1.p1 } else { s1.p0 };
    (s1, Segment::new(p, uniform_point(rng, h)))
}

fn lattice_extent(h: f64) -> i64 {
    (h.floor() as i64).max(2)
}

/// Base point and primitive-ish direction of a lattice line.
fn lattice_line<R: Rng>(rng: &mut R, k: i64) -> (Vector2<i64>, Vector2<i64>) {
    let base = Vector2::new(rng.gen_range(-k..=k), rng.gen_range(-k..=k));
    let mut dir = Vector2::new(rng.gen_range(-3..=3i64), rng.gen_range(-3..=3i64));
    if dir == Vector2::zeros() {
        dir = Vector2::new(1, 0);
    }
    (base, dir)
}

fn lattice_point(base: Vector2<i64>, dir: Vector2<i64>, m: i64) -> Point {
    let p = base + dir * m;
    Vector2::new(p.x as f64, p.y as f64)
}

fn collinear<R: Rng>(rng: &mut R, k: i64) -> (Segment, Segment) {
    let (base, dir) = lattice_line(rng, k);
    let mut m = [0i64; 4];
    for slot in &mut m {
        *slot = rng.gen_range(-k..=k);
    }
    let at = |i: usize| lattice_point(base, dir, m[i]);
    (Segment::new(at(0), at(1)), Segment::new(at(2), at(3)))
}

fn degenerate<R: Rng>(rng: &mut R, k: i64) -> (Segment, Segment) {
    let (base, dir) = lattice_line(rng, k);
    let p = lattice_point(base, dir, rng.gen_range(-k..=k));
    let s2 = Segment::new(
        lattice_point(base, dir, rng.gen_range(-k..=k)),
        lattice_point(base, dir, rng.gen_range(-k..=k)),
    );
    (Segment::new(p, p), s2)
}
