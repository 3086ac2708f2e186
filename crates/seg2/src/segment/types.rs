//! Value types for segment intersection.
//!
//! - `Segment`: ordered endpoint pair `(p0, p1)` parameterized as `p0 + t·(p1 − p0)`.
//! - `Intersection`: tagged result carrying only the witnesses of its variant.
//! - `SegCfg`: the parallel-determinant epsilon and the collinear parameter axis.
//!
//! Code cross-refs: `intersect::{intersect, intersect_with, try_intersect}`, `util::in_segment`

use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

/// Position in the plane.
pub type Point = Vector2<f64>;
/// Displacement between two points.
pub type Vec2 = Vector2<f64>;

/// Finite segment from `p0` to `p1`. Zero-length segments are valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
    #[inline]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            p0: Vector2::new(x0, y0),
            p1: Vector2::new(x1, y1),
        }
    }
    /// `p1 − p0`.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.p1 - self.p0
    }
    /// `p0 + t·(p1 − p0)`; `t ∈ [0,1]` spans the segment.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.p0 + self.direction() * t
    }
    /// Exact endpoint equality (no tolerance).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.iter().chain(self.p1.iter()).all(|c| c.is_finite())
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y
        )
    }
}

/// Parses `"x0,y0,x1,y1"`. Commas, semicolons and whitespace all separate fields.
impl FromStr for Segment {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 4 {
            return Err(SegmentError::parse(
                s,
                format!("expected 4 coordinates, got {}", fields.len()),
            ));
        }
        let mut c = [0.0f64; 4];
        for (slot, field) in c.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .map_err(|e| SegmentError::parse(s, format!("`{field}`: {e}")))?;
        }
        Ok(Segment::from_coords(c[0], c[1], c[2], c[3]))
    }
}

/// Classification of two segments with the witnesses relevant to each case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// No common point.
    Disjoint,
    /// Exactly one common point.
    Point(Point),
    /// Collinear overlap along the sub-segment between the two points.
    Overlap(Point, Point),
}

/// Witness-free tag of an `Intersection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    Disjoint,
    Point,
    Overlap,
}

impl IntersectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IntersectionKind::Disjoint => "disjoint",
            IntersectionKind::Point => "point",
            IntersectionKind::Overlap => "overlap",
        }
    }
}

impl Intersection {
    #[inline]
    pub fn kind(&self) -> IntersectionKind {
        match self {
            Intersection::Disjoint => IntersectionKind::Disjoint,
            Intersection::Point(_) => IntersectionKind::Point,
            Intersection::Overlap(..) => IntersectionKind::Overlap,
        }
    }
    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, Intersection::Disjoint)
    }
    /// Witness points in variant order (empty, one, or two).
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Intersection::Disjoint => Vec::new(),
            Intersection::Point(p) => vec![p],
            Intersection::Overlap(a, b) => vec![a, b],
        }
    }
    /// Same kind and witnesses within `tol` (Euclidean). Overlap endpoints may
    /// appear in either order.
    pub fn approx_eq(&self, other: &Intersection, tol: f64) -> bool {
        let close = |a: Point, b: Point| (a - b).norm() <= tol;
        match (*self, *other) {
            (Intersection::Disjoint, Intersection::Disjoint) => true,
            (Intersection::Point(a), Intersection::Point(b)) => close(a, b),
            (Intersection::Overlap(a0, a1), Intersection::Overlap(b0, b1)) => {
                (close(a0, b0) && close(a1, b1)) || (close(a0, b1) && close(a1, b0))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intersection::Disjoint => write!(f, "No intersection."),
            Intersection::Point(p) => write!(f, "Intersection at ({}, {}).", p.x, p.y),
            Intersection::Overlap(a, b) => write!(
                f,
                "Segments overlap from ({}, {}) to ({}, {}).",
                a.x, a.y, b.x, b.y
            ),
        }
    }
}

/// Axis used to divide by `v` when parameterizing collinear points on the second segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParamAxis {
    /// `v.x` unless it is exactly zero, else `v.y`.
    #[default]
    FirstNonZero,
    /// Component of `v` with the larger magnitude (ties pick x).
    Dominant,
}

/// Intersection configuration (tolerances and axis policy).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegCfg {
    /// Absolute threshold on `|perp(u, v)|` below which directions count as parallel.
    pub eps_parallel: f64,
    pub param_axis: ParamAxis,
}

impl Default for SegCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-8,
            param_axis: ParamAxis::FirstNonZero,
        }
    }
}

impl SegCfg {
    #[inline]
    pub fn with_eps_parallel(mut self, eps: f64) -> Self {
        self.eps_parallel = eps;
        self
    }
    #[inline]
    pub fn with_param_axis(mut self, axis: ParamAxis) -> Self {
        self.param_axis = axis;
        self
    }
}

/// Errors raised by the checked entry points and segment parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentError {
    /// Segment `index` (1 or 2) has a NaN or infinite coordinate.
    NonFinite { index: usize },
    Parse { input: String, reason: String },
}

impl SegmentError {
    fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index } => {
                write!(f, "segment {index} has a non-finite coordinate")
            }
            Self::Parse { input, reason } => {
                write!(f, "cannot parse segment `{input}`: {reason}")
            }
        }
    }
}

impl std::error::Error for SegmentError {}
