//! Finite 2D segment intersection.
//!
//! Purpose
//! - Classify two segments as disjoint, meeting at one point, or overlapping
//!   along a collinear sub-segment, and return the witnesses.
//! - Keep the routine pure and total: every finite input yields a classification.
//!
//! Numerics
//! - One absolute epsilon (`SegCfg::eps_parallel`, default 1e-8) guards the
//!   parallel test. Collinearity, zero-length and point identity compare exactly.
//!
//! Code cross-refs: `Segment`, `Intersection`, `SegCfg`, `intersect_with`, `in_segment`

mod intersect;
mod types;
mod util;

pub use intersect::{intersect, intersect_with, try_intersect};
pub use types::{
    Intersection, IntersectionKind, ParamAxis, Point, SegCfg, Segment, SegmentError, Vec2,
};
pub use util::{dot, in_segment, perp};
