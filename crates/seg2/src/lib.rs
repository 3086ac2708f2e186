//! Finite 2D segment intersection.
//!
//! The crate exposes one primitive: classify two segments as disjoint,
//! meeting at a single point, or overlapping along a collinear sub-segment.
//! Everything else (samplers, the demo, the CLI) exists to exercise it.
//!
//! API Policy
//! - `api` is the curated flat surface; module paths may move.
//! - Numeric behavior is part of the contract: exact comparisons stay exact
//!   unless a tolerance is added to `SegCfg`.

pub mod api;
pub mod rand;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use segment::{intersect, intersect_with, try_intersect, Intersection, SegCfg, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_pair, draw_pairs, PairCfg, PairKind, ReplayToken};
    pub use crate::segment::{
        dot, in_segment, intersect, intersect_with, perp, try_intersect, Intersection,
        IntersectionKind, ParamAxis, Point, SegCfg, Segment, SegmentError, Vec2,
    };
}
