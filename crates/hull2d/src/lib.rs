//! 2D convex hulls (quickhull) with cached support queries.
//!
//! Purpose
//! - Build the convex hull of an unordered point cloud via divide-and-conquer
//!   quickhull, keeping degenerate inputs (single point, segment) representable.
//! - Answer "which hull vertex is furthest along direction d?" repeatedly and
//!   cheaply, as needed by GJK/EPA-style collision loops.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; the hull stores copies of the input
//!   coordinates (never synthesized points).
//! - Hull traversal starts at the lexicographically smallest point and winds
//!   clockwise in a y-up frame.
//! - Tolerances live in `GeomCfg`; see its field docs for units.
//!
//! Code cross-refs: `Hull`, `HullVertex`, `GeomCfg`, `quickhull`, `SupportCache`

mod error;
pub mod quickhull;
pub mod rand;
pub mod support;
mod types;
mod util;

pub use error::HullError;
pub use quickhull::quickhull;
pub use support::SupportCache;
pub use types::{GeomCfg, Hull, HullShape, HullVertex};
pub use util::{approx_eq, orient, perp_dot};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_point_cloud, CloudShape, PointCloudCfg, ReplayToken};
    pub use crate::{GeomCfg, Hull, HullError, HullShape, HullVertex, SupportCache};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests_props;
