//! Boundary checks for the optional checked entry points.
//!
//! Degenerate geometry (coincident or collinear points) is not an error; it
//! yields a point or segment hull. These variants cover caller misuse only.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullError {
    /// Input point at `index` has a NaN or infinite coordinate.
    #[error("input point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Support direction is zero or not finite.
    #[error("support direction must be finite and non-zero")]
    ZeroDirection,

    #[error("support query on an empty hull")]
    EmptyHull,
}
