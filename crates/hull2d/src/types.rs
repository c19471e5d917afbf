//! Hull data types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for equality and side-of-line tests.
//! - `HullVertex`: input coordinate plus its slot in traversal order.
//! - `Hull`: ordered, clockwise vertex loop owning its support cache.
//!
//! Code cross-refs: `quickhull::quickhull`, `support::SupportCache`

use nalgebra::Vector2;

use super::support::SupportCache;
use super::util::{orient, perp_dot};

/// Geometry configuration (tolerances).
///
/// Both tolerances are absolute, so they do not scale with coordinate
/// magnitude; rescale inputs to O(1) or pick matching values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Per-component tolerance (coordinate units) for "points coincide".
    /// Points within it of a hull vertex are merged into that vertex.
    pub eps_equal: f64,
    /// Tolerance on `orient(a, b, p)` (squared coordinate units); a point is
    /// strictly left of `a -> b` iff `orient > eps_side`.
    ///
    /// The default 0.0 treats only an exactly zero cross value as "on the
    /// line". Collinear points produced by float arithmetic (e.g. `0.1 * i`)
    /// carry rounding noise and then yield a sliver polygon instead of a
    /// segment; such inputs need a small positive `eps_side` (say `1e-12`
    /// times the squared coordinate scale).
    pub eps_side: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_equal: 1e-9,
            eps_side: 0.0,
        }
    }
}

/// A hull boundary point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullVertex {
    pub position: Vector2<f64>,
    /// Position in hull traversal order.
    pub index: usize,
    /// Index of the originating point in the input slice.
    pub source: usize,
}

/// Coarse classification by vertex count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullShape {
    Empty,
    Point,
    Segment,
    Polygon,
}

/// Convex hull of a 2D point set.
///
/// Invariants:
/// - No two vertices coincide; no three consecutive vertices are collinear.
/// - For 3+ vertices the loop winds clockwise (y-up) and is closed implicitly
///   (last vertex connects back to the first).
/// - `vertices[i].index == i`.
#[derive(Clone, Debug, Default)]
pub struct Hull {
    pub(crate) vertices: Vec<HullVertex>,
    pub(crate) cache: SupportCache,
}

impl Hull {
    #[inline]
    pub fn vertices(&self) -> &[HullVertex] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex coordinates in traversal order.
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn shape(&self) -> HullShape {
        match self.vertices.len() {
            0 => HullShape::Empty,
            1 => HullShape::Point,
            2 => HullShape::Segment,
            _ => HullShape::Polygon,
        }
    }

    /// Twice the signed area (shoelace). Negative for the clockwise loops
    /// produced by `quickhull`; zero for points and segments.
    pub fn signed_area2(&self) -> f64 {
        self.edges()
            .map(|(a, b)| perp_dot(a.position, b.position))
            .sum()
    }

    /// True for polygons traversed clockwise. Points and segments have no
    /// orientation and report `false`.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.shape() == HullShape::Polygon && self.signed_area2() < 0.0
    }

    /// Consecutive vertex pairs around the closed loop.
    ///
    /// A point yields no edges, a segment yields both directions.
    pub fn edges(&self) -> impl Iterator<Item = (&HullVertex, &HullVertex)> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Membership with slack `eps` (coordinate units, distance to each edge line).
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        match self.shape() {
            HullShape::Empty => false,
            HullShape::Point => (self.vertices[0].position - p).norm() <= eps,
            HullShape::Segment => {
                let a = self.vertices[0].position;
                let b = self.vertices[1].position;
                let ab = b - a;
                let len = ab.norm();
                let dist_line = orient(a, b, p).abs() / len;
                let t = (p - a).dot(&ab) / len;
                dist_line <= eps && t >= -eps && t <= len + eps
            }
            HullShape::Polygon => self.edges().all(|(a, b)| {
                // clockwise: interior lies to the right of every edge
                let len = (b.position - a.position).norm();
                orient(a.position, b.position, p) / len <= eps
            }),
        }
    }
}
