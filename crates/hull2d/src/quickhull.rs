//! Quickhull construction.
//!
//! Model
//! - Seed with the lexicographic extremes A (min) and B (max), split the rest
//!   into the open half-planes left and right of A→B.
//! - For each side, repeatedly take the point farthest from the current edge,
//!   keep it as a hull vertex, and hand the points outside the two new edges to
//!   the next step; points inside the triangle are dropped.
//! - Recursion is unrolled onto an explicit stack so circular inputs (O(n)
//!   depth) cannot overflow the call stack. Task order keeps the in-order
//!   output of the recursive formulation.
//!
//! Degenerate inputs produce smaller hulls, never errors: empty input gives an
//! empty hull, coincident points a single vertex, collinear points the two
//! extremes.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::error::HullError;
use super::support::SupportCache;
use super::types::{GeomCfg, Hull, HullVertex};
use super::util::{approx_eq, cmp_xy, is_finite, orient};

/// Compute the hull of `points` as an ordered vertex list.
///
/// Traversal starts at the lexicographically smallest point and runs clockwise
/// (upper chain first, y-up). Input is not modified; duplicates are allowed.
pub fn quickhull(points: &[Vector2<f64>], cfg: GeomCfg) -> Vec<HullVertex> {
    hull_indices(points, cfg)
        .into_iter()
        .enumerate()
        .map(|(index, source)| HullVertex {
            position: points[source],
            index,
            source,
        })
        .collect()
}

/// Hull as indices into `points`, in traversal order.
fn hull_indices(points: &[Vector2<f64>], cfg: GeomCfg) -> Vec<usize> {
    if points.is_empty() {
        return Vec::new();
    }
    let cfg = GeomCfg {
        eps_side: cfg.eps_side.max(0.0),
        ..cfg
    };

    let (a, mut b) = lexicographic_extremes(points);
    let pa = points[a];
    if points.iter().all(|p| approx_eq(*p, pa, cfg.eps_equal)) {
        return vec![a];
    }
    if approx_eq(pa, points[b], cfg.eps_equal) {
        // x/y spread below eps_equal along the sort key; anchor on the farthest point instead
        b = farthest_from(points, pa);
    }
    let pb = points[b];

    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, p) in points.iter().enumerate() {
        // points coinciding with A or B within eps_equal stand for A or B
        if approx_eq(*p, pa, cfg.eps_equal) || approx_eq(*p, pb, cfg.eps_equal) {
            continue;
        }
        let o = orient(pa, pb, *p);
        if o > cfg.eps_side {
            left.push(i);
        } else if o < -cfg.eps_side {
            right.push(i);
        }
    }
    if left.is_empty() && right.is_empty() {
        return vec![a, b];
    }

    let mut out = Vec::with_capacity(left.len() + right.len() + 2);
    out.push(a);
    find_hull(points, left, a, b, cfg, &mut out);
    find_hull(points, right, b, a, cfg, &mut out);
    // the right chain closes back onto A
    out.pop();
    merge_coincident(points, &mut out, cfg.eps_equal);
    out
}

/// Drop vertices within `eps` of a vertex earlier in traversal order.
///
/// Per-edge merging misses twins that straddle the seed line A→B and end up
/// on opposite chains. Removing vertices keeps the loop convex.
fn merge_coincident(points: &[Vector2<f64>], out: &mut Vec<usize>, eps: f64) {
    let mut order: Vec<usize> = (0..out.len()).collect();
    order.sort_by(|&i, &j| cmp_xy(&points[out[i]], &points[out[j]]));
    let mut dropped = vec![false; out.len()];
    for (k, &i) in order.iter().enumerate() {
        if dropped[i] {
            continue;
        }
        let pi = points[out[i]];
        for &j in &order[k + 1..] {
            let pj = points[out[j]];
            if pj.x - pi.x > eps {
                break;
            }
            if dropped[j] || !approx_eq(pi, pj, eps) {
                continue;
            }
            let later = i.max(j);
            dropped[later] = true;
            if later == i {
                break;
            }
        }
    }
    if dropped.iter().any(|&d| d) {
        let mut k = 0;
        out.retain(|_| {
            let keep = !dropped[k];
            k += 1;
            keep
        });
    }
}

/// Emit the hull chain strictly left of `from -> to`, ending with `to`.
///
/// `from` is assumed to be already recorded by the caller. Points within
/// `eps_equal` of an edge endpoint are merged into it, so they never become
/// the apex C.
fn find_hull(
    points: &[Vector2<f64>],
    set: Vec<usize>,
    from: usize,
    to: usize,
    cfg: GeomCfg,
    out: &mut Vec<usize>,
) {
    let mut stack: Vec<(Vec<usize>, usize, usize)> = vec![(set, from, to)];
    while let Some((mut set, p, q)) = stack.pop() {
        let pp = points[p];
        let pq = points[q];
        set.retain(|&i| {
            !approx_eq(points[i], pp, cfg.eps_equal) && !approx_eq(points[i], pq, cfg.eps_equal)
        });
        if set.is_empty() {
            out.push(q);
            continue;
        }
        // first point achieving the maximum distance wins
        let mut c = set[0];
        let mut best = orient(pp, pq, points[c]);
        for &i in &set[1..] {
            let d = orient(pp, pq, points[i]);
            if d > best {
                best = d;
                c = i;
            }
        }
        let pc = points[c];
        let mut outer_pc = Vec::new();
        let mut outer_cq = Vec::new();
        for &i in &set {
            if approx_eq(points[i], pc, cfg.eps_equal) {
                continue;
            }
            if orient(pp, pc, points[i]) > cfg.eps_side {
                outer_pc.push(i);
            } else if orient(pc, pq, points[i]) > cfg.eps_side {
                outer_cq.push(i);
            }
        }
        stack.push((outer_cq, c, q));
        stack.push((outer_pc, p, c));
    }
}

/// Indices of the first lexicographic minimum and first maximum.
fn lexicographic_extremes(points: &[Vector2<f64>]) -> (usize, usize) {
    let mut lo = 0;
    let mut hi = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if cmp_xy(p, &points[lo]) == Ordering::Less {
            lo = i;
        }
        if cmp_xy(p, &points[hi]) == Ordering::Greater {
            hi = i;
        }
    }
    (lo, hi)
}

fn farthest_from(points: &[Vector2<f64>], origin: Vector2<f64>) -> usize {
    let mut best = 0;
    let mut best_d = (points[0] - origin).norm_squared();
    for (i, p) in points.iter().enumerate().skip(1) {
        let d = (p - origin).norm_squared();
        if d > best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

impl Hull {
    /// Build the hull with default tolerances.
    #[inline]
    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        Self::from_points_with(points, GeomCfg::default())
    }

    pub fn from_points_with(points: &[Vector2<f64>], cfg: GeomCfg) -> Self {
        let hull = Hull {
            vertices: quickhull(points, cfg),
            cache: SupportCache::default(),
        };
        tracing::debug!(
            points = points.len(),
            vertices = hull.len(),
            shape = ?hull.shape(),
            "quickhull"
        );
        hull
    }

    /// Like `from_points_with`, but rejects non-finite coordinates up front.
    pub fn try_from_points(points: &[Vector2<f64>], cfg: GeomCfg) -> Result<Self, HullError> {
        check_finite(points)?;
        Ok(Self::from_points_with(points, cfg))
    }

    /// Recompute the hull in place from a new point set.
    ///
    /// Cached support indices that fall outside the new vertex range are dropped.
    pub fn rebuild(&mut self, points: &[Vector2<f64>], cfg: GeomCfg) {
        self.vertices = quickhull(points, cfg);
        self.cache.retain_in_range(self.vertices.len());
        tracing::debug!(
            points = points.len(),
            vertices = self.len(),
            "quickhull rebuild"
        );
    }
}

fn check_finite(points: &[Vector2<f64>]) -> Result<(), HullError> {
    match points.iter().position(|p| !is_finite(*p)) {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}
