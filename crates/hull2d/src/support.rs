//! Support mapping over a finished hull.
//!
//! Purpose
//! - Return the index of the hull vertex maximizing `dot(v, d)`.
//! - Exploit convexity: along the boundary the dot product is unimodal, so a
//!   local hill climb from a nearby vertex finds the global maximum. Starting
//!   points come from a three-slot cache of recent answers, which makes the
//!   slowly rotating queries of GJK/EPA loops cost a few steps each.
//!
//! Ties resolve to the smallest maximizing index on both paths, so the cached
//! query and the linear scan always return the same vertex.
//!
//! Code cross-refs: `types::Hull`, `error::HullError`

use nalgebra::Vector2;

use super::error::HullError;
use super::types::Hull;
use super::util::is_finite;

const SLOTS: usize = 3;

/// Recently returned support indices (ring buffer, oldest evicted first).
///
/// Stores plain indices into the hull's vertex list; entries are re-validated
/// against the vertex count before use and on `Hull::rebuild`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SupportCache {
    slots: [Option<usize>; SLOTS],
    next: usize,
}

impl SupportCache {
    /// Record `index`, overwriting the oldest slot.
    #[inline]
    pub fn record(&mut self, index: usize) {
        self.slots[self.next] = Some(index);
        self.next = (self.next + 1) % SLOTS;
    }

    /// Occupied slots, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOTS).filter_map(move |k| self.slots[(self.next + k) % SLOTS])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop entries that no longer point at a vertex of an `n`-vertex hull.
    pub fn retain_in_range(&mut self, n: usize) {
        for slot in &mut self.slots {
            if slot.is_some_and(|i| i >= n) {
                *slot = None;
            }
        }
    }
}

impl Hull {
    /// Exhaustive support query: first index with the maximal dot product.
    ///
    /// `None` for an empty hull. A zero `dir` returns index 0.
    pub fn support_exact(&self, dir: Vector2<f64>) -> Option<usize> {
        let first = self.vertices.first()?;
        let mut best = 0;
        let mut best_dot = first.position.dot(&dir);
        for (i, v) in self.vertices.iter().enumerate().skip(1) {
            let d = v.position.dot(&dir);
            if d > best_dot {
                best_dot = d;
                best = i;
            }
        }
        Some(best)
    }

    /// Cached support query; same result as `support_exact`.
    ///
    /// Hill-climbs from every cached index (falling back to the linear scan
    /// when the cache holds none) and records the answer in the cache.
    /// The result for a zero or non-finite `dir` is unspecified.
    pub fn support(&mut self, dir: Vector2<f64>) -> Option<usize> {
        let n = self.vertices.len();
        if n == 0 {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        let mut visited = [usize::MAX; SLOTS];
        for (k, start) in self.cache.entries().enumerate() {
            if start >= n || visited.contains(&start) {
                continue;
            }
            visited[k] = start;
            let (i, d) = self.hill_climb(start, dir);
            best = match best {
                Some((bi, bd)) if bd > d || (bd == d && bi <= i) => Some((bi, bd)),
                _ => Some((i, d)),
            };
        }
        let index = match best {
            Some((i, _)) => i,
            None => {
                tracing::trace!(vertices = n, "support cache cold, linear scan");
                self.support_exact(dir)?
            }
        };
        self.cache.record(index);
        Some(index)
    }

    /// Position of the support vertex for `dir`.
    #[inline]
    pub fn support_point(&mut self, dir: Vector2<f64>) -> Option<Vector2<f64>> {
        self.support(dir).map(|i| self.vertices[i].position)
    }

    /// Checked variant of `support` rejecting zero/non-finite directions and empty hulls.
    pub fn try_support(&mut self, dir: Vector2<f64>) -> Result<usize, HullError> {
        if !is_finite(dir) || dir.norm_squared() == 0.0 {
            return Err(HullError::ZeroDirection);
        }
        self.support(dir).ok_or(HullError::EmptyHull)
    }

    #[inline]
    pub fn cache(&self) -> &SupportCache {
        &self.cache
    }

    #[inline]
    pub fn reset_cache(&mut self) {
        self.cache.clear();
    }

    /// Walk toward the larger neighbor until neither improves.
    ///
    /// Returns the smallest index on the final plateau and its dot product.
    fn hill_climb(&self, start: usize, dir: Vector2<f64>) -> (usize, f64) {
        let n = self.vertices.len();
        let dot = |i: usize| self.vertices[i].position.dot(&dir);
        let mut i = start;
        let mut di = dot(i);
        // convexity bounds the walk; the cap guards against NaN directions
        for _ in 0..n {
            let next = (i + 1) % n;
            let prev = (i + n - 1) % n;
            let dn = dot(next);
            let dp = dot(prev);
            if dn > di && dn >= dp {
                i = next;
                di = dn;
            } else if dp > di {
                i = prev;
                di = dp;
            } else {
                break;
            }
        }
        // an edge orthogonal to dir gives two maximizers; keep the lower index
        let next = (i + 1) % n;
        let prev = (i + n - 1) % n;
        let mut lowest = i;
        for j in [prev, next] {
            if j < lowest && dot(j) == di {
                lowest = j;
            }
        }
        (lowest, di)
    }
}
