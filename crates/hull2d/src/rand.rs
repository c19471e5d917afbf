//! Random point clouds (seeded, replayable).
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the demo: uniform disks and
//!   squares for the average case, jittered circles for the quickhull worst
//!   case (every point on the hull, linear recursion depth).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in the disk of the given radius.
    Disk { radius: f64 },
    /// Uniform in `[-half, half]²`.
    Square { half: f64 },
    /// On the circle of the given radius, radial jitter `radius * u`, `|u| <= jitter`.
    Circle { radius: f64, jitter: f64 },
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Offset added to every sample.
    pub center: Vector2<f64>,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            shape: CloudShape::Disk { radius: 1.0 },
            center: Vector2::zeros(),
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Same seed, next index.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
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

/// Draw `cfg.count` points.
pub fn draw_point_cloud(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| sample(&mut rng, cfg.shape) + cfg.center)
        .collect()
}

fn sample<R: Rng>(rng: &mut R, shape: CloudShape) -> Vector2<f64> {
    match shape {
        CloudShape::Disk { radius } => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = radius * rng.gen::<f64>().sqrt();
            Vector2::new(th.cos() * r, th.sin() * r)
        }
        CloudShape::Square { half } => {
            Vector2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half))
        }
        CloudShape::Circle { radius, jitter } => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * jitter.max(0.0);
            let r = radius * (1.0 + u);
            Vector2::new(th.cos() * r, th.sin() * r)
        }
    }
}
