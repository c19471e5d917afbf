//! Build a hull from a sampled cloud and sweep a support direction around it.
//!
//! Usage:
//!   cargo run -p hull2d --example hull_demo -- [count] [seed]

use anyhow::{Context, Result};
use hull2d::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();
    let mut args = std::env::args().skip(1);
    let count: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid count {s:?}"))?,
        None => 32,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
        None => 2025,
    };

    let cfg = PointCloudCfg {
        count,
        shape: CloudShape::Disk { radius: 10.0 },
        ..PointCloudCfg::default()
    };
    let points = draw_point_cloud(cfg, ReplayToken::new(seed, 0));
    let mut hull = Hull::try_from_points(&points, GeomCfg::default())?;
    tracing::info!(count, seed, vertices = hull.len(), shape = ?hull.shape(), "hull");
    for v in hull.vertices() {
        println!(
            "vertex {:>3} <- input {:>4}: ({:.4}, {:.4})",
            v.index, v.source, v.position.x, v.position.y
        );
    }

    const STEPS: usize = 12;
    for k in 0..STEPS {
        let th = k as f64 * std::f64::consts::TAU / STEPS as f64;
        let dir = Vec2::new(th.cos(), th.sin());
        let i = hull.try_support(dir)?;
        println!("dir {:>6.3} rad -> vertex {i}", th);
    }
    tracing::info!(cache = ?hull.cache().entries().collect::<Vec<_>>(), "support cache");
    Ok(())
}
