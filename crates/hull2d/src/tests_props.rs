//! Property tests: convexity, containment, subset, order invariance, support.
//!
//! Integer-grid inputs keep `orient` exact, so degeneracies (duplicates,
//! collinear runs) show up often and results can be compared exactly.

use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x as f64, y as f64)).collect())
}

fn float_points(max_len: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

fn check_structure(points: &[Vector2<f64>], hull: &Hull) -> Result<(), TestCaseError> {
    let v = hull.positions();
    let n = v.len();
    prop_assert_eq!(n == 0, points.is_empty());
    // subset, traversal indices
    for (i, hv) in hull.vertices().iter().enumerate() {
        prop_assert_eq!(hv.index, i);
        prop_assert_eq!(points[hv.source], hv.position);
    }
    // no coincident vertices, exact or within eps_equal
    let eps = GeomCfg::default().eps_equal;
    for i in 0..n {
        for j in (i + 1)..n {
            prop_assert!(!approx_eq(v[i], v[j], eps), "vertices {} and {} coincide", i, j);
        }
    }
    // convexity: every turn has the same (clockwise) sign
    if n >= 3 {
        for i in 0..n {
            let o = orient(v[(i + n - 1) % n], v[i], v[(i + 1) % n]);
            prop_assert!(o < 0.0, "turn {} at vertex {}", o, i);
        }
    }
    // containment
    for p in points {
        prop_assert!(hull.contains_eps(*p, 1e-7), "{:?} outside", p);
    }
    Ok(())
}

/// Grid points, each repeated with sub-`eps_equal` offsets.
fn clustered_points(max_len: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    let offset = -2.5e-10f64..2.5e-10;
    prop::collection::vec(
        (
            -20i32..=20,
            -20i32..=20,
            prop::collection::vec((offset.clone(), offset), 1..4),
        ),
        0..max_len,
    )
    .prop_map(|v| {
        v.into_iter()
            .flat_map(|(x, y, jitter)| {
                let base = Vector2::new(x as f64, y as f64);
                jitter.into_iter().map(move |(dx, dy)| base + Vector2::new(dx, dy))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn grid_hull_is_convex_and_contains_input(points in grid_points(40)) {
        let hull = Hull::from_points(&points);
        check_structure(&points, &hull)?;
    }

    #[test]
    fn float_hull_is_convex_and_contains_input(points in float_points(60)) {
        let hull = Hull::from_points(&points);
        check_structure(&points, &hull)?;
    }

    #[test]
    fn near_coincident_clusters_merge(points in clustered_points(25)) {
        // collinear clusters give slivers of width ~1e-10 where turn signs
        // are rounding noise, so only coincidence and containment are checked
        let hull = Hull::from_points(&points);
        let v = hull.positions();
        let eps = GeomCfg::default().eps_equal;
        for i in 0..v.len() {
            for j in (i + 1)..v.len() {
                prop_assert!(!approx_eq(v[i], v[j], eps), "vertices {} and {} coincide", i, j);
            }
        }
        for hv in hull.vertices() {
            prop_assert_eq!(points[hv.source], hv.position);
        }
        for p in &points {
            prop_assert!(hull.contains_eps(*p, 1e-7), "{:?} outside", p);
        }
    }

    #[test]
    fn hull_ignores_input_order(
        (points, shuffled) in grid_points(40).prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = Hull::from_points(&points);
        let b = Hull::from_points(&shuffled);
        // same start (lexicographic min) and winding, so the sequences match exactly
        prop_assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn cached_support_matches_scan(
        points in float_points(60),
        angles in prop::collection::vec(0.0f64..std::f64::consts::TAU, 1..30),
    ) {
        let mut hull = Hull::from_points(&points);
        for th in angles {
            let dir = Vector2::new(th.cos(), th.sin());
            let got = hull.support(dir);
            prop_assert_eq!(got, hull.support_exact(dir));
            if let Some(i) = got {
                let best = hull.vertices()[i].position.dot(&dir);
                for v in hull.vertices() {
                    prop_assert!(best >= v.position.dot(&dir));
                }
            }
        }
    }

    #[test]
    fn grid_support_ties_match_scan(
        points in grid_points(30),
        dirs in prop::collection::vec((-2i32..=2, -2i32..=2), 1..20),
    ) {
        // axis and diagonal directions hit orthogonal edges, i.e. ties
        let mut hull = Hull::from_points(&points);
        for (x, y) in dirs {
            if x == 0 && y == 0 {
                continue;
            }
            let dir = Vector2::new(x as f64, y as f64);
            prop_assert_eq!(hull.support(dir), hull.support_exact(dir));
        }
    }
}
