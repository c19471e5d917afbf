use std::cmp::Ordering;

use nalgebra::Vector2;

/// 2D cross (perp-dot) product `a.x*b.y - a.y*b.x`.
///
/// Positive when `b` turns counterclockwise from `a` (y-up frame).
#[inline]
pub fn perp_dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of `p` relative to the directed line `a -> b`.
///
/// `> 0`: `p` is left of the line, `< 0`: right, `0`: on the line.
/// Magnitude is twice the area of triangle `(a, b, p)`.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    perp_dot(b - a, p - a)
}

/// Component-wise absolute comparison within `eps`.
#[inline]
pub fn approx_eq(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Lexicographic order on (x, y). NaN compares equal.
#[inline]
pub(crate) fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
pub(crate) fn is_finite(p: Vector2<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orient_sign_matches_turn() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(orient(a, b, vector![0.5, 1.0]) > 0.0);
        assert!(orient(a, b, vector![0.5, -1.0]) < 0.0);
        assert_eq!(orient(a, b, vector![2.0, 0.0]), 0.0);
        // twice the triangle area
        assert!((orient(a, b, vector![0.0, 3.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn lexicographic_tie_breaks_on_y() {
        let p = vector![1.0, 2.0];
        let q = vector![1.0, 3.0];
        assert_eq!(cmp_xy(&p, &q), Ordering::Less);
        assert_eq!(cmp_xy(&q, &p), Ordering::Greater);
        assert_eq!(cmp_xy(&p, &p), Ordering::Equal);
    }

    #[test]
    fn approx_eq_is_absolute() {
        assert!(approx_eq(vector![1.0, 1.0], vector![1.0 + 1e-10, 1.0], 1e-9));
        assert!(!approx_eq(vector![1.0, 1.0], vector![1.0, 1.0 + 1e-8], 1e-9));
    }
}
