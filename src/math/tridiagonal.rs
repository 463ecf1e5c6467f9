//! Control points for smooth cubic Bezier runs.
//!
//! For knots `K[0..=n]` the first control points `P1` solve
//!
//! ```text
//! 2 P1[0]   +   P1[1]              = K[0] + 2 K[1]
//!   P1[i-1] + 4 P1[i] + P1[i+1]    = 4 K[i] + 2 K[i+1]
//! 2 P1[n-2] + 7 P1[n-1]            = 8 K[n-1] + K[n]
//! ```
//!
//! which makes the chain C¹ at interior knots with zero curvature at the ends.
//! The second control points follow as `P2[i] = 2 K[i+1] - P1[i+1]` and
//! `P2[n-1] = (K[n] + P1[n-1]) / 2`.

use super::Point2;
use crate::error::{OperationError, Result};

/// Solves a tridiagonal system `A x = r` with the Thomas algorithm.
///
/// `a` is the sub-diagonal (`a[0]` unused), `b` the diagonal and `c` the
/// super-diagonal (`c[n-1]` unused). No pivoting is performed, so the system
/// must be diagonally dominant.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the slices differ in length or
/// are empty.
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], r: &[f64]) -> Result<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n || c.len() != n || r.len() != n {
        return Err(OperationError::InvalidInput(format!(
            "tridiagonal system needs equal non-empty bands, got a={} b={} c={} r={}",
            a.len(),
            n,
            c.len(),
            r.len()
        ))
        .into());
    }

    let mut b = b.to_vec();
    let mut r = r.to_vec();
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] -= m * r[i - 1];
    }

    let mut x = vec![0.0; n];
    x[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = (r[i] - c[i] * x[i + 1]) / b[i];
    }
    Ok(x)
}

/// Computes the interior control points along a single coordinate.
///
/// Returns `(p1, p2)`, each with one entry per span (`knots.len() - 1`).
/// A single span has no neighbours to be smooth against, so its control
/// points are placed at the thirds of the chord.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if fewer than two knots are given.
pub fn compute_control_points(knots: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if knots.len() < 2 {
        return Err(OperationError::InvalidInput(format!(
            "smooth run needs at least 2 knots, got {}",
            knots.len()
        ))
        .into());
    }
    let n = knots.len() - 1;
    let k = knots;

    if n == 1 {
        let d = k[1] - k[0];
        return Ok((vec![k[0] + d / 3.0], vec![k[0] + 2.0 * d / 3.0]));
    }

    let mut a = vec![1.0; n];
    let mut b = vec![4.0; n];
    let mut c = vec![1.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    c[0] = 1.0;
    r[0] = k[0] + 2.0 * k[1];

    for i in 1..n - 1 {
        r[i] = 4.0 * k[i] + 2.0 * k[i + 1];
    }

    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    c[n - 1] = 0.0;
    r[n - 1] = 8.0 * k[n - 1] + k[n];

    let p1 = solve_tridiagonal(&a, &b, &c, &r)?;

    let mut p2 = Vec::with_capacity(n);
    for i in 0..n - 1 {
        p2.push(2.0 * k[i + 1] - p1[i + 1]);
    }
    p2.push(0.5 * (k[n] + p1[n - 1]));

    Ok((p1, p2))
}

/// Computes `(p1, p2)` control point pairs for each span through 2D knots,
/// solving the x and y channels independently.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if fewer than two knots are given.
pub fn smooth_control_points(knots: &[Point2]) -> Result<Vec<(Point2, Point2)>> {
    let kx: Vec<f64> = knots.iter().map(|k| k.x).collect();
    let ky: Vec<f64> = knots.iter().map(|k| k.y).collect();
    let (p1x, p2x) = compute_control_points(&kx)?;
    let (p1y, p2y) = compute_control_points(&ky)?;

    Ok((0..p1x.len())
        .map(|i| (Point2::new(p1x[i], p1y[i]), Point2::new(p2x[i], p2y[i])))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn thomas_solves_small_system() {
        // [2 1 0; 1 4 1; 0 2 7]
        let a = [0.0, 1.0, 2.0];
        let b = [2.0, 4.0, 7.0];
        let c = [1.0, 1.0, 0.0];
        let r = [4.0, 12.0, 18.0];
        let x = solve_tridiagonal(&a, &b, &c, &r).unwrap();
        assert!((2.0 * x[0] + x[1] - r[0]).abs() < TOL);
        assert!((x[0] + 4.0 * x[1] + x[2] - r[1]).abs() < TOL);
        assert!((2.0 * x[1] + 7.0 * x[2] - r[2]).abs() < TOL);
    }

    #[test]
    fn mismatched_bands_rejected() {
        assert!(solve_tridiagonal(&[0.0], &[1.0, 2.0], &[0.0], &[1.0]).is_err());
    }

    #[test]
    fn collinear_equally_spaced_knots_give_thirds() {
        let (p1, p2) = compute_control_points(&[0.0, 3.0, 6.0, 9.0]).unwrap();
        let expected_p1 = [1.0, 4.0, 7.0];
        let expected_p2 = [2.0, 5.0, 8.0];
        for i in 0..3 {
            assert!((p1[i] - expected_p1[i]).abs() < 1e-9, "p1[{i}]={}", p1[i]);
            assert!((p2[i] - expected_p2[i]).abs() < 1e-9, "p2[{i}]={}", p2[i]);
        }
    }

    #[test]
    fn interior_knots_are_c1() {
        let k = [0.0, 1.0, 4.0, 2.0, 5.0];
        let (p1, p2) = compute_control_points(&k).unwrap();
        // First derivative continuity: K[i+1] - P2[i] == P1[i+1] - K[i+1]
        for i in 0..k.len() - 2 {
            assert!((k[i + 1] - p2[i] - (p1[i + 1] - k[i + 1])).abs() < 1e-9);
        }
    }

    #[test]
    fn single_span_special_case() {
        let (p1, p2) = compute_control_points(&[0.0, 3.0]).unwrap();
        assert_eq!(p1.len(), 1);
        assert!((p1[0] - 1.0).abs() < TOL);
        assert!((p2[0] - 2.0).abs() < TOL);
    }

    #[test]
    fn single_knot_rejected() {
        assert!(compute_control_points(&[1.0]).is_err());
        assert!(smooth_control_points(&[Point2::new(0.0, 0.0)]).is_err());
    }

    #[test]
    fn smooth_points_pack_both_channels() {
        let knots = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 0.0)];
        let cps = smooth_control_points(&knots).unwrap();
        assert_eq!(cps.len(), 2);
        // Symmetric knots give mirrored control points.
        assert!((cps[0].0.y - cps[1].1.y).abs() < 1e-9);
        assert!((cps[0].0.x - (2.0 - cps[1].1.x)).abs() < 1e-9);
    }
}
