//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints: the
/// curve carries no artificial curvature beyond the observed range.
/// With exactly two knots the spline degenerates to the straight chord,
/// which is consistent with that boundary condition.
///
/// Queries outside the knot range are rejected; the curve is never
/// extrapolated.
///
/// # Example
///
/// ```rust
/// use ettj_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![21.0, 252.0, 504.0];
/// let ys = vec![10.50, 11.00, 11.80];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let y = spline.interpolate(126.0).unwrap();
/// assert!(y > 10.50 && y < 11.00);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths
    /// differ, or if `xs` is not strictly increasing. The caller is
    /// expected to have deduplicated and sorted its abscissae; a
    /// violation here is a programming error upstream, not a condition
    /// to recover from.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        let y2s = compute_second_derivatives(&xs, &ys);

        Ok(Self { xs, ys, y2s })
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self.xs.binary_search_by(|probe| {
            probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if x < self.xs[0] || x > self.xs[self.xs.len() - 1] {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.xs[0],
                max: self.xs[self.xs.len() - 1],
            });
        }

        let i = self.find_segment(x);

        let x_lo = self.xs[i];
        let x_hi = self.xs[i + 1];
        let y_lo = self.ys[i];
        let y_hi = self.ys[i + 1];
        let y2_lo = self.y2s[i];
        let y2_hi = self.y2s[i + 1];

        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        // Cubic spline formula
        let y = a * y_lo
            + b * y_hi
            + ((a * a * a - a) * y2_lo + (b * b * b - b) * y2_hi) * (h * h) / 6.0;

        Ok(y)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Computes the second derivatives for the natural cubic spline.
///
/// Tridiagonal decomposition and back-substitution; both boundary second
/// derivatives are pinned to zero. With n == 2 the interior loop is empty
/// and every second derivative is zero (the chord).
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    // Natural spline: y2[0] = 0
    y2s[0] = 0.0;
    u[0] = 0.0;

    // Decomposition loop
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // Natural spline: y2[n-1] = 0
    y2s[n - 1] = 0.0;

    // Back-substitution loop
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_spline_through_knots() {
        let xs = vec![21.0, 126.0, 252.0, 378.0, 504.0];
        let ys = vec![10.50, 10.82, 11.00, 11.35, 11.80];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_two_knots_degenerate_to_chord() {
        let spline = CubicSpline::new(vec![21.0, 273.0], vec![10.0, 12.0]).unwrap();

        // Midpoint of the chord
        assert_relative_eq!(spline.interpolate(147.0).unwrap(), 11.0, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(21.0).unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(273.0).unwrap(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_boundary_second_derivative_is_zero() {
        let xs = vec![21.0, 126.0, 252.0, 378.0, 504.0];
        let ys = vec![10.50, 10.82, 11.00, 11.35, 11.80];

        let spline = CubicSpline::new(xs, ys).unwrap();

        // Finite-difference second derivative over the three leading and
        // trailing unit-spaced samples.
        let fd2 = |x: f64| {
            let y0 = spline.interpolate(x).unwrap();
            let y1 = spline.interpolate(x + 1.0).unwrap();
            let y2 = spline.interpolate(x + 2.0).unwrap();
            y0 - 2.0 * y1 + y2
        };

        assert!(fd2(21.0).abs() < 1e-6, "left boundary curvature: {}", fd2(21.0));
        assert!(fd2(502.0).abs() < 1e-6, "right boundary curvature: {}", fd2(502.0));
    }

    #[test]
    fn test_determinism() {
        let xs = vec![21.0, 252.0, 504.0];
        let ys = vec![10.50, 11.00, 11.80];

        let a = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        let b = CubicSpline::new(xs, ys).unwrap();

        for x in [21.0, 100.0, 252.0, 400.0, 504.0] {
            assert_eq!(a.interpolate(x).unwrap(), b.interpolate(x).unwrap());
        }
    }

    #[test]
    fn test_extrapolation_rejected() {
        let spline = CubicSpline::new(vec![21.0, 252.0, 504.0], vec![10.5, 11.0, 11.8]).unwrap();

        assert!(matches!(
            spline.interpolate(20.0),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(spline.interpolate(505.0).is_err());
    }

    #[test]
    fn test_insufficient_points() {
        let err = CubicSpline::new(vec![21.0], vec![10.5]).unwrap_err();
        assert!(matches!(err, MathError::InsufficientData { required: 2, actual: 1 }));
    }

    #[test]
    fn test_non_increasing_rejected() {
        assert!(CubicSpline::new(vec![21.0, 21.0, 252.0], vec![1.0, 2.0, 3.0]).is_err());
        assert!(CubicSpline::new(vec![252.0, 21.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(CubicSpline::new(vec![21.0, 252.0], vec![1.0]).is_err());
    }

    proptest! {
        #[test]
        fn prop_spline_passes_through_random_knots(
            offsets in proptest::collection::btree_set(1i64..2520, 2..12),
            rates in proptest::collection::vec(5.0f64..20.0, 12),
        ) {
            let xs: Vec<f64> = offsets.iter().map(|&d| d as f64).collect();
            let ys: Vec<f64> = (0..xs.len()).map(|i| rates[i]).collect();

            let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
            for (x, y) in xs.iter().zip(ys.iter()) {
                prop_assert!((spline.interpolate(*x).unwrap() - y).abs() < 1e-9);
            }
        }
    }
}
