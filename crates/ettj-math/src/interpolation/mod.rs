//! Interpolation methods for rate curve construction.
//!
//! A rate curve is observed at a handful of traded maturities and needs
//! values everywhere in between. The engine uses a single method for
//! this: the natural cubic spline ([`CubicSpline`]), the conventional
//! fixed-income choice when the curve should stay smooth without
//! inventing curvature beyond the observed range.

mod cubic_spline;

pub use cubic_spline::CubicSpline;

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spline_through_points_via_trait() {
        let xs = vec![21.0, 126.0, 252.0, 504.0];
        let ys = vec![10.50, 10.80, 11.00, 11.80];

        let interp: Box<dyn Interpolator> = Box::new(CubicSpline::new(xs.clone(), ys.clone()).unwrap());
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_in_range() {
        let spline = CubicSpline::new(vec![21.0, 252.0], vec![10.5, 11.0]).unwrap();

        assert!(spline.in_range(21.0));
        assert!(spline.in_range(100.0));
        assert!(spline.in_range(252.0));
        assert!(!spline.in_range(20.9));
        assert!(!spline.in_range(252.1));
        assert!(!spline.allows_extrapolation());
    }
}
