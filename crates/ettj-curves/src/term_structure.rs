//! Daily sampling of the interpolated spot curve.

use ettj_math::interpolation::{CubicSpline, Interpolator};
use serde::{Deserialize, Serialize};

use crate::error::CurveResult;
use crate::vertex::{RateSeries, VertexSet};

/// The interpolated curve sampled at unit business-day resolution.
///
/// Parallel sequences: `x[i]` is a business-day offset, `y[i]` the rate
/// there. Offsets run from the first to the last observed vertex with
/// step 1 — one sample per business day spanned, never beyond the
/// observed range. Produced fresh per call; any caching across refresh
/// cycles belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Business-day offsets, unit step, ascending.
    pub x: Vec<i64>,
    /// Interpolated rates, percent per annum, parallel to `x`.
    pub y: Vec<f64>,
}

impl CurveSample {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the sample holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over `(offset, rate)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Fits a natural cubic spline over the chosen rate series and samples
/// it at every integer business-day offset the vertices span.
///
/// The result has exactly `last_offset - first_offset + 1` points; the
/// sampled curve reproduces each observed vertex rate at its offset.
///
/// # Errors
///
/// Interpolation-layer failures surface as
/// [`crate::CurveError::Interpolation`]. With a cleaned [`VertexSet`]
/// they are unreachable: construction guarantees at least two strictly
/// increasing offsets.
pub fn sample_daily(set: &VertexSet, series: RateSeries) -> CurveResult<CurveSample> {
    let xs: Vec<f64> = set.offsets().iter().map(|&d| d as f64).collect();
    let ys = set.rates(series);

    let spline = CubicSpline::new(xs, ys)?;

    let lo = set.first_offset();
    let hi = set.last_offset();
    let n = (hi - lo + 1) as usize;

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for offset in lo..=hi {
        x.push(offset);
        y.push(spline.interpolate(offset as f64)?);
    }

    Ok(CurveSample { x, y })
}

/// Samples both rate series: the current curve and the previous
/// session's curve, over the same offsets.
pub fn sample_both(set: &VertexSet) -> CurveResult<(CurveSample, CurveSample)> {
    Ok((
        sample_daily(set, RateSeries::Current)?,
        sample_daily(set, RateSeries::Previous)?,
    ))
}
