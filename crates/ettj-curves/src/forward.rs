//! Implied forward rates between consecutive curve vertices.
//!
//! Rates compound discretely over a 252-business-day year, the quoting
//! convention of the market these futures trade in. The forward between
//! two vertices is the unique annualized rate that, applied on top of
//! the shorter vertex's capitalization, reproduces the longer vertex's
//! capitalization — the no-arbitrage rate for that span.

use crate::error::{CurveError, CurveResult};
use crate::vertex::{Vertex, VertexSet};

/// Business days in the compounding year.
pub const BUSINESS_DAYS_PER_YEAR: f64 = 252.0;

/// Capitalization factor for an annualized rate held over a span of
/// business days: `(1 + rate/100) ^ (business_days / 252)`.
#[must_use]
pub fn compound_factor(rate_pct: f64, business_days: i64) -> f64 {
    (1.0 + rate_pct / 100.0).powf(business_days as f64 / BUSINESS_DAYS_PER_YEAR)
}

/// One implied forward between two consecutive vertices.
///
/// Borrows its endpoints from the [`VertexSet`] it was derived from;
/// the destination spot rate is carried alongside for dual-series
/// plotting.
#[derive(Debug, Clone)]
pub struct ForwardPoint<'a> {
    /// The nearer vertex.
    pub from: &'a Vertex,
    /// The farther vertex.
    pub to: &'a Vertex,
    /// Annualized forward rate over `(from, to]`, percent, rounded to
    /// two decimals.
    pub forward_rate: f64,
    /// Display label for the span, `MM/YY → MM/YY` of the two
    /// maturities.
    pub label: String,
    /// The destination vertex's current spot rate.
    pub spot_at_destination: f64,
}

/// Derives the implied forward rate for every consecutive vertex pair.
///
/// Returns exactly `set.len() - 1` points in vertex order. For a pair
/// at offsets `t1 < t2` with capitalization factors `f1`, `f2`:
///
/// ```text
/// forward = ((f2 / f1) ^ (252 / (t2 - t1)) - 1) * 100
/// ```
///
/// # Errors
///
/// A zero-width or reversed interval is a precondition violation —
/// [`CurveError::ZeroWidthInterval`] or
/// [`CurveError::NonMonotonicOffsets`], never a silent infinity. Both
/// are unreachable for a set built by [`VertexSet::build`], which sorts
/// and deduplicates offsets.
pub fn forwards(set: &VertexSet) -> CurveResult<Vec<ForwardPoint<'_>>> {
    let vertices = set.vertices();
    let mut points = Vec::with_capacity(vertices.len().saturating_sub(1));

    for (index, pair) in vertices.windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);
        let span = to.business_days - from.business_days;
        if span == 0 {
            return Err(CurveError::zero_width_interval(to.business_days));
        }
        if span < 0 {
            return Err(CurveError::non_monotonic_offsets(
                index + 1,
                from.business_days,
                to.business_days,
            ));
        }

        let f1 = compound_factor(from.current_rate, from.business_days);
        let f2 = compound_factor(to.current_rate, to.business_days);
        let forward =
            ((f2 / f1).powf(BUSINESS_DAYS_PER_YEAR / span as f64) - 1.0) * 100.0;

        points.push(ForwardPoint {
            from,
            to,
            forward_rate: round2(forward),
            label: format!(
                "{} → {}",
                from.maturity.as_naive_date().format("%m/%y"),
                to.maturity.as_naive_date().format("%m/%y")
            ),
            spot_at_destination: to.current_rate,
        });
    }

    Ok(points)
}

/// Rounds to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
