//! Curve vertices and the snapshot cleaning pipeline.

use ettj_core::calendars::Calendar;
use ettj_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::quotes::FutureQuote;

/// Selector for the two rate series carried by every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateSeries {
    /// Today's quoted rates (D0).
    Current,
    /// Previous session's settlement rates (D-1).
    Previous,
}

/// One traded maturity point on the curve.
///
/// Built once per snapshot by [`VertexSet::build`] and immutable
/// thereafter; a new snapshot produces a wholly new set.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Contract ticker, opaque to the engine.
    pub symbol: String,
    /// Contract maturity date.
    pub maturity: Date,
    /// Business days from the reference date to maturity. Always
    /// positive within a built set.
    pub business_days: i64,
    /// Current quoted rate, percent per annum.
    pub current_rate: f64,
    /// Previous session's settlement rate, percent per annum.
    pub previous_rate: f64,
    /// Traded quantity. Zero marks an illiquid vertex: usable geometry,
    /// excluded from liquidity-dependent statistics.
    pub volume: u64,
}

impl Vertex {
    /// The rate for the chosen series.
    #[must_use]
    pub fn rate(&self, series: RateSeries) -> f64 {
        match series {
            RateSeries::Current => self.current_rate,
            RateSeries::Previous => self.previous_rate,
        }
    }
}

/// The cleaned, ordered collection of curve vertices for one snapshot.
///
/// Invariants, guaranteed by construction:
/// - business-day offsets are unique, positive, and strictly increasing;
/// - every vertex has an active quote (`current_rate > 0`);
/// - the set holds at least two vertices.
#[derive(Debug, Clone)]
pub struct VertexSet {
    vertices: Vec<Vertex>,
    today: Date,
}

impl VertexSet {
    /// Minimum usable vertices for a curve.
    pub const MIN_VERTICES: usize = 2;

    /// Runs the cleaning pipeline over one snapshot of raw quotes.
    ///
    /// Steps, in order:
    /// 1. compute each row's business-day offset from `today`;
    /// 2. drop rows without an active quote (`current_rate <= 0`) and
    ///    rows at or before the reference date (`offset <= 0`);
    /// 3. sort ascending by offset;
    /// 4. collapse duplicate offsets, keeping the first row after the
    ///    sort;
    /// 5. require at least [`Self::MIN_VERTICES`] survivors.
    ///
    /// # Errors
    ///
    /// [`CurveError::InsufficientVertices`] when fewer than two usable
    /// vertices remain. This is the expected pre-market/illiquid state,
    /// detectable via [`CurveError::is_insufficient_data`]; it is the
    /// only error this constructor produces.
    pub fn build(
        quotes: &[FutureQuote],
        today: Date,
        calendar: &impl Calendar,
    ) -> CurveResult<Self> {
        let mut vertices: Vec<Vertex> = quotes
            .iter()
            .map(|q| Vertex {
                symbol: q.symbol.clone(),
                maturity: q.maturity,
                business_days: calendar.business_days_between(today, q.maturity),
                current_rate: q.current_rate,
                previous_rate: q.previous_rate,
                volume: q.volume,
            })
            .collect();

        let received = vertices.len();
        vertices.retain(|v| v.current_rate > 0.0 && v.business_days > 0);
        if vertices.len() < received {
            log::debug!(
                "dropped {} of {} rows (no quote or matured)",
                received - vertices.len(),
                received
            );
        }

        // Stable sort, then keep the first row per offset
        vertices.sort_by_key(|v| v.business_days);
        let sorted = vertices.len();
        vertices.dedup_by_key(|v| v.business_days);
        if vertices.len() < sorted {
            log::debug!("collapsed {} duplicate offsets", sorted - vertices.len());
        }

        if vertices.len() < Self::MIN_VERTICES {
            return Err(CurveError::insufficient_vertices(
                Self::MIN_VERTICES,
                vertices.len(),
            ));
        }

        Ok(Self { vertices, today })
    }

    /// The snapshot's reference date.
    #[must_use]
    pub fn today(&self) -> Date {
        self.today
    }

    /// Number of vertices. Always at least two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a built set; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The ordered vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex at position `i`, if any.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Vertex> {
        self.vertices.get(i)
    }

    /// Iterates over the ordered vertices.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// The strictly increasing business-day offsets.
    #[must_use]
    pub fn offsets(&self) -> Vec<i64> {
        self.vertices.iter().map(|v| v.business_days).collect()
    }

    /// The rates of the chosen series, in vertex order.
    #[must_use]
    pub fn rates(&self, series: RateSeries) -> Vec<f64> {
        self.vertices.iter().map(|v| v.rate(series)).collect()
    }

    /// Smallest business-day offset in the set.
    #[must_use]
    pub fn first_offset(&self) -> i64 {
        self.vertices[0].business_days
    }

    /// Largest business-day offset in the set.
    #[must_use]
    pub fn last_offset(&self) -> i64 {
        self.vertices[self.vertices.len() - 1].business_days
    }

    /// The liquid subset: vertices with traded volume.
    ///
    /// May be empty; liquidity-dependent statistics must skip their
    /// computation in that case rather than reduce over nothing.
    #[must_use]
    pub fn liquid(&self) -> Vec<&Vertex> {
        self.vertices.iter().filter(|v| v.volume > 0).collect()
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ettj_core::calendars::WeekendCalendar;

    fn quote(symbol: &str, maturity: Date, volume: u64, rate: f64) -> FutureQuote {
        FutureQuote::new(symbol, maturity, volume, rate, rate + 0.05)
    }

    fn monday() -> Date {
        // 2025-01-06, a Monday
        Date::from_ymd(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_build_sorts_by_maturity() {
        let quotes = vec![
            quote("LONG", Date::from_ymd(2026, 1, 5).unwrap(), 10, 11.8),
            quote("SHORT", Date::from_ymd(2025, 2, 3).unwrap(), 10, 10.5),
            quote("MID", Date::from_ymd(2025, 7, 1).unwrap(), 10, 11.0),
        ];

        let set = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap();

        let symbols: Vec<&str> = set.iter().map(|v| v.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["SHORT", "MID", "LONG"]);

        let offsets = set.offsets();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(set.first_offset(), offsets[0]);
        assert_eq!(set.last_offset(), *offsets.last().unwrap());
    }

    #[test]
    fn test_zero_rate_rows_are_dropped() {
        let quotes = vec![
            quote("A", Date::from_ymd(2025, 2, 3).unwrap(), 10, 10.5),
            quote("DEAD", Date::from_ymd(2025, 4, 1).unwrap(), 10, 0.0),
            quote("B", Date::from_ymd(2025, 7, 1).unwrap(), 10, 11.0),
        ];

        let set = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|v| v.current_rate > 0.0));
    }

    #[test]
    fn test_matured_rows_are_dropped() {
        let quotes = vec![
            quote("PAST", Date::from_ymd(2024, 12, 1).unwrap(), 10, 9.9),
            quote("TODAY", monday(), 10, 10.1),
            quote("A", Date::from_ymd(2025, 2, 3).unwrap(), 10, 10.5),
            quote("B", Date::from_ymd(2025, 7, 1).unwrap(), 10, 11.0),
        ];

        let set = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|v| v.business_days > 0));
    }

    #[test]
    fn test_dedup_keeps_first_after_sort() {
        // Same maturity, different rates: one vertex survives, the
        // first one encountered after sorting.
        let maturity = Date::from_ymd(2025, 7, 1).unwrap();
        let quotes = vec![
            quote("A", Date::from_ymd(2025, 2, 3).unwrap(), 10, 10.5),
            quote("DUP1", maturity, 10, 11.0),
            quote("DUP2", maturity, 10, 11.3),
        ];

        let set = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap();
        assert_eq!(set.len(), 2);

        let dup = set.get(1).unwrap();
        assert_eq!(dup.symbol, "DUP1");
        assert!((dup.current_rate - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_insufficient_vertices_sentinel() {
        let one = vec![quote("A", Date::from_ymd(2025, 2, 3).unwrap(), 10, 10.5)];
        let err = VertexSet::build(&one, monday(), &WeekendCalendar).unwrap_err();
        assert!(err.is_insufficient_data());
        assert!(matches!(
            err,
            CurveError::InsufficientVertices { required: 2, got: 1 }
        ));

        let none: Vec<FutureQuote> = Vec::new();
        let err = VertexSet::build(&none, monday(), &WeekendCalendar).unwrap_err();
        assert!(matches!(
            err,
            CurveError::InsufficientVertices { required: 2, got: 0 }
        ));
    }

    #[test]
    fn test_all_rows_unquoted_is_insufficient() {
        let quotes = vec![
            quote("A", Date::from_ymd(2025, 2, 3).unwrap(), 10, 0.0),
            quote("B", Date::from_ymd(2025, 7, 1).unwrap(), 10, 0.0),
        ];
        let err = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_liquid_subset() {
        let quotes = vec![
            quote("A", Date::from_ymd(2025, 2, 3).unwrap(), 0, 10.5),
            quote("B", Date::from_ymd(2025, 7, 1).unwrap(), 500, 11.0),
            quote("C", Date::from_ymd(2026, 1, 5).unwrap(), 0, 11.8),
        ];

        let set = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap();
        assert_eq!(set.len(), 3);

        let liquid = set.liquid();
        assert_eq!(liquid.len(), 1);
        assert_eq!(liquid[0].symbol, "B");
    }

    #[test]
    fn test_rate_series_selection() {
        let quotes = vec![
            FutureQuote::new("A", Date::from_ymd(2025, 2, 3).unwrap(), 10, 10.5, 10.6),
            FutureQuote::new("B", Date::from_ymd(2025, 7, 1).unwrap(), 10, 11.0, 11.2),
        ];

        let set = VertexSet::build(&quotes, monday(), &WeekendCalendar).unwrap();
        assert_eq!(set.rates(RateSeries::Current), vec![10.5, 11.0]);
        assert_eq!(set.rates(RateSeries::Previous), vec![10.6, 11.2]);
    }
}
