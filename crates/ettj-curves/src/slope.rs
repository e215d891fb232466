//! Curve-shape classification across tenors.

use std::fmt;

use crate::vertex::{Vertex, VertexSet};

/// Business-day offset of the "medium" tenor anchor (one year).
pub const MEDIUM_TENOR_OFFSET: i64 = 252;

/// Qualitative label for a rate differential between two tenors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeClass {
    /// Differential above +0.20 percentage points.
    Steep,
    /// Differential below -0.20 percentage points.
    Inverted,
    /// Differential within the +-0.20 band.
    Flat,
}

impl SlopeClass {
    /// Classifies a rate differential in percentage points.
    ///
    /// Pure and total: every finite input maps to a label.
    #[must_use]
    pub fn classify(differential: f64) -> Self {
        if differential > 0.20 {
            Self::Steep
        } else if differential < -0.20 {
            Self::Inverted
        } else {
            Self::Flat
        }
    }
}

impl fmt::Display for SlopeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Steep => "steep",
            Self::Inverted => "inverted",
            Self::Flat => "flat",
        };
        write!(f, "{label}")
    }
}

/// A classified rate differential between two tenors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slope {
    /// Destination rate minus origin rate, percentage points.
    pub differential: f64,
    /// The qualitative label for the differential.
    pub class: SlopeClass,
}

impl Slope {
    fn between(from: &Vertex, to: &Vertex) -> Self {
        let differential = to.current_rate - from.current_rate;
        Self {
            differential,
            class: SlopeClass::classify(differential),
        }
    }
}

/// Curve-shape summary over the liquid vertices of one snapshot.
///
/// Anchored on three tenors of the liquid subset: the shortest offset,
/// the offset nearest [`MEDIUM_TENOR_OFFSET`], and the longest offset.
#[derive(Debug, Clone)]
pub struct SlopeReport<'a> {
    /// Shortest-offset liquid vertex.
    pub short: &'a Vertex,
    /// Liquid vertex nearest the one-year offset.
    pub medium: &'a Vertex,
    /// Longest-offset liquid vertex.
    pub long: &'a Vertex,
    /// Short to medium segment.
    pub short_to_medium: Slope,
    /// Medium to long segment.
    pub medium_to_long: Slope,
    /// Short to long segment, the headline curve shape.
    pub short_to_long: Slope,
}

/// Builds the slope report for a snapshot.
///
/// Operates only on vertices with traded volume. Returns `None` when
/// that subset is empty (no liquidity yet this session) — the guarded
/// alternative to reducing over an empty set. The medium anchor is the
/// liquid vertex minimizing `|offset - 252|`; on a distance tie the
/// earlier vertex wins.
#[must_use]
pub fn slope_report(set: &VertexSet) -> Option<SlopeReport<'_>> {
    let liquid = set.liquid();
    if liquid.is_empty() {
        return None;
    }

    // Offsets are unique, so min/max have no ties; the medium anchor
    // relies on min_by_key returning the first of equal elements.
    let short = *liquid.iter().min_by_key(|v| v.business_days)?;
    let long = *liquid.iter().max_by_key(|v| v.business_days)?;
    let medium = *liquid
        .iter()
        .min_by_key(|v| (v.business_days - MEDIUM_TENOR_OFFSET).abs())?;

    Some(SlopeReport {
        short,
        medium,
        long,
        short_to_medium: Slope::between(short, medium),
        medium_to_long: Slope::between(medium, long),
        short_to_long: Slope::between(short, long),
    })
}
