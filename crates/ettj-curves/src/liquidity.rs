//! Volume ranking of the traded contracts.

use ettj_core::types::Date;

use crate::vertex::VertexSet;

/// One row of the liquidity ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityRow {
    /// Contract ticker.
    pub symbol: String,
    /// Contract maturity date.
    pub maturity: Date,
    /// Current quoted rate, percent per annum.
    pub current_rate: f64,
    /// Traded quantity this session.
    pub volume: u64,
    /// Absolute intraday move: `|current_rate - previous_rate|`.
    pub rate_change: f64,
}

/// Ranks the snapshot's contracts by traded volume, descending, keeping
/// the top `n` rows.
///
/// Concentration of volume in particular vertices shows where the
/// session's activity sits; the intraday move is carried per row for
/// the same view. Zero-volume contracts sink to the bottom and fall
/// off the truncation naturally.
#[must_use]
pub fn most_traded(set: &VertexSet, n: usize) -> Vec<LiquidityRow> {
    let mut rows: Vec<LiquidityRow> = set
        .iter()
        .map(|v| LiquidityRow {
            symbol: v.symbol.clone(),
            maturity: v.maturity,
            current_rate: v.current_rate,
            volume: v.volume,
            rate_change: (v.current_rate - v.previous_rate).abs(),
        })
        .collect();

    rows.sort_by(|a, b| b.volume.cmp(&a.volume));
    rows.truncate(n);
    rows
}
