//! Raw quote records from the market-data feed.

use ettj_core::types::Date;
use serde::{Deserialize, Serialize};

/// One raw quote row for a traded rate future.
///
/// This is the engine's input boundary: whatever upstream feed the
/// caller uses, it translates each contract into one of these. Rates
/// are annualized percentages; a `current_rate` of exactly zero means
/// the contract has no active quote this session and will be dropped
/// by cleaning. `volume` of zero marks an illiquid contract that still
/// contributes curve geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureQuote {
    /// Contract ticker, opaque to the engine.
    pub symbol: String,
    /// Contract maturity date.
    pub maturity: Date,
    /// Traded quantity this session.
    pub volume: u64,
    /// Current quoted rate, percent per annum. Zero means no quote.
    pub current_rate: f64,
    /// Previous session's settlement rate, percent per annum.
    pub previous_rate: f64,
}

impl FutureQuote {
    /// Creates a new quote row.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        maturity: Date,
        volume: u64,
        current_rate: f64,
        previous_rate: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            maturity,
            volume,
            current_rate,
            previous_rate,
        }
    }
}
