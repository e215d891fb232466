//! # ETTJ Curves
//!
//! Term-structure construction for quoted rate futures.
//!
//! One snapshot of traded futures (one quoted rate per maturity vertex)
//! goes in; a continuous spot curve, the implied inter-vertex forward
//! rates, and curve-shape statistics come out.
//!
//! This crate provides:
//!
//! - **Quotes**: [`FutureQuote`], the raw per-contract input record
//! - **Vertices**: [`VertexSet`], the cleaned, ordered curve points
//! - **Sampling**: natural-spline interpolation at daily resolution
//! - **Forwards**: no-arbitrage forward rates between consecutive vertices
//! - **Slope**: STEEP / INVERTED / FLAT classification across tenors
//! - **Liquidity**: volume ranking of the traded contracts
//!
//! ## Quick Start
//!
//! ```rust
//! use ettj_core::calendars::WeekendCalendar;
//! use ettj_core::types::Date;
//! use ettj_curves::prelude::*;
//!
//! let today = Date::from_ymd(2025, 11, 28).unwrap();
//! let quotes = vec![
//!     FutureQuote::new("F27", Date::from_ymd(2027, 1, 4).unwrap(), 120_000, 13.40, 13.45),
//!     FutureQuote::new("F28", Date::from_ymd(2028, 1, 3).unwrap(), 80_000, 13.10, 13.18),
//!     FutureQuote::new("F29", Date::from_ymd(2029, 1, 2).unwrap(), 30_000, 13.05, 13.11),
//! ];
//!
//! let set = VertexSet::build(&quotes, today, &WeekendCalendar).unwrap();
//! let curve = sample_daily(&set, RateSeries::Current).unwrap();
//! let fwds = forwards(&set).unwrap();
//!
//! assert_eq!(curve.len(), (set.last_offset() - set.first_offset() + 1) as usize);
//! assert_eq!(fwds.len(), set.len() - 1);
//! ```
//!
//! Every operation is a pure, synchronous, in-memory computation over an
//! immutable snapshot. Refresh scheduling, caching, and rendering belong
//! to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod forward;
pub mod liquidity;
pub mod quotes;
pub mod slope;
pub mod term_structure;
pub mod vertex;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::forward::{compound_factor, forwards, ForwardPoint, BUSINESS_DAYS_PER_YEAR};
    pub use crate::liquidity::{most_traded, LiquidityRow};
    pub use crate::quotes::FutureQuote;
    pub use crate::slope::{slope_report, Slope, SlopeClass, SlopeReport};
    pub use crate::term_structure::{sample_both, sample_daily, CurveSample};
    pub use crate::vertex::{RateSeries, Vertex, VertexSet};
}

pub use error::{CurveError, CurveResult};
pub use forward::{forwards, ForwardPoint};
pub use quotes::FutureQuote;
pub use term_structure::{sample_daily, CurveSample};
pub use vertex::{RateSeries, Vertex, VertexSet};
