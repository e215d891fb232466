//! Error types for curve operations.
//!
//! Two kinds of condition flow through [`CurveError`] and they are not
//! alike. [`CurveError::InsufficientVertices`] is an expected market
//! state (pre-market, illiquid session): callers detect it with
//! [`CurveError::is_insufficient_data`] and render an "awaiting data"
//! state. Everything else signals malformed input that the cleaning
//! pipeline would have prevented: a bug in the caller, reported with a
//! precise diagnostic and never silently coerced.

use ettj_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Fewer than the required number of usable vertices after cleaning.
    ///
    /// This is the engine's "no curve available" sentinel, not a fault.
    #[error("Insufficient vertices: need at least {required}, got {got}")]
    InsufficientVertices {
        /// Minimum vertices required to form a curve.
        required: usize,
        /// Usable vertices that survived cleaning.
        got: usize,
    },

    /// Business-day offsets are not strictly increasing.
    #[error("Non-monotonic offsets at index {index}: {prev} >= {current}")]
    NonMonotonicOffsets {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous offset value.
        prev: i64,
        /// Current offset value.
        current: i64,
    },

    /// Two consecutive vertices share a business-day offset.
    ///
    /// A forward over a zero-width interval has no defined rate; the
    /// deduplication step makes this unreachable through the public
    /// pipeline.
    #[error("Zero-width interval at offset {offset}")]
    ZeroWidthInterval {
        /// The duplicated offset.
        offset: i64,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    Interpolation {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient vertices error.
    #[must_use]
    pub fn insufficient_vertices(required: usize, got: usize) -> Self {
        Self::InsufficientVertices { required, got }
    }

    /// Creates a non-monotonic offsets error.
    #[must_use]
    pub fn non_monotonic_offsets(index: usize, prev: i64, current: i64) -> Self {
        Self::NonMonotonicOffsets {
            index,
            prev,
            current,
        }
    }

    /// Creates a zero-width interval error.
    #[must_use]
    pub fn zero_width_interval(offset: i64) -> Self {
        Self::ZeroWidthInterval { offset }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation(reason: impl Into<String>) -> Self {
        Self::Interpolation {
            reason: reason.into(),
        }
    }

    /// True for the expected "not enough usable vertices" state.
    ///
    /// Callers use this to distinguish an idle market from a programming
    /// error.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientVertices { .. })
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::Interpolation {
            reason: err.to_string(),
        }
    }
}
