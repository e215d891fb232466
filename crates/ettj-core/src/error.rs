//! Error types for the ETTJ core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type EttjResult<T> = Result<T, EttjError>;

/// The error type for core date and calendar operations.
#[derive(Error, Debug, Clone)]
pub enum EttjError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl EttjError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EttjError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_calendar_error_display() {
        let err = EttjError::calendar_error("cannot parse holiday list");
        assert!(err.to_string().contains("Calendar error"));
    }
}
