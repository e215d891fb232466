//! Holiday calendar over a caller-supplied set of dates.
//!
//! The engine never sources holiday data itself: whoever feeds it quotes
//! also supplies the non-business dates for the market in question. This
//! module turns that list into a [`Calendar`].
//!
//! # Example
//!
//! ```
//! use ettj_core::calendars::{Calendar, HolidaySetCalendar};
//! use ettj_core::types::Date;
//!
//! let holidays = vec![
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     Date::from_ymd(2025, 12, 25).unwrap(),
//! ];
//! let cal = HolidaySetCalendar::from_dates("Exchange", holidays);
//!
//! assert!(!cal.is_business_day(Date::from_ymd(2025, 1, 1).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2025, 1, 2).unwrap()));
//! ```

use super::Calendar;
use crate::error::{EttjError, EttjResult};
use crate::types::Date;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A calendar built from an explicit list of holiday dates.
///
/// The weekend rule is fixed Saturday/Sunday (the rule of the exchange
/// this engine targets); any supplied date that falls on a weekend is
/// simply redundant. Lookup is O(1).
#[derive(Clone)]
pub struct HolidaySetCalendar {
    /// Name of the calendar
    name: String,
    /// Holiday dates, weekends excluded implicitly
    holidays: HashSet<Date>,
}

impl std::fmt::Debug for HolidaySetCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidaySetCalendar")
            .field("name", &self.name)
            .field("holiday_count", &self.holidays.len())
            .finish()
    }
}

impl HolidaySetCalendar {
    /// Create a new empty calendar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
        }
    }

    /// Create a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Load a calendar from JSON data.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "name": "Exchange",
    ///   "holidays": ["2025-01-01", "2025-12-25"]
    /// }
    /// ```
    pub fn from_json(json: &str) -> EttjResult<Self> {
        let payload: CalendarPayload =
            serde_json::from_str(json).map_err(|e| EttjError::CalendarError {
                reason: format!("Failed to parse JSON: {e}"),
            })?;
        Self::from_payload(payload)
    }

    /// Build a calendar from an already-parsed [`CalendarPayload`].
    pub fn from_payload(payload: CalendarPayload) -> EttjResult<Self> {
        let mut cal = Self::new(payload.name);
        for date_str in &payload.holidays {
            cal.holidays.insert(Date::parse(date_str)?);
        }
        Ok(cal)
    }

    /// Get the name of this calendar.
    pub fn calendar_name(&self) -> &str {
        &self.name
    }

    /// Add a holiday date.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Add multiple holidays.
    pub fn add_holidays(&mut self, dates: impl IntoIterator<Item = Date>) {
        self.holidays.extend(dates);
    }

    /// Count of holidays in this calendar.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Check if a date is in the supplied holiday set (weekends aside).
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

impl Calendar for HolidaySetCalendar {
    fn name(&self) -> &'static str {
        // The trait requires a static string; the configured name is
        // available via `calendar_name`.
        "Holiday Set"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.holidays.contains(&date)
    }
}

/// Serializable calendar definition.
///
/// This is the wire shape for loading a holiday list from JSON, e.g. a
/// file exported from the upstream holiday source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarPayload {
    /// Name of the calendar
    pub name: String,

    /// List of holiday dates in YYYY-MM-DD format
    #[serde(default)]
    pub holidays: Vec<String>,
}
