//! Business day calendars and counting.
//!
//! This module provides:
//! - The [`Calendar`] trait for deciding which days trade
//! - Business day counting between calendar dates
//! - [`WeekendCalendar`], a holiday-free fallback calendar
//!
//! # Counting Convention
//!
//! `business_days_between(start, end)` counts business days over the
//! half-open interval **exclusive of `start`, inclusive of `end`**:
//! the reference date itself never counts, the maturity does. The same
//! convention is applied everywhere; `business_days_between(d, d)` is 0
//! and a reversed span returns the negated forward count rather than
//! failing. Callers treat non-positive counts as unusable vertices.

mod holiday_set;

pub use holiday_set::{CalendarPayload, HolidaySetCalendar};

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays for a
/// specific market. All provided methods are pure: no side effects, no
/// hidden state, identical answers for identical inputs.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Counts business days between two dates (exclusive of start,
    /// inclusive of end).
    ///
    /// Returns a negative count when `end < start`. Dates outside any
    /// holiday coverage window still count correctly using the weekday
    /// rule alone.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        if start == end {
            return 0;
        }

        let (lo, hi, sign) = if start < end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let mut count = 0i64;
        let mut current = lo.add_days(1);

        while current <= hi {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count * sign
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}
