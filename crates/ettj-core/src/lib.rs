//! # ETTJ Core
//!
//! Core types and abstractions for the ETTJ term-structure engine.
//!
//! This crate provides the foundational building blocks used throughout ETTJ:
//!
//! - **Types**: The [`types::Date`] calendar date used for contract maturities
//! - **Business Day Calendars**: Weekday and holiday-aware business day counting
//! - **Errors**: Structured error types shared across the workspace
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//! - **Pure Functions**: Calendar arithmetic has no side effects
//!
//! ## Example
//!
//! ```rust
//! use ettj_core::prelude::*;
//!
//! let cal = WeekendCalendar;
//! let today = Date::from_ymd(2025, 1, 6).unwrap();
//! let maturity = Date::from_ymd(2025, 1, 10).unwrap();
//!
//! assert_eq!(cal.business_days_between(today, maturity), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, HolidaySetCalendar, WeekendCalendar};
    pub use crate::error::{EttjError, EttjResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{EttjError, EttjResult};
pub use types::Date;
