//! Date window domain model.
//!
//! All four searches are bounded by the same calendar-date window that ends
//! today and reaches back a fixed number of days.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default lookback used by the agenda: two weeks.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 14;

/// Format used for both ends of the window and for the report file name.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar-date interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Window that ends on `today` and starts `lookback_days` earlier.
    pub fn ending_on(today: NaiveDate, lookback_days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// The two-week window the agenda uses by default.
    pub fn two_weeks_ending(today: NaiveDate) -> Self {
        Self::ending_on(today, DEFAULT_LOOKBACK_DAYS)
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// `YYYY-MM-DD` of the first day (the "last" meeting date).
    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `YYYY-MM-DD` of the last day (the "current" date).
    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Search range token, `start..end`.
    pub fn range(&self) -> String {
        format!("{}..{}", self.start_str(), self.end_str())
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.range())
    }
}
