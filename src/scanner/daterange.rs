//! Log coverage tracking over partial dates.
//!
//! Qualifying log lines open with a `Mon DD` pair but carry no year, so
//! dates are compared within a single reference year. Spans that cross a
//! year boundary (December into January) therefore compare incorrectly;
//! that limitation is inherited from the log format, not patched here. A
//! config-supplied year only changes the reference year (e.g. to admit
//! Feb 29), not the no-year comparison semantics.

use chrono::NaiveDate;

/// Reference year used when none is configured. 1900 is not a leap year,
/// so `Feb 29` is rejected by default.
pub const REFERENCE_YEAR: i32 = 1900;

/// Running (min, max) over observed partial dates.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    year: i32,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}

impl DateRange {
    pub fn new() -> Self {
        Self::with_year(REFERENCE_YEAR)
    }

    /// Track dates against an explicit year instead of [`REFERENCE_YEAR`].
    pub fn with_year(year: i32) -> Self {
        Self {
            year,
            min: None,
            max: None,
        }
    }

    /// Offer a whole log line.
    ///
    /// Lines with fewer than three whitespace tokens, or whose first two
    /// tokens do not parse as a month abbreviation and day number, are
    /// silently skipped.
    pub fn observe_line(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let (Some(month), Some(day), Some(_)) = (parts.next(), parts.next(), parts.next()) else {
            return;
        };
        self.observe(month, day);
    }

    /// Offer a month-abbreviation / day-number token pair.
    pub fn observe(&mut self, month: &str, day: &str) {
        let Some(date) = self.parse_partial(month, day) else {
            return;
        };
        self.min = Some(self.min.map_or(date, |min| min.min(date)));
        self.max = Some(self.max.map_or(date, |max| max.max(date)));
    }

    /// Earliest date seen, absent until the first qualifying line.
    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    /// Latest date seen, absent until the first qualifying line.
    pub fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    /// Human-readable span, e.g. `"Jun 16 - Jun 18"`.
    pub fn summary(&self) -> Option<String> {
        let (min, max) = (self.min?, self.max?);
        Some(format!("{} - {}", min.format("%b %d"), max.format("%b %d")))
    }

    /// Widen this range to cover another.
    pub fn merge(&mut self, other: &DateRange) {
        for date in [other.min, other.max].into_iter().flatten() {
            self.min = Some(self.min.map_or(date, |min| min.min(date)));
            self.max = Some(self.max.map_or(date, |max| max.max(date)));
        }
    }

    fn parse_partial(&self, month: &str, day: &str) -> Option<NaiveDate> {
        let month = month_number(month)?;
        if day.is_empty() || !day.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let day: u32 = day.parse().ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

/// Three-letter month abbreviation to month number, case-insensitive.
fn month_number(token: &str) -> Option<u32> {
    let number = match token.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}
