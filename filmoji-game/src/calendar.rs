//! Date arithmetic for the daily rotation.
//!
//! All date handling is normalized once at the `today()` boundary: the local
//! clock is read, reduced to a plain calendar date, and every downstream
//! consumer works with `NaiveDate` or the `YYYY-MM-DD` day string.

use chrono::{Duration, Local, NaiveDate};

use crate::constants::EPOCH_YMD;

/// Day-string format used as the history key and registry key.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Resolves "today" for the engine.
///
/// `shift_days` moves the clock by whole days for preview and testing; a
/// fixed date pins the calendar entirely (tests, deterministic replays).
#[derive(Debug, Clone, Copy, Default)]
pub struct Calendar {
    shift_days: i64,
    fixed: Option<NaiveDate>,
}

impl Calendar {
    /// Calendar following the local clock with no shift.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shift_days: 0,
            fixed: None,
        }
    }

    /// Calendar following the local clock shifted by `days` whole days.
    #[must_use]
    pub const fn with_shift(days: i64) -> Self {
        Self {
            shift_days: days,
            fixed: None,
        }
    }

    /// Calendar pinned to a fixed date. The shift still applies.
    #[must_use]
    pub const fn fixed(date: NaiveDate) -> Self {
        Self {
            shift_days: 0,
            fixed: Some(date),
        }
    }

    /// Apply a whole-day shift on top of the current configuration.
    #[must_use]
    pub const fn shifted(mut self, days: i64) -> Self {
        self.shift_days = days;
        self
    }

    /// Current date, without a time-of-day component.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        let base = self
            .fixed
            .unwrap_or_else(|| Local::now().date_naive());
        base + Duration::days(self.shift_days)
    }

    /// Current date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn today_string(&self) -> String {
        day_string(self.today())
    }
}

/// First day of the daily rotation.
#[must_use]
pub fn epoch() -> NaiveDate {
    let (y, m, d) = EPOCH_YMD;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Format a date as a day string (`YYYY-MM-DD`).
#[must_use]
pub fn day_string(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parse a day string back into a date.
#[must_use]
pub fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

/// Ordinal day number of `date` relative to `epoch`, counting from 1 on the
/// epoch day itself. Exact across month and year boundaries; dates before the
/// epoch are not a supported input.
#[must_use]
pub fn ordinal(epoch: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordinal_counts_from_one_on_the_epoch() {
        let start = epoch();
        assert_eq!(ordinal(start, start), 1);
        assert_eq!(ordinal(start, date(2022, 7, 18)), 2);
    }

    #[test]
    fn ordinal_crosses_month_and_year_boundaries() {
        let start = epoch();
        // July has 31 days: 07-17 is day 1, 07-31 is day 15, 08-01 is day 16.
        assert_eq!(ordinal(start, date(2022, 7, 31)), 15);
        assert_eq!(ordinal(start, date(2022, 8, 1)), 16);
        // 2022-07-17 .. 2022-12-31 is 167 days, so Jan 1st is day 169.
        assert_eq!(ordinal(start, date(2023, 1, 1)), 169);
    }

    #[test]
    fn day_string_roundtrips() {
        let d = date(2022, 8, 5);
        assert_eq!(day_string(d), "2022-08-05");
        assert_eq!(parse_day("2022-08-05"), Some(d));
        assert_eq!(parse_day("not-a-date"), None);
    }

    #[test]
    fn fixed_calendar_applies_shift() {
        let cal = Calendar::fixed(date(2022, 7, 17));
        assert_eq!(cal.today_string(), "2022-07-17");

        let previewed = Calendar::fixed(date(2022, 7, 31)).shifted(1);
        assert_eq!(previewed.today_string(), "2022-08-01");
    }

    #[test]
    fn shifted_calendar_moves_whole_days() {
        let base = Calendar::new().today();
        let ahead = Calendar::with_shift(3).today();
        assert_eq!(ahead.signed_duration_since(base).num_days(), 3);
    }
}
