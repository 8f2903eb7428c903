//! Local calendar-day keys.
//!
//! Holiday and assignment dates are keyed by the `YYYY-MM-DD` of the
//! viewer's local calendar day. Converting an instant to a key must apply
//! the local UTC offset first: taking the UTC date directly puts late
//! evening times west of UTC on the following day.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::error::{CalendarError, CalendarResult};

/// The `chrono` format string for date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as a `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Returns the local calendar date of an instant at the given UTC offset.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::calendar::{local_date, utc_offset};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// // 03:00 UTC on 1 March is still 29 February at UTC-5.
/// let instant = Utc.with_ymd_and_hms(2024, 3, 1, 3, 0, 0).unwrap();
/// let offset = utc_offset(-300).unwrap();
/// assert_eq!(local_date(instant, offset), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// Returns the `YYYY-MM-DD` key of the local calendar date of an instant.
pub fn local_date_key(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    date_key(local_date(instant, offset))
}

/// Builds a fixed UTC offset from minutes east of UTC (negative for west).
pub fn utc_offset(minutes: i32) -> CalendarResult<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(CalendarError::InvalidUtcOffset { minutes })
}
