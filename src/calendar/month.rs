//! Month view grid.
//!
//! A month calendar renders whole weeks, so the grid starts on the
//! configured first day of the week on or before the 1st and ends on the
//! last day of that week on or after the month's final day.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{CalendarError, CalendarResult};

/// One calendar month laid out in whole weeks.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::calendar::CalendarMonth;
/// use chrono::{NaiveDate, Weekday};
///
/// // February 2015 starts on a Sunday and has exactly four weeks.
/// let month = CalendarMonth::new(2015, 2, Weekday::Sun).unwrap();
/// assert_eq!(month.cells().len(), 28);
/// assert_eq!(month.grid_start(), NaiveDate::from_ymd_opt(2015, 2, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    week_start: Weekday,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl CalendarMonth {
    /// Creates the month view for `year`/`month` (1-12).
    ///
    /// Returns [`CalendarError::InvalidMonth`] for a month outside 1-12 and
    /// [`CalendarError::YearOutOfRange`] when the month cannot be
    /// represented as dates.
    pub fn new(year: i32, month: u32, week_start: Weekday) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        let out_of_range = || CalendarError::YearOutOfRange { year };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_month
            .and_then(|d| d.pred_opt())
            .ok_or_else(out_of_range)?;

        Ok(Self {
            year,
            month,
            week_start,
            first_day,
            last_day,
        })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the week used by the grid.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the 1st of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns true if `date` belongs to this month (not just its grid).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// Returns the first date shown in the grid.
    pub fn grid_start(&self) -> NaiveDate {
        let lead = days_between(self.week_start, self.first_day.weekday());
        self.first_day
            .checked_sub_days(Days::new(lead))
            .unwrap_or(self.first_day)
    }

    /// Returns the last date shown in the grid.
    pub fn grid_end(&self) -> NaiveDate {
        let trail = days_between(self.last_day.weekday(), self.week_start.pred());
        self.last_day
            .checked_add_days(Days::new(trail))
            .unwrap_or(self.last_day)
    }

    /// Returns the dates of the month itself.
    pub fn days(&self) -> Vec<NaiveDate> {
        date_range(self.first_day, self.last_day)
    }

    /// Returns every date shown in the grid, including leading and trailing
    /// days from the neighbouring months.
    pub fn cells(&self) -> Vec<NaiveDate> {
        date_range(self.grid_start(), self.grid_end())
    }
}

/// Days to step forward from `from` to reach `to` (0-6).
fn days_between(from: Weekday, to: Weekday) -> u64 {
    let from = u64::from(from.num_days_from_monday());
    let to = u64::from(to.num_days_from_monday());
    (to + 7 - from) % 7
}

/// Inclusive list of dates; empty when `start > end`.
pub(crate) fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
