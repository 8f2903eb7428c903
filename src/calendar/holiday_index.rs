//! Holiday lookup by date, scoped to one calendar year.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::Holiday;

use super::local_date::DATE_KEY_FORMAT;

/// Anything the resolver can ask whether a date is a holiday.
///
/// A single [`HolidayIndex`] answers for its own year only. A
/// [`ReferenceData`](super::ReferenceData) snapshot answers for every year
/// it has loaded, which is what month grids spanning a year boundary need.
pub trait HolidayLookup: std::fmt::Debug {
    /// Returns the holiday name for `date`, if it is a holiday.
    fn holiday_on(&self, date: NaiveDate) -> Option<&str>;
}

/// A date-to-holiday-name dictionary for a single year.
///
/// The index holds no cross-year state: callers rebuild it whenever the
/// displayed year changes.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::calendar::HolidayIndex;
/// use shift_calendar_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let index = HolidayIndex::build(2024, vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }]);
///
/// assert_eq!(index.lookup_iso("2024-01-01"), Some("New Year's Day"));
/// assert_eq!(index.lookup_iso("2024-01-02"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayIndex {
    year: i32,
    names: HashMap<NaiveDate, String>,
}

impl HolidayIndex {
    /// Creates an index for `year` with no holidays.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            names: HashMap::new(),
        }
    }

    /// Builds the index for `year`.
    ///
    /// Holidays dated in another year are skipped. When two holidays share
    /// a date, the first one is kept.
    pub fn build<I>(year: i32, holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut names = HashMap::new();
        for holiday in holidays {
            if holiday.date.year() != year {
                debug!(
                    year,
                    date = %holiday.date,
                    name = %holiday.name,
                    "Skipping holiday outside index year"
                );
                continue;
            }
            names.entry(holiday.date).or_insert(holiday.name);
        }
        Self { year, names }
    }

    /// Returns the year this index covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Looks up the holiday name for a date.
    pub fn lookup(&self, date: NaiveDate) -> Option<&str> {
        self.names.get(&date).map(String::as_str)
    }

    /// Looks up the holiday name for a `YYYY-MM-DD` key.
    ///
    /// A malformed key is a miss, not an error.
    pub fn lookup_iso(&self, key: &str) -> Option<&str> {
        let date = NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()?;
        self.lookup(date)
    }

    /// Returns the number of holidays in the index.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the index has no holidays.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl HolidayLookup for HolidayIndex {
    fn holiday_on(&self, date: NaiveDate) -> Option<&str> {
        self.lookup(date)
    }
}
