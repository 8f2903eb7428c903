//! Public holiday model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named public holiday on a single date.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
/// };
/// assert_eq!(holiday.year(), 2024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "New Year's Day").
    pub name: String,
}

impl Holiday {
    /// Returns the calendar year the holiday falls in.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
