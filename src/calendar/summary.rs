//! Totals over a run of resolved days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayResolution, Resolution};

/// Day counts and scheduled hours for a list of resolved days.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::calendar::ScheduleSummary;
/// use shift_calendar_engine::models::{DayResolution, Resolution};
/// use chrono::{NaiveDate, Weekday};
///
/// let days = vec![DayResolution {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     weekday: Weekday::Mon,
///     resolution: Resolution::Holiday { name: "New Year's Day".to_string() },
/// }];
///
/// let summary = ScheduleSummary::from_days(&days);
/// assert_eq!(summary.holiday_days, 1);
/// assert!(summary.scheduled_hours.is_zero());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Days resolved as holidays.
    pub holiday_days: u32,
    /// Days with a shift.
    pub shift_days: u32,
    /// Days with neither a holiday nor a shift.
    pub no_shift_days: u32,
    /// Sum of the scheduled hours of every shift day.
    pub scheduled_hours: Decimal,
}

impl ScheduleSummary {
    /// Tallies a list of resolved days.
    pub fn from_days<'a, I>(days: I) -> Self
    where
        I: IntoIterator<Item = &'a DayResolution>,
    {
        days.into_iter()
            .fold(Self::default(), |mut summary, day| {
                match &day.resolution {
                    Resolution::Holiday { .. } => summary.holiday_days += 1,
                    Resolution::Shift { category, .. } => {
                        summary.shift_days += 1;
                        summary.scheduled_hours += category.duration_hours();
                    }
                    Resolution::NoShift => summary.no_shift_days += 1,
                }
                summary
            })
    }
}
