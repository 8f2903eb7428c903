//! Resolution results for calendar days.
//!
//! A [`Resolution`] is computed per staff member and date and never stored.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::weekday::upper_name;
use super::{ShiftCategory, ShiftType};

/// The single outcome for one staff member on one calendar day.
///
/// Serialized with a `kind` tag of `HOLIDAY`, `SHIFT` or `NONE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    /// The day is a public holiday. Takes precedence over any shift.
    Holiday {
        /// The holiday name.
        name: String,
    },
    /// A shift category applies.
    Shift {
        /// The resolved shift category.
        category: ShiftCategory,
        /// The kind of assignment that produced the shift.
        source: ShiftType,
    },
    /// No holiday and no shift.
    #[serde(rename = "NONE")]
    NoShift,
}

impl Resolution {
    /// Returns true for a holiday resolution.
    pub fn is_holiday(&self) -> bool {
        matches!(self, Resolution::Holiday { .. })
    }

    /// Returns the resolved shift category, if any.
    pub fn category(&self) -> Option<&ShiftCategory> {
        match self {
            Resolution::Shift { category, .. } => Some(category),
            _ => None,
        }
    }

    /// Returns the holiday name, if any.
    pub fn holiday_name(&self) -> Option<&str> {
        match self {
            Resolution::Holiday { name } => Some(name),
            _ => None,
        }
    }
}

/// A resolution paired with the date and weekday it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResolution {
    /// The calendar date.
    pub date: NaiveDate,
    /// The weekday of `date`, written as an upper-case name.
    #[serde(with = "upper_name")]
    pub weekday: Weekday,
    /// The outcome for the day.
    pub resolution: Resolution,
}
