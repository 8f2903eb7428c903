//! Immutable snapshot of the reference data resolution runs against.
//!
//! A snapshot is never mutated. Refetching shift categories or a year's
//! holidays produces a new snapshot that shares the untouched parts with
//! the old one, so hosts can swap a single `Arc` between renders.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use super::holiday_index::{HolidayIndex, HolidayLookup};
use super::shift_map::ShiftMap;

/// Shift categories plus per-year holiday indexes.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    shifts: Arc<ShiftMap>,
    holidays: HashMap<i32, Arc<HolidayIndex>>,
}

impl ReferenceData {
    /// Creates a snapshot. A later index for the same year replaces an
    /// earlier one.
    pub fn new<I>(shifts: ShiftMap, holidays: I) -> Self
    where
        I: IntoIterator<Item = HolidayIndex>,
    {
        let holidays = holidays
            .into_iter()
            .map(|index| (index.year(), Arc::new(index)))
            .collect();
        Self {
            shifts: Arc::new(shifts),
            holidays,
        }
    }

    /// Returns the shift categories.
    pub fn shifts(&self) -> &ShiftMap {
        &self.shifts
    }

    /// Returns the holiday index for a year, if one has been loaded.
    pub fn holidays(&self, year: i32) -> Option<&HolidayIndex> {
        self.holidays.get(&year).map(Arc::as_ref)
    }

    /// Returns the years with a loaded holiday index, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.holidays.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Returns a new snapshot with the shift categories replaced.
    pub fn with_shifts(&self, shifts: ShiftMap) -> Self {
        Self {
            shifts: Arc::new(shifts),
            holidays: self.holidays.clone(),
        }
    }

    /// Returns a new snapshot with one year's holiday index replaced.
    pub fn with_holidays(&self, index: HolidayIndex) -> Self {
        let mut holidays = self.holidays.clone();
        holidays.insert(index.year(), Arc::new(index));
        Self {
            shifts: Arc::clone(&self.shifts),
            holidays,
        }
    }
}

/// Looks each date up in its own year's index. A year with no loaded
/// index has no holidays.
impl HolidayLookup for ReferenceData {
    fn holiday_on(&self, date: NaiveDate) -> Option<&str> {
        self.holidays(date.year())?.lookup(date)
    }
}
