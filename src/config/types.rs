//! Configuration types for calendar resolution.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use chrono::{FixedOffset, Weekday};
use serde::Deserialize;

use crate::models::{Holiday, ShiftCategory, weekday_serde};

/// General calendar settings from `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarSettings {
    /// Human-readable name of the organisation or site.
    pub name: String,
    /// Local UTC offset in minutes east of UTC (e.g. -300 for UTC-5).
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// First day of the week in month grids.
    #[serde(default = "default_week_start", with = "weekday_serde")]
    pub week_start: Weekday,
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}

/// Shift categories file structure (`shift_categories.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftCategoriesConfig {
    /// All shift categories.
    #[serde(default)]
    pub shift_categories: Vec<ShiftCategory>,
}

/// One year of holidays (`holidays/<year>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayYearConfig {
    /// The year the file covers.
    pub year: i32,
    /// The holidays for that year.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete calendar configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Calendar settings.
    settings: CalendarSettings,
    /// The validated UTC offset.
    utc_offset: FixedOffset,
    /// Shift categories in file order.
    shift_categories: Vec<ShiftCategory>,
    /// Holidays by year.
    holidays: BTreeMap<i32, Vec<Holiday>>,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from its component parts.
    ///
    /// Holiday files declaring the same year are merged in the order given.
    pub fn new(
        settings: CalendarSettings,
        utc_offset: FixedOffset,
        shift_categories: Vec<ShiftCategory>,
        holiday_years: Vec<HolidayYearConfig>,
    ) -> Self {
        let mut holidays: BTreeMap<i32, Vec<Holiday>> = BTreeMap::new();
        for file in holiday_years {
            holidays.entry(file.year).or_default().extend(file.holidays);
        }
        Self {
            settings,
            utc_offset,
            shift_categories,
            holidays,
        }
    }

    /// Returns the calendar settings.
    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Returns the local UTC offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Returns all shift categories.
    pub fn shift_categories(&self) -> &[ShiftCategory] {
        &self.shift_categories
    }

    /// Returns holidays grouped by year.
    pub fn holidays(&self) -> &BTreeMap<i32, Vec<Holiday>> {
        &self.holidays
    }
}
