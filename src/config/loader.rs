//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calendar
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use chrono::{FixedOffset, Weekday};

use crate::calendar::{HolidayIndex, ReferenceData, ShiftMap, utc_offset};
use crate::error::{CalendarError, CalendarResult};
use crate::models::{Holiday, ShiftCategory};

use super::types::{
    CalendarConfig, CalendarSettings, HolidayYearConfig, ShiftCategoriesConfig,
};

/// Loads and provides access to calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calendar.yaml           # Name, UTC offset, week start
/// ├── shift_categories.yaml   # Shift category list
/// └── holidays/               # Optional
///     └── 2024.yaml           # Holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_calendar_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let data = loader.reference_data();
/// println!("{} shift categories", data.shifts().len());
/// # Ok::<(), shift_calendar_engine::error::CalendarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a required file is missing, a file contains
    /// invalid YAML, or the UTC offset is out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalendarSettings>(&path.join("calendar.yaml"))?;
        let offset = utc_offset(settings.utc_offset_minutes)?;

        let categories =
            Self::load_yaml::<ShiftCategoriesConfig>(&path.join("shift_categories.yaml"))?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        let config = CalendarConfig::new(settings, offset, categories.shift_categories, holidays);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalendarResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalendarError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file in the holidays directory.
    ///
    /// A missing directory means no holidays are configured.
    fn load_holidays(holidays_dir: &Path) -> CalendarResult<Vec<HolidayYearConfig>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| CalendarError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| CalendarError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| Self::load_yaml::<HolidayYearConfig>(path))
            .collect()
    }

    /// Returns the underlying calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the calendar settings.
    pub fn settings(&self) -> &CalendarSettings {
        self.config.settings()
    }

    /// Returns the local UTC offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.config.utc_offset()
    }

    /// Returns the first day of the week for month grids.
    pub fn week_start(&self) -> Weekday {
        self.config.settings().week_start
    }

    /// Returns all configured shift categories.
    pub fn shift_categories(&self) -> &[ShiftCategory] {
        self.config.shift_categories()
    }

    /// Returns the holidays configured for a year; empty if none.
    pub fn holidays_for_year(&self, year: i32) -> &[Holiday] {
        self.config
            .holidays()
            .get(&year)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Builds a reference-data snapshot from the loaded configuration.
    pub fn reference_data(&self) -> ReferenceData {
        let shifts = ShiftMap::build(self.config.shift_categories().iter().cloned());
        let indexes = self
            .config
            .holidays()
            .iter()
            .map(|(year, holidays)| HolidayIndex::build(*year, holidays.iter().cloned()));
        ReferenceData::new(shifts, indexes)
    }
}
