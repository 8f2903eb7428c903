//! Configuration loading for the Shift Calendar Engine.
//!
//! This module loads calendar settings, shift categories and per-year
//! holiday lists from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_calendar_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendar: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, CalendarSettings, HolidayYearConfig, ShiftCategoriesConfig};
