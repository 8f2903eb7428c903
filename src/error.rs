//! Error types for the Shift Calendar Engine.
//!
//! Resolving a calendar day never fails: referential misses degrade to
//! [`Resolution::NoShift`](crate::models::Resolution::NoShift). The errors
//! here cover the operations around resolution that can genuinely fail,
//! such as loading configuration or building a month grid.

use thiserror::Error;

/// The main error type for the Shift Calendar Engine.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::error::CalendarError;
///
/// let error = CalendarError::InvalidMonth { year: 2024, month: 13 };
/// assert_eq!(error.to_string(), "Invalid month 13 for year 2024");
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A year/month pair does not name a calendar month.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (expected 1-12).
        month: u32,
    },

    /// A year is outside the range of representable calendar dates.
    #[error("Year {year} is out of range")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
    },

    /// A configured UTC offset is outside the range chrono accepts.
    #[error("Invalid UTC offset: {minutes} minutes")]
    InvalidUtcOffset {
        /// The offending offset in minutes east of UTC.
        minutes: i32,
    },
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;
