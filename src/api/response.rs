//! Response types for the Shift Calendar Engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`CalendarError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::ScheduleSummary;
use crate::error::CalendarError;
use crate::models::{DayResolution, weekday_serde};

/// Response body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The calendar year.
    pub year: i32,
    /// The month number (1-12).
    pub month: u32,
    /// First day of the week used for the grid.
    #[serde(with = "weekday_serde")]
    pub week_start: Weekday,
    /// One entry per included staff member, in request order.
    pub staff: Vec<StaffCalendar>,
}

/// One staff member's resolved month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCalendar {
    /// The staff member's id.
    pub staff_id: String,
    /// The staff member's name.
    pub name: String,
    /// The staff member's department.
    pub department: String,
    /// Every grid cell, including days from neighbouring months.
    pub days: Vec<DayResolution>,
    /// Totals over the month's own days.
    pub summary: ScheduleSummary,
}

/// Response body after replacing the shift categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCategoriesReplaced {
    /// Number of distinct categories now loaded.
    pub count: usize,
}

/// Response body after replacing a year's holidays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysReplaced {
    /// The year that was replaced.
    pub year: i32,
    /// Number of holidays indexed for that year.
    pub count: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        match error {
            CalendarError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            CalendarError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            CalendarError::InvalidMonth { year, month } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month {} for year {}", month, year),
                    "Month must be between 1 and 12",
                ),
            ),
            CalendarError::YearOutOfRange { year } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_YEAR",
                    format!("Year {} is out of range", year),
                    "Year is not a representable calendar year",
                ))
            }
            CalendarError::InvalidUtcOffset { minutes } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid UTC offset",
                    format!("UTC offset of {} minutes is out of range", minutes),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::InvalidMonth {
            year: 2024,
            month: 13,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
        assert!(api_error.error.message.contains("13"));
    }

    #[test]
    fn test_year_out_of_range_maps_to_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::YearOutOfRange { year: 300000 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_YEAR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Year is not a representable calendar year")
        );
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = CalendarError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_calendar_response_writes_week_start_name() {
        let response = CalendarResponse {
            year: 2024,
            month: 1,
            week_start: Weekday::Sun,
            staff: Vec::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["week_start"], "SUNDAY");
    }
}
