//! HTTP request handlers for the Shift Calendar Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
};
use chrono::Datelike;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{
    CalendarMonth, HolidayIndex, ReferenceData, ScheduleSummary, ShiftMap, ShiftResolver,
    local_date,
};
use crate::models::{DayResolution, Holiday, ShiftCategory};

use super::request::{CalendarRequest, ResolveRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, HolidaysReplaced, ShiftCategoriesReplaced,
    StaffCalendar,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar", post(calendar_handler))
        .route("/resolve", post(resolve_handler))
        .route("/shift-categories", put(replace_shift_categories_handler))
        .route("/holidays/:year", put(replace_holidays_handler))
        .with_state(state)
}

/// Handler for POST /calendar.
///
/// Resolves a month grid for each staff member in the request.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let month = match CalendarMonth::new(request.year, request.month, state.week_start()) {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid calendar month requested");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let snapshot = state.snapshot();
    let response = build_calendar(&snapshot, &month, request, correlation_id);

    info!(
        correlation_id = %correlation_id,
        year = month.year(),
        month = month.month(),
        staff_count = response.staff.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calendar resolved"
    );
    json_response(StatusCode::OK, response)
}

/// Resolves the requested month for every staff member that passes the
/// department filter.
///
/// Each grid cell is checked against its own year's holidays, so lead-in
/// and trailing days from a neighbouring year keep their holidays.
fn build_calendar(
    snapshot: &ReferenceData,
    month: &CalendarMonth,
    request: CalendarRequest,
    correlation_id: Uuid,
) -> CalendarResponse {
    let first_year = month.grid_start().year();
    let last_year = month.grid_end().year();
    for year in first_year..=last_year {
        if snapshot.holidays(year).is_none() {
            warn!(
                correlation_id = %correlation_id,
                year,
                "No holidays loaded for year"
            );
        }
    }

    let department = request.department.as_deref();
    let staff = request
        .staff
        .into_iter()
        .filter(|schedule| department.is_none_or(|d| schedule.staff.in_department(d)))
        .map(|schedule| {
            let resolver = ShiftResolver::new(snapshot.shifts(), snapshot, &schedule.assignments);
            let days = resolver.resolve_month(month);
            let summary =
                ScheduleSummary::from_days(days.iter().filter(|day| month.contains(day.date)));
            StaffCalendar {
                staff_id: schedule.staff.id,
                name: schedule.staff.name,
                department: schedule.staff.department,
                days,
                summary,
            }
        })
        .collect();

    CalendarResponse {
        year: month.year(),
        month: month.month(),
        week_start: month.week_start(),
        staff,
    }
}

/// Handler for POST /resolve.
///
/// Resolves the local calendar day that contains the given instant.
async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resolve request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let date = local_date(request.at, state.utc_offset());
    let snapshot = state.snapshot();
    let resolver = ShiftResolver::new(snapshot.shifts(), &*snapshot, &request.assignments);
    let weekday = date.weekday();
    let day = DayResolution {
        date,
        weekday,
        resolution: resolver.resolve_on(date, weekday),
    };

    info!(
        correlation_id = %correlation_id,
        at = %request.at,
        date = %date,
        "Instant resolved"
    );
    json_response(StatusCode::OK, day)
}

/// Handler for PUT /shift-categories.
///
/// Replaces every shift category with the request body.
async fn replace_shift_categories_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ShiftCategory>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let categories = match payload {
        Ok(Json(categories)) => categories,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shifts = ShiftMap::build(categories);
    let count = shifts.len();
    state.update(|data| data.with_shifts(shifts));

    info!(correlation_id = %correlation_id, count, "Shift categories replaced");
    json_response(StatusCode::OK, ShiftCategoriesReplaced { count })
}

/// Handler for PUT /holidays/{year}.
///
/// Replaces one year's holidays with the request body. Holidays dated in
/// another year are ignored.
async fn replace_holidays_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    payload: Result<Json<Vec<Holiday>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let holidays = match payload {
        Ok(Json(holidays)) => holidays,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let submitted = holidays.len();
    let index = HolidayIndex::build(year, holidays);
    let count = index.len();
    if count < submitted {
        warn!(
            correlation_id = %correlation_id,
            year,
            submitted,
            indexed = count,
            "Some holidays were outside the year or duplicated"
        );
    }
    state.update(|data| data.with_holidays(index));

    info!(correlation_id = %correlation_id, year, count, "Holidays replaced");
    json_response(StatusCode::OK, HolidaysReplaced { year, count })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}
