//! HTTP API module for the Shift Calendar Engine.
//!
//! This module provides the REST endpoints for resolving staff calendars
//! and for replacing the reference data they resolve against.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarRequest, ResolveRequest};
pub use response::{
    ApiError, CalendarResponse, HolidaysReplaced, ShiftCategoriesReplaced, StaffCalendar,
};
pub use state::AppState;
