//! Request types for the Shift Calendar Engine API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ShiftAssignment, StaffSchedule};

/// Request body for the `/calendar` endpoint.
///
/// Resolves one month for every listed staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The calendar year.
    pub year: i32,
    /// The month number (1-12).
    pub month: u32,
    /// Only include staff from this department, if given.
    #[serde(default)]
    pub department: Option<String>,
    /// Staff members and their shift assignments.
    pub staff: Vec<StaffSchedule>,
}

/// Request body for the `/resolve` endpoint.
///
/// Resolves the local calendar day containing `at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// The instant to resolve, as RFC 3339.
    pub at: DateTime<Utc>,
    /// The staff member's shift assignments.
    #[serde(default)]
    pub assignments: Vec<ShiftAssignment>,
}
