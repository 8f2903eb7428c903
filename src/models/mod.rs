//! Core data models for the Shift Calendar Engine.
//!
//! This module contains the domain models shared by the resolver, the
//! configuration loader and the HTTP API.

mod assignment;
mod holiday;
mod resolution;
mod shift_category;
mod staff;
mod weekday;

pub use assignment::{ShiftAssignment, ShiftType};
pub use holiday::Holiday;
pub use resolution::{DayResolution, Resolution};
pub use shift_category::ShiftCategory;
pub use staff::{Staff, StaffSchedule};
pub use weekday::{parse_weekday_key, weekday_key};

pub(crate) use weekday::upper_name as weekday_serde;
