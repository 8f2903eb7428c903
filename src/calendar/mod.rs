//! Calendar resolution for the Shift Calendar Engine.
//!
//! This module contains the lookup structures built from reference data
//! ([`ShiftMap`], [`HolidayIndex`]), the per-staff [`ShiftResolver`], the
//! month grid used by calendar views, local-date key helpers, schedule
//! summaries and the [`ReferenceData`] snapshot shared between requests.

mod holiday_index;
mod local_date;
mod month;
mod reference;
mod resolver;
mod shift_map;
mod summary;

pub use holiday_index::{HolidayIndex, HolidayLookup};
pub use local_date::{DATE_KEY_FORMAT, date_key, local_date, local_date_key, utc_offset};
pub use month::CalendarMonth;
pub use reference::ReferenceData;
pub use resolver::{ActiveShifts, ShiftResolver};
pub use shift_map::ShiftMap;
pub use summary::ScheduleSummary;
