//! Shift resolution for a single staff member.
//!
//! For each calendar day the resolver produces exactly one
//! [`Resolution`], checking in priority order (first match wins):
//!
//! 1. a holiday in the [`HolidayIndex`](super::HolidayIndex);
//! 2. the active `SPECIFIC_PERIOD` assignment, if its range covers the date
//!    and it lists the exact date;
//! 3. the active `WEEKLY` assignment, if it lists the date's weekday;
//! 4. the active `DEFAULT` assignment, if it names a category;
//! 5. otherwise no shift.
//!
//! When the matching rule points at a category id missing from the
//! [`ShiftMap`], the day resolves to [`Resolution::NoShift`]. Resolution
//! never returns an error.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::models::{DayResolution, Resolution, ShiftAssignment, ShiftType};

use super::holiday_index::HolidayLookup;
use super::month::{CalendarMonth, date_range};
use super::shift_map::ShiftMap;

/// At most one assignment per [`ShiftType`], taken from a staff member's
/// assignment list.
///
/// The first assignment of each type in list order is kept; later ones of
/// the same type are discarded. The kept assignment need not be able to
/// match: a leading `DEFAULT` with no `default_shift_category_id` hides a
/// later `DEFAULT` that names one, and those days resolve to
/// [`Resolution::NoShift`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveShifts {
    specific_period: Option<ShiftAssignment>,
    weekly: Option<ShiftAssignment>,
    default: Option<ShiftAssignment>,
}

impl ActiveShifts {
    /// Collects the active assignments from a staff member's list.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar_engine::calendar::ActiveShifts;
    /// use shift_calendar_engine::models::{ShiftAssignment, ShiftType};
    ///
    /// let active = ActiveShifts::from_assignments(&[
    ///     ShiftAssignment::Default { default_shift_category_id: Some(5) },
    ///     ShiftAssignment::Default { default_shift_category_id: Some(6) },
    /// ]);
    ///
    /// assert_eq!(
    ///     active.get(ShiftType::Default),
    ///     Some(&ShiftAssignment::Default { default_shift_category_id: Some(5) })
    /// );
    /// ```
    pub fn from_assignments<'a, I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = &'a ShiftAssignment>,
    {
        let mut active = Self::default();
        for (position, assignment) in assignments.into_iter().enumerate() {
            let shift_type = assignment.shift_type();
            let slot = active.slot_mut(shift_type);
            if slot.is_some() {
                warn!(
                    %shift_type,
                    position,
                    "Ignoring duplicate shift assignment; first of each type wins"
                );
                continue;
            }
            *slot = Some(assignment.clone().normalized());
        }
        active
    }

    /// Returns the active assignment of the given type.
    pub fn get(&self, shift_type: ShiftType) -> Option<&ShiftAssignment> {
        match shift_type {
            ShiftType::SpecificPeriod => self.specific_period.as_ref(),
            ShiftType::Weekly => self.weekly.as_ref(),
            ShiftType::Default => self.default.as_ref(),
        }
    }

    /// Returns true if no assignment is active.
    pub fn is_empty(&self) -> bool {
        self.specific_period.is_none() && self.weekly.is_none() && self.default.is_none()
    }

    /// Iterates over the active assignments in resolution priority order.
    pub fn in_priority_order(&self) -> impl Iterator<Item = &ShiftAssignment> {
        [&self.specific_period, &self.weekly, &self.default]
            .into_iter()
            .flatten()
    }

    fn slot_mut(&mut self, shift_type: ShiftType) -> &mut Option<ShiftAssignment> {
        match shift_type {
            ShiftType::SpecificPeriod => &mut self.specific_period,
            ShiftType::Weekly => &mut self.weekly,
            ShiftType::Default => &mut self.default,
        }
    }
}

/// Resolves calendar days for one staff member against shared reference
/// data.
///
/// The resolver borrows the [`ShiftMap`] and its holidays; both are
/// treated as immutable for the resolver's lifetime.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::calendar::{HolidayIndex, ShiftMap, ShiftResolver};
/// use shift_calendar_engine::models::{Resolution, ShiftAssignment, ShiftCategory};
/// use chrono::{NaiveDate, NaiveTime};
/// use std::collections::BTreeMap;
///
/// let shifts = ShiftMap::build(vec![ShiftCategory {
///     id: 3,
///     name: "Morning".to_string(),
///     work_start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     work_end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// }]);
/// let holidays = HolidayIndex::empty(2024);
/// let assignments = vec![ShiftAssignment::Weekly {
///     day_to_shift_category_id: BTreeMap::from([("MONDAY".to_string(), 3)]),
/// }];
///
/// let resolver = ShiftResolver::new(&shifts, &holidays, &assignments);
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(resolver.resolve(monday).category().map(|c| c.id), Some(3));
///
/// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
/// assert_eq!(resolver.resolve(tuesday), Resolution::NoShift);
/// ```
#[derive(Debug, Clone)]
pub struct ShiftResolver<'a> {
    shifts: &'a ShiftMap,
    holidays: &'a dyn HolidayLookup,
    active: ActiveShifts,
}

impl<'a> ShiftResolver<'a> {
    /// Creates a resolver for one staff member's assignment list.
    ///
    /// `holidays` is usually a single-year [`HolidayIndex`](super::HolidayIndex). Pass a
    /// [`ReferenceData`](super::ReferenceData) snapshot when dates may fall
    /// in more than one year, as month grids do.
    pub fn new(
        shifts: &'a ShiftMap,
        holidays: &'a dyn HolidayLookup,
        assignments: &[ShiftAssignment],
    ) -> Self {
        Self {
            shifts,
            holidays,
            active: ActiveShifts::from_assignments(assignments),
        }
    }

    /// Returns the assignments the resolver is using.
    pub fn active_shifts(&self) -> &ActiveShifts {
        &self.active
    }

    /// Resolves a date, deriving its weekday.
    pub fn resolve(&self, date: NaiveDate) -> Resolution {
        self.resolve_on(date, date.weekday())
    }

    /// Resolves a date whose weekday the caller has already computed.
    pub fn resolve_on(&self, date: NaiveDate, weekday: Weekday) -> Resolution {
        if let Some(name) = self.holidays.holiday_on(date) {
            return Resolution::Holiday {
                name: name.to_string(),
            };
        }

        for assignment in self.active.in_priority_order() {
            let Some(category_id) = assignment.category_for(date, weekday) else {
                continue;
            };

            return match self.shifts.lookup(category_id) {
                Some(category) => Resolution::Shift {
                    category: category.clone(),
                    source: assignment.shift_type(),
                },
                None => {
                    debug!(
                        %date,
                        category_id,
                        shift_type = %assignment.shift_type(),
                        "Shift category not found; no shift for date"
                    );
                    Resolution::NoShift
                }
            };
        }

        Resolution::NoShift
    }

    /// Resolves every date from `start` to `end` inclusive.
    ///
    /// Returns an empty list when `start > end`.
    pub fn resolve_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<DayResolution> {
        date_range(start, end)
            .into_iter()
            .map(|date| self.resolve_day(date))
            .collect()
    }

    /// Resolves every cell of a month grid.
    pub fn resolve_month(&self, month: &CalendarMonth) -> Vec<DayResolution> {
        self.resolve_range(month.grid_start(), month.grid_end())
    }

    fn resolve_day(&self, date: NaiveDate) -> DayResolution {
        let weekday = date.weekday();
        DayResolution {
            date,
            weekday,
            resolution: self.resolve_on(date, weekday),
        }
    }
}
