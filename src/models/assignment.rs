//! Shift assignment model.
//!
//! A shift assignment is one staff member's rule for deriving which shift
//! category applies on a given day: by explicit date within a period, by
//! weekday, or as a blanket default.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::weekday::weekday_key;

/// The kind of a shift assignment, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    /// Explicit per-date shifts inside an inclusive date range.
    SpecificPeriod,
    /// Shifts keyed by day of the week.
    Weekly,
    /// Unconditional fallback shift.
    Default,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::SpecificPeriod => write!(f, "SPECIFIC_PERIOD"),
            ShiftType::Weekly => write!(f, "WEEKLY"),
            ShiftType::Default => write!(f, "DEFAULT"),
        }
    }
}

/// A staff member's configured shift rule.
///
/// Serialized with a `shift_type` tag:
///
/// ```
/// use shift_calendar_engine::models::{ShiftAssignment, ShiftType};
///
/// let json = r#"{
///     "shift_type": "WEEKLY",
///     "day_to_shift_category_id": { "MONDAY": 3 }
/// }"#;
/// let assignment: ShiftAssignment = serde_json::from_str(json).unwrap();
/// assert_eq!(assignment.shift_type(), ShiftType::Weekly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shift_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftAssignment {
    /// Explicit shifts for individual dates within `from_date..=to_date`.
    SpecificPeriod {
        /// First date of the period (inclusive).
        from_date: NaiveDate,
        /// Last date of the period (inclusive).
        to_date: NaiveDate,
        /// Shift category id per date.
        #[serde(default)]
        date_to_shift_category_id: BTreeMap<NaiveDate, i64>,
    },
    /// Shifts keyed by upper-case weekday name (e.g. "MONDAY").
    Weekly {
        /// Shift category id per weekday name.
        #[serde(default)]
        day_to_shift_category_id: BTreeMap<String, i64>,
    },
    /// A single shift category that applies on any day.
    Default {
        /// The fallback shift category id, if one is configured.
        #[serde(default)]
        default_shift_category_id: Option<i64>,
    },
}

impl ShiftAssignment {
    /// Returns the kind of this assignment.
    pub fn shift_type(&self) -> ShiftType {
        match self {
            ShiftAssignment::SpecificPeriod { .. } => ShiftType::SpecificPeriod,
            ShiftAssignment::Weekly { .. } => ShiftType::Weekly,
            ShiftAssignment::Default { .. } => ShiftType::Default,
        }
    }

    /// Returns the shift category id this rule assigns to the given day.
    ///
    /// `None` means the rule does not cover the day and resolution should
    /// continue with the next rule. Weekly keys are matched exactly against
    /// the upper-case weekday name; see [`ShiftAssignment::normalized`].
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar_engine::models::ShiftAssignment;
    /// use chrono::{NaiveDate, Weekday};
    /// use std::collections::BTreeMap;
    ///
    /// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    ///
    /// let period = ShiftAssignment::SpecificPeriod {
    ///     from_date: from,
    ///     to_date: to,
    ///     date_to_shift_category_id: BTreeMap::from([(day, 7)]),
    /// };
    /// assert_eq!(period.category_for(day, Weekday::Mon), Some(7));
    /// assert_eq!(period.category_for(day.succ_opt().unwrap(), Weekday::Tue), None);
    /// ```
    pub fn category_for(&self, date: NaiveDate, weekday: Weekday) -> Option<i64> {
        match self {
            ShiftAssignment::SpecificPeriod {
                from_date,
                to_date,
                date_to_shift_category_id,
            } => {
                if date < *from_date || date > *to_date {
                    return None;
                }
                date_to_shift_category_id.get(&date).copied()
            }
            ShiftAssignment::Weekly {
                day_to_shift_category_id,
            } => day_to_shift_category_id
                .get(weekday_key(weekday))
                .copied(),
            ShiftAssignment::Default {
                default_shift_category_id,
            } => *default_shift_category_id,
        }
    }

    /// Returns a copy with weekday keys trimmed and upper-cased.
    ///
    /// If two keys collapse onto the same name, the first in key order wins.
    pub fn normalized(self) -> Self {
        match self {
            ShiftAssignment::Weekly {
                day_to_shift_category_id,
            } => {
                let mut normalized = BTreeMap::new();
                for (key, id) in day_to_shift_category_id {
                    normalized
                        .entry(key.trim().to_ascii_uppercase())
                        .or_insert(id);
                }
                ShiftAssignment::Weekly {
                    day_to_shift_category_id: normalized,
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn january_period() -> ShiftAssignment {
        ShiftAssignment::SpecificPeriod {
            from_date: date("2024-01-01"),
            to_date: date("2024-01-31"),
            date_to_shift_category_id: BTreeMap::from([
                (date("2024-01-01"), 1),
                (date("2024-01-15"), 7),
                (date("2024-01-31"), 2),
                (date("2024-02-01"), 9),
            ]),
        }
    }

    #[test]
    fn test_specific_period_matches_listed_date() {
        let period = january_period();
        assert_eq!(period.category_for(date("2024-01-15"), Weekday::Mon), Some(7));
    }

    #[test]
    fn test_specific_period_bounds_are_inclusive() {
        let period = january_period();
        assert_eq!(period.category_for(date("2024-01-01"), Weekday::Mon), Some(1));
        assert_eq!(period.category_for(date("2024-01-31"), Weekday::Wed), Some(2));
    }

    #[test]
    fn test_specific_period_ignores_entries_outside_range() {
        let period = january_period();
        assert_eq!(period.category_for(date("2024-02-01"), Weekday::Thu), None);
    }

    #[test]
    fn test_specific_period_unlisted_date_in_range() {
        let period = january_period();
        assert_eq!(period.category_for(date("2024-01-16"), Weekday::Tue), None);
    }

    #[test]
    fn test_weekly_matches_weekday_name() {
        let weekly = ShiftAssignment::Weekly {
            day_to_shift_category_id: BTreeMap::from([("MONDAY".to_string(), 3)]),
        };
        assert_eq!(weekly.category_for(date("2024-01-15"), Weekday::Mon), Some(3));
        assert_eq!(weekly.category_for(date("2024-01-16"), Weekday::Tue), None);
    }

    #[test]
    fn test_weekly_lowercase_key_needs_normalizing() {
        let weekly = ShiftAssignment::Weekly {
            day_to_shift_category_id: BTreeMap::from([("monday".to_string(), 3)]),
        };
        assert_eq!(weekly.category_for(date("2024-01-15"), Weekday::Mon), None);

        let weekly = weekly.normalized();
        assert_eq!(weekly.category_for(date("2024-01-15"), Weekday::Mon), Some(3));
    }

    #[test]
    fn test_normalized_collision_keeps_first_key() {
        let weekly = ShiftAssignment::Weekly {
            day_to_shift_category_id: BTreeMap::from([
                ("MONDAY".to_string(), 3),
                ("monday".to_string(), 4),
            ]),
        }
        .normalized();

        assert_eq!(weekly.category_for(date("2024-01-15"), Weekday::Mon), Some(3));
    }

    #[test]
    fn test_default_applies_every_day() {
        let default = ShiftAssignment::Default {
            default_shift_category_id: Some(5),
        };
        assert_eq!(default.category_for(date("2024-06-01"), Weekday::Sat), Some(5));

        let empty = ShiftAssignment::Default {
            default_shift_category_id: None,
        };
        assert_eq!(empty.category_for(date("2024-06-01"), Weekday::Sat), None);
    }

    #[test]
    fn test_deserialize_specific_period() {
        let json = r#"{
            "shift_type": "SPECIFIC_PERIOD",
            "from_date": "2024-01-01",
            "to_date": "2024-01-31",
            "date_to_shift_category_id": { "2024-01-15": 7 }
        }"#;

        let assignment: ShiftAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.shift_type(), ShiftType::SpecificPeriod);
        assert_eq!(
            assignment.category_for(date("2024-01-15"), Weekday::Mon),
            Some(7)
        );
    }

    #[test]
    fn test_deserialize_default_without_id() {
        let json = r#"{ "shift_type": "DEFAULT" }"#;
        let assignment: ShiftAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(
            assignment,
            ShiftAssignment::Default {
                default_shift_category_id: None
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_shift_type() {
        let json = r#"{ "shift_type": "MONTHLY" }"#;
        let result: Result<ShiftAssignment, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_shift_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftType::SpecificPeriod).unwrap(),
            "\"SPECIFIC_PERIOD\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftType::Weekly).unwrap(),
            "\"WEEKLY\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftType::Default).unwrap(),
            "\"DEFAULT\""
        );
        assert_eq!(ShiftType::SpecificPeriod.to_string(), "SPECIFIC_PERIOD");
    }
}
