//! Shift category model.
//!
//! A shift category is a named work-time template such as "Morning" or
//! "Night", referenced by id from shift assignments.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A named work-time template with clock start and end times.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::models::ShiftCategory;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let night = ShiftCategory {
///     id: 7,
///     name: "Night".to_string(),
///     work_start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     work_end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// };
/// assert!(night.is_overnight());
/// assert_eq!(night.duration_hours(), Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCategory {
    /// Unique identifier for the category.
    pub id: i64,
    /// Display name (e.g., "Morning").
    pub name: String,
    /// Clock time the shift starts.
    #[serde(with = "clock_time")]
    pub work_start_time: NaiveTime,
    /// Clock time the shift ends. Earlier than the start for overnight shifts.
    #[serde(with = "clock_time")]
    pub work_end_time: NaiveTime,
}

impl ShiftCategory {
    /// Returns true if the shift ends on the following calendar day.
    pub fn is_overnight(&self) -> bool {
        self.work_end_time < self.work_start_time
    }

    /// Returns the scheduled length of the shift in hours.
    ///
    /// Overnight shifts wrap through midnight. Equal start and end times
    /// are a zero-length shift.
    pub fn duration_hours(&self) -> Decimal {
        let mut minutes = (self.work_end_time - self.work_start_time).num_minutes();
        if minutes < 0 {
            minutes += MINUTES_PER_DAY;
        }
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// Serde helpers for `HH:MM` clock times. Seconds are accepted on input.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| D::Error::custom(format!("invalid clock time '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(start: (u32, u32), end: (u32, u32)) -> ShiftCategory {
        ShiftCategory {
            id: 1,
            name: "Test".to_string(),
            work_start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            work_end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn test_day_shift_duration() {
        let shift = category((9, 0), (17, 0));
        assert!(!shift.is_overnight());
        assert_eq!(shift.duration_hours(), Decimal::new(80, 1)); // 8.0
    }

    #[test]
    fn test_overnight_shift_duration_wraps_midnight() {
        let shift = category((22, 0), (6, 0));
        assert!(shift.is_overnight());
        assert_eq!(shift.duration_hours(), Decimal::new(80, 1)); // 8.0
    }

    #[test]
    fn test_partial_hour_duration() {
        let shift = category((7, 30), (15, 45));
        assert_eq!(shift.duration_hours(), Decimal::new(825, 2)); // 8.25
    }

    #[test]
    fn test_equal_times_is_zero_length() {
        let shift = category((9, 0), (9, 0));
        assert!(!shift.is_overnight());
        assert_eq!(shift.duration_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_hh_mm_times() {
        let json = r#"{
            "id": 7,
            "name": "Night",
            "work_start_time": "22:00",
            "work_end_time": "06:00"
        }"#;

        let category: ShiftCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Night");
        assert_eq!(
            category.work_start_time,
            NaiveTime::from_hms_opt(22, 0, 0).unwrap()
        );
        assert_eq!(
            category.work_end_time,
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_accepts_seconds() {
        let json = r#"{
            "id": 1,
            "name": "Morning",
            "work_start_time": "08:00:00",
            "work_end_time": "16:30:00"
        }"#;

        let category: ShiftCategory = serde_json::from_str(json).unwrap();
        assert_eq!(
            category.work_end_time,
            NaiveTime::from_hms_opt(16, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_time() {
        let json = r#"{
            "id": 1,
            "name": "Broken",
            "work_start_time": "25:00",
            "work_end_time": "06:00"
        }"#;

        let result: Result<ShiftCategory, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_hh_mm() {
        let shift = category((22, 0), (6, 0));
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"work_start_time\":\"22:00\""));
        assert!(json.contains("\"work_end_time\":\"06:00\""));
    }
}
