//! Upper-case weekday names used as assignment keys.
//!
//! Weekly assignments key their map by English day names in upper case
//! ("MONDAY" .. "SUNDAY"). These helpers convert between those keys and
//! [`chrono::Weekday`].

use chrono::Weekday;

/// Returns the upper-case English name of a weekday.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::models::weekday_key;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_key(Weekday::Mon), "MONDAY");
/// assert_eq!(weekday_key(Weekday::Sun), "SUNDAY");
/// ```
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// Parses a weekday name, ignoring case and surrounding whitespace.
///
/// Only full English names are accepted; anything else is `None`.
pub fn parse_weekday_key(key: &str) -> Option<Weekday> {
    match key.trim().to_ascii_uppercase().as_str() {
        "MONDAY" => Some(Weekday::Mon),
        "TUESDAY" => Some(Weekday::Tue),
        "WEDNESDAY" => Some(Weekday::Wed),
        "THURSDAY" => Some(Weekday::Thu),
        "FRIDAY" => Some(Weekday::Fri),
        "SATURDAY" => Some(Weekday::Sat),
        "SUNDAY" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Serde adapter that writes a [`Weekday`] as its upper-case name.
pub(crate) mod upper_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_key(*weekday))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_weekday_key(&raw)
            .ok_or_else(|| D::Error::custom(format!("unknown weekday '{}'", raw)))
    }
}
