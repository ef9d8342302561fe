//! Birthday value object and date helper functions.

use super::errors::ValidationError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date pattern used everywhere a birthday crosses the user boundary.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Constructed from a `DD.MM.YYYY` string and stored as a parsed
/// calendar date; the original string representation is discarded.
/// Impossible calendar dates (e.g. `31.04.2000`) are rejected at
/// construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("17.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "17.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, parsing the `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not
    /// parse as a valid calendar date in that pattern.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;
        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as a `DD.MM.YYYY` string.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Find the next occurrence of `weekday` strictly after `start`.
///
/// When `start` already falls on `weekday`, the result is one week
/// later, never `start` itself.
pub fn find_next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let days_ahead = (weekday.num_days_from_monday() as i64
        - start.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    start + Duration::days(days_ahead)
}

/// Move a Saturday or Sunday date to the following Monday; any other
/// date is returned unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => find_next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        format_date(self.0).serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}
