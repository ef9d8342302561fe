//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A valid number is exactly ten decimal digits with no separators or
/// formatting characters; nothing is stripped or normalized.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII decimal digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
