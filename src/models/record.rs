//! Record model representing one person in the contact book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use std::fmt;

/// One person's stored contact data.
///
/// A record owns a validated name (immutable, doubles as the address book
/// key), an ordered list of phone numbers (duplicates allowed, insertion
/// order preserved), and at most one birthday.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// All stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are allowed. On validation failure nothing is appended.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first stored phone equal to `raw`.
    ///
    /// Silent no-op when no such phone exists.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == raw) {
            self.phones.remove(pos);
        }
    }

    /// Replace one instance of `old` with `new`.
    ///
    /// `new` is validated and appended before `old` is removed, so a failed
    /// validation leaves the phone list untouched. The transient duplicate
    /// between the two steps is never observable (single-threaded).
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is not stored, or the
    /// validation error for `new`; phones are unchanged in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    /// The first stored phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validate `raw` and set it as the birthday.
    ///
    /// An existing birthday is overwritten (last-write-wins). On validation
    /// failure the prior birthday is untouched.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
