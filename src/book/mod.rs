//! Address book: the name-keyed record collection and the
//! upcoming-birthday query.

use crate::domain::{adjust_for_weekend, format_date};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Default forward window, in days, for birthday reporting.
/// Inclusive on both ends: a birthday today and a birthday in exactly
/// seven days are both reported.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// One row of the upcoming-birthday report.
///
/// `birthday` is the congratulation date as `DD.MM.YYYY`, already shifted
/// off weekends, not necessarily the contact's actual birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The congratulation date, formatted `DD.MM.YYYY`
    pub birthday: String,
}

/// A collection of contact records keyed by name.
///
/// The book owns its map outright and exposes only record-level
/// operations; keys always equal the stored record's name. Records are
/// kept in name order.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// Re-adding a name silently replaces the prior record in full
    /// (last-write-wins); old phones and birthday are discarded.
    pub fn add_record(&mut self, record: Record) {
        debug!(name = record.name(), "adding record");
        self.records.insert(record.name().to_string(), record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record exists for `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        match self.records.remove(name) {
            Some(_) => {
                debug!(name, "deleted record");
                Ok(())
            }
            None => Err(BookError::ContactNotFound(name.to_string())),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays falling within the default 7-day window from today.
    ///
    /// Uses the process clock's local date; see
    /// [`upcoming_birthdays`](Self::upcoming_birthdays) for the
    /// deterministic variant.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays whose next occurrence falls within `window_days` of
    /// `today`, inclusive on both ends.
    ///
    /// For each record with a birthday, the birthday's next occurrence on
    /// or after `today` is computed (February 29 counts as March 1 in
    /// non-leap years). Occurrences inside the window are reported, with
    /// Saturday/Sunday dates shifted to the following Monday. Records
    /// without a birthday are skipped. Results come back in name order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut occurrence = occurrence_in_year(birthday.date(), today.year())?;
                if occurrence < today {
                    occurrence = occurrence_in_year(birthday.date(), today.year() + 1)?;
                }
                let delta = (occurrence - today).num_days();
                if !(0..=window_days).contains(&delta) {
                    return None;
                }
                let congratulation = adjust_for_weekend(occurrence);
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: format_date(congratulation),
                })
            })
            .collect()
    }
}

/// The occurrence of `birthday` in `year`.
///
/// A February 29 birthday maps to March 1 when `year` is not a leap year.
/// `None` only for years outside chrono's range, which the caller treats
/// as "no occurrence".
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
