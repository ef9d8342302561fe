//! Integration tests for the upcoming-birthday report.
//!
//! All scenarios pin `today` explicitly, so the assertions are stable no
//! matter when the suite runs.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record, UpcomingBirthday, DEFAULT_WINDOW_DAYS};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn contact(name: &str, phone: &str, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid name");
    record.add_phone(phone).expect("valid phone");
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid birthday");
    }
    record
}

/// The reference scenario: Monday 2024-06-10, four contacts.
///
/// - Ann's birthday lands on Wednesday and is reported as-is
/// - Bob's lands on Saturday and is shifted to Monday the 17th
/// - Cid's is 10 days out, beyond the window
/// - Dee has no birthday set
#[test]
fn test_reference_week() {
    let mut book = AddressBook::new();
    book.add_record(contact("Ann", "0501234567", Some("12.06.1990")));
    book.add_record(contact("Bob", "0661112233", Some("15.06.1985")));
    book.add_record(contact("Cid", "0739998877", Some("20.06.1970")));
    book.add_record(contact("Dee", "0991234567", None));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), DEFAULT_WINDOW_DAYS);

    assert_eq!(
        upcoming,
        vec![
            UpcomingBirthday {
                name: "Ann".to_string(),
                birthday: "12.06.2024".to_string(),
            },
            UpcomingBirthday {
                name: "Bob".to_string(),
                birthday: "17.06.2024".to_string(),
            },
        ]
    );
}

/// Both window edges are inclusive: today and today + 7.
#[test]
fn test_window_edges() {
    let mut book = AddressBook::new();
    book.add_record(contact("Today", "0501234567", Some("10.06.1990")));
    book.add_record(contact("Last", "0661112233", Some("17.06.1990")));
    book.add_record(contact("Past", "0739998877", Some("09.06.1990")));
    book.add_record(contact("Beyond", "0991234567", Some("18.06.1990")));

    let today = date(2024, 6, 10); // Monday
    let upcoming = book.upcoming_birthdays(today, DEFAULT_WINDOW_DAYS);
    let names: Vec<&str> = upcoming.iter().map(|u| u.name.as_str()).collect();

    // "Past" rolled to June 2025, far outside the window.
    assert_eq!(names, vec!["Last", "Today"]);
}

/// A Sunday occurrence is shifted to Monday like a Saturday one.
#[test]
fn test_sunday_shifts_to_monday() {
    let mut book = AddressBook::new();
    book.add_record(contact("Sun", "0501234567", Some("16.06.1990")));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 10), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "17.06.2024");
}

/// The window check uses the real occurrence; the shift happens after.
/// A Saturday birthday exactly 7 days out is still reported even though
/// the shifted Monday lies outside the window.
#[test]
fn test_shift_does_not_evict_from_window() {
    let mut book = AddressBook::new();
    // Saturday 2024-06-15 is 7 days after Saturday 2024-06-08.
    book.add_record(contact("Edge", "0501234567", Some("15.06.1990")));

    let upcoming = book.upcoming_birthdays(date(2024, 6, 8), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "17.06.2024");
}

/// The report crosses year boundaries for late-December windows.
#[test]
fn test_year_boundary_rollover() {
    let mut book = AddressBook::new();
    book.add_record(contact("NewYear", "0501234567", Some("01.01.1990")));

    // Monday 2024-12-30; Jan 1 2025 falls on a Wednesday.
    let upcoming = book.upcoming_birthdays(date(2024, 12, 30), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "01.01.2025");
}

/// Feb 29 birthdays count as March 1 in non-leap years, and still get the
/// weekend shift (March 1 2025 is a Saturday).
#[test]
fn test_leap_day_birthday_in_non_leap_year() {
    let mut book = AddressBook::new();
    book.add_record(contact("Leap", "0501234567", Some("29.02.2000")));

    let upcoming = book.upcoming_birthdays(date(2025, 2, 25), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "03.03.2025");
}

/// Feb 29 birthdays are reported on the day itself in leap years.
#[test]
fn test_leap_day_birthday_in_leap_year() {
    let mut book = AddressBook::new();
    book.add_record(contact("Leap", "0501234567", Some("29.02.2000")));

    // Thursday 2024-02-29 falls within the window of Monday 2024-02-26.
    let upcoming = book.upcoming_birthdays(date(2024, 2, 26), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "29.02.2024");
}

/// A wider window from config picks up more birthdays.
#[test]
fn test_configurable_window() {
    let mut book = AddressBook::new();
    book.add_record(contact("Cid", "0739998877", Some("20.06.1970")));

    let today = date(2024, 6, 10);
    assert!(book.upcoming_birthdays(today, 7).is_empty());

    let upcoming = book.upcoming_birthdays(today, 14);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "20.06.2024"); // Thursday, no shift
}

/// Report rows serialize as {"name", "birthday"} objects.
#[test]
fn test_report_row_serialization() {
    let row = UpcomingBirthday {
        name: "Ann".to_string(),
        birthday: "12.06.2024".to_string(),
    };
    let json = serde_json::to_string(&row).unwrap();
    assert_eq!(json, r#"{"name":"Ann","birthday":"12.06.2024"}"#);
}
