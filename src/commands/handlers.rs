//! Command handlers.
//!
//! Each handler takes the parsed arguments and the address book, performs
//! one operation, and returns the line to print. Validation and not-found
//! errors from the core propagate out unrendered; the REPL turns them into
//! user-facing messages.

use crate::book::AddressBook;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// `add <name> <phone>` — create the contact or extend an existing one.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = two_args(args, "add <name> <phone>")?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone).map_err(BookError::from)?;
        debug!(name, "phone added to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str()).map_err(BookError::from)?;
    record.add_phone(phone).map_err(BookError::from)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>` — replace one phone number.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = three_args(args, "change <name> <old_phone> <new_phone>")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    record.edit_phone(old, new)?;
    Ok("Phone changed.".to_string())
}

/// `phone <name>` — list the contact's phone numbers.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = one_arg(args, "phone <name>")?;

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(phones)
}

/// `all` — render every stored contact, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book.to_string())
}

/// `delete <name>` — remove a contact outright.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = one_arg(args, "delete <name>")?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>` — set (or overwrite) a birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = two_args(args, "add-birthday <name> <DD.MM.YYYY>")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    record.add_birthday(date).map_err(BookError::from)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>` — print the contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = one_arg(args, "show-birthday <name>")?;

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    match record.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok(format!("No birthday set for {}.", name)),
    }
}

/// `birthdays` — report who to congratulate within the window.
pub fn birthdays(book: &AddressBook, window_days: i64) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(chrono::Local::now().date_naive(), window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    let lines = upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.birthday))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(lines)
}

fn one_arg<'a>(args: &'a [String], usage: &str) -> CommandResult<[&'a String; 1]> {
    match args {
        [a] => Ok([a]),
        _ => Err(CommandError::invalid_arguments(usage)),
    }
}

fn two_args<'a>(args: &'a [String], usage: &str) -> CommandResult<[&'a String; 2]> {
    match args {
        [a, b] => Ok([a, b]),
        _ => Err(CommandError::invalid_arguments(usage)),
    }
}

fn three_args<'a>(args: &'a [String], usage: &str) -> CommandResult<[&'a String; 3]> {
    match args {
        [a, b, c] => Ok([a, b, c]),
        _ => Err(CommandError::invalid_arguments(usage)),
    }
}
