//! Contact Book - a console assistant bot for names, phone numbers, and birthdays.
//!
//! The bot stores contacts in an in-memory address book for the lifetime of
//! the process and can report which contacts have birthdays in the coming
//! week, with weekend occurrences shifted to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (Name, PhoneNumber, Birthday) and
//!   pure date helpers
//! - **models**: the Record aggregate for one person
//! - **book**: the name-keyed AddressBook and the upcoming-birthday query
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **commands**: input parsing and the per-command handlers

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::Record;
