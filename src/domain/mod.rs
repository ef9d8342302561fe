//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact names, phone numbers, and birthdays. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system.
//!
//! The date helpers used by birthday scheduling (`format_date`,
//! `find_next_weekday`, `adjust_for_weekend`) live alongside `Birthday`
//! as free pure functions.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{adjust_for_weekend, find_next_weekday, format_date, Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
